use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Availability flag of a single telemetry sample.
///
/// Wire form is the integer `0` or `1`; booleans are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Uptime {
    Down,
    Up,
}

impl Uptime {
    pub fn as_u8(self) -> u8 {
        match self {
            Uptime::Down => 0,
            Uptime::Up => 1,
        }
    }

    pub fn is_up(self) -> bool {
        matches!(self, Uptime::Up)
    }
}

impl From<bool> for Uptime {
    fn from(up: bool) -> Self {
        if up {
            Uptime::Up
        } else {
            Uptime::Down
        }
    }
}

impl Serialize for Uptime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for Uptime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct UptimeVisitor;

        impl<'de> Visitor<'de> for UptimeVisitor {
            type Value = Uptime;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("0, 1, true or false")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Uptime, E> {
                Ok(Uptime::from(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Uptime, E> {
                match v {
                    0 => Ok(Uptime::Down),
                    1 => Ok(Uptime::Up),
                    other => Err(E::invalid_value(de::Unexpected::Unsigned(other), &self)),
                }
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Uptime, E> {
                match v {
                    0 => Ok(Uptime::Down),
                    1 => Ok(Uptime::Up),
                    other => Err(E::invalid_value(de::Unexpected::Signed(other), &self)),
                }
            }
        }

        deserializer.deserialize_any(UptimeVisitor)
    }
}

/// One latency/availability sample for a region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryRecord {
    pub region: String,
    pub latency_ms: u64,
    pub uptime: Uptime,
}

impl TelemetryRecord {
    pub fn new(region: impl Into<String>, latency_ms: u64, uptime: Uptime) -> Self {
        Self {
            region: region.into(),
            latency_ms,
            uptime,
        }
    }

    pub fn up(region: impl Into<String>, latency_ms: u64) -> Self {
        Self::new(region, latency_ms, Uptime::Up)
    }

    pub fn down(region: impl Into<String>, latency_ms: u64) -> Self {
        Self::new(region, latency_ms, Uptime::Down)
    }
}
