use crate::aggregator::RegionStats;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Region statistics keyed by region name, in query order.
///
/// Serialises as a JSON object whose keys keep insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionReport {
    entries: Vec<(String, RegionStats)>,
}

impl RegionReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, region: impl Into<String>, stats: RegionStats) {
        self.entries.push((region.into(), stats));
    }

    pub fn get(&self, region: &str) -> Option<&RegionStats> {
        self.entries
            .iter()
            .find(|(name, _)| name == region)
            .map(|(_, stats)| stats)
    }

    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RegionStats)> {
        self.entries.iter().map(|(name, stats)| (name.as_str(), stats))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_breaches(&self) -> u64 {
        self.entries.iter().map(|(_, stats)| stats.breaches).sum()
    }
}

impl Serialize for RegionReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (region, stats) in &self.entries {
            map.serialize_entry(region, stats)?;
        }
        map.end()
    }
}
