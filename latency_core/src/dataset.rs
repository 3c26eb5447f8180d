use crate::record::{TelemetryRecord, Uptime};
use std::collections::HashMap;

/// Samples belonging to a single region, latencies kept in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionSamples {
    latencies: Vec<u64>,
    up_count: u64,
}

impl RegionSamples {
    fn push_unsorted(&mut self, latency_ms: u64, uptime: Uptime) {
        self.latencies.push(latency_ms);
        if uptime.is_up() {
            self.up_count += 1;
        }
    }

    /// Latencies in ascending order.
    pub fn latencies(&self) -> &[u64] {
        &self.latencies
    }

    pub fn up_count(&self) -> u64 {
        self.up_count
    }

    pub fn len(&self) -> usize {
        self.latencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.latencies.is_empty()
    }
}

/// Immutable telemetry loaded once at startup.
///
/// Records are grouped by region at construction so lookups never rescan the
/// full record list. Share it between tasks behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct TelemetryDataset {
    records: Vec<TelemetryRecord>,
    by_region: HashMap<String, RegionSamples>,
}

impl TelemetryDataset {
    pub fn new(records: Vec<TelemetryRecord>) -> Self {
        let mut by_region: HashMap<String, RegionSamples> = HashMap::new();
        for record in &records {
            by_region
                .entry(record.region.clone())
                .or_default()
                .push_unsorted(record.latency_ms, record.uptime);
        }
        for samples in by_region.values_mut() {
            samples.latencies.sort_unstable();
        }

        Self { records, by_region }
    }

    pub fn records(&self) -> &[TelemetryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Samples for `name`; matching is exact and case-sensitive.
    pub fn region(&self, name: &str) -> Option<&RegionSamples> {
        self.by_region.get(name)
    }

    /// Region names in lexical order.
    pub fn regions(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_region.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn region_count(&self) -> usize {
        self.by_region.len()
    }
}
