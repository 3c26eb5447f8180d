use crate::report::RegionReport;
use latency_core::{RegionSamples, TelemetryDataset};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const P95: f64 = 0.95;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionStats {
    pub avg_latency: f64,
    pub p95_latency: u64,
    pub avg_uptime: f64,
    pub breaches: u64,
}

impl RegionStats {
    /// Returns `None` when the region has no samples.
    pub fn from_samples(samples: &RegionSamples, threshold_ms: i64) -> Option<Self> {
        let sorted = samples.latencies();
        if sorted.is_empty() {
            return None;
        }

        let count = sorted.len() as f64;
        let latency_sum: u128 = sorted.iter().map(|&l| u128::from(l)).sum();

        Some(Self {
            avg_latency: latency_sum as f64 / count,
            p95_latency: sorted[percentile_index(sorted.len(), P95)],
            avg_uptime: samples.up_count() as f64 / count,
            breaches: count_breaches(sorted, threshold_ms),
        })
    }
}

/// Zero-based nearest-rank-below index: `floor(quantile * (len - 1))`.
pub fn percentile_index(len: usize, quantile: f64) -> usize {
    if len == 0 {
        return 0;
    }

    let index = (quantile * (len - 1) as f64) as usize;
    index.min(len - 1)
}

/// Samples strictly above the threshold. `sorted` must be ascending.
fn count_breaches(sorted: &[u64], threshold_ms: i64) -> u64 {
    let within = match u64::try_from(threshold_ms) {
        Ok(threshold) => sorted.partition_point(|&latency| latency <= threshold),
        // every latency is above a negative threshold
        Err(_) => 0,
    };
    (sorted.len() - within) as u64
}

pub struct MetricsAggregator;

impl MetricsAggregator {
    /// Computes per-region statistics for each distinct requested region.
    ///
    /// Entries follow the first occurrence of each region in `regions`.
    /// Regions without records are left out of the report.
    pub fn compute<S: AsRef<str>>(
        dataset: &TelemetryDataset,
        regions: &[S],
        threshold_ms: i64,
    ) -> RegionReport {
        let mut seen: HashSet<&str> = HashSet::with_capacity(regions.len());
        let mut report = RegionReport::with_capacity(regions.len());

        for region in regions {
            let region = region.as_ref();
            if !seen.insert(region) {
                continue;
            }

            let stats = dataset
                .region(region)
                .and_then(|samples| RegionStats::from_samples(samples, threshold_ms));

            if let Some(stats) = stats {
                report.push(region, stats);
            }
        }

        report
    }
}
