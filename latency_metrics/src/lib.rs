pub mod aggregator;
pub mod exporters;
pub mod report;

pub use aggregator::{percentile_index, MetricsAggregator, RegionStats, P95};
pub use report::RegionReport;
