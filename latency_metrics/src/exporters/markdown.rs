use crate::report::RegionReport;
use anyhow::Result;
use std::path::Path;

pub struct MarkdownExporter;

impl MarkdownExporter {
    pub async fn export(
        report: &RegionReport,
        threshold_ms: i64,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        let markdown = Self::format(report, threshold_ms);
        tokio::fs::write(path, markdown).await?;
        Ok(())
    }

    pub fn format(report: &RegionReport, threshold_ms: i64) -> String {
        let rows = if report.is_empty() {
            "| _no matching regions_ | | | | |".to_string()
        } else {
            report
                .iter()
                .map(|(region, stats)| {
                    format!(
                        "| {} | {:.2} | {} | {:.2}% | {} |",
                        region,
                        stats.avg_latency,
                        stats.p95_latency,
                        stats.avg_uptime * 100.0,
                        stats.breaches
                    )
                })
                .collect::<Vec<_>>()
                .join("\n")
        };

        format!(
            r#"# Regional Latency Report

## Summary

| Metric | Value |
|--------|-------|
| Threshold | {} ms |
| Regions | {} |
| Total Breaches | {} |

## Regions

| Region | Avg Latency (ms) | P95 Latency (ms) | Avg Uptime | Breaches |
|--------|------------------|------------------|------------|----------|
{}
"#,
            threshold_ms,
            report.len(),
            report.total_breaches(),
            rows,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MetricsAggregator;
    use latency_core::{TelemetryDataset, TelemetryRecord};

    #[test]
    fn test_format_lists_regions() {
        let dataset = TelemetryDataset::new(vec![
            TelemetryRecord::up("emea", 100),
            TelemetryRecord::down("emea", 300),
        ]);
        let report = MetricsAggregator::compute(&dataset, &["emea"], 150);

        let markdown = MarkdownExporter::format(&report, 150);
        assert!(markdown.contains("| Threshold | 150 ms |"));
        assert!(markdown.contains("| emea | 200.00 | 100 | 50.00% | 1 |"));
    }

    #[tokio::test]
    async fn test_export_writes_file() {
        let dataset = TelemetryDataset::new(vec![TelemetryRecord::up("amer", 180)]);
        let report = MetricsAggregator::compute(&dataset, &["amer"], 200);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.md");
        MarkdownExporter::export(&report, 200, &path).await.unwrap();

        let markdown = std::fs::read_to_string(&path).unwrap();
        assert!(markdown.starts_with("# Regional Latency Report"));
        assert!(markdown.contains("| amer | 180.00 | 180 | 100.00% | 0 |"));
    }

    #[test]
    fn test_format_empty_report() {
        let markdown = MarkdownExporter::format(&RegionReport::new(), 0);
        assert!(markdown.contains("_no matching regions_"));
    }
}
