use crate::report::RegionReport;
use anyhow::Result;
use std::fmt::Write;
use std::path::Path;

pub struct PrometheusExporter;

impl PrometheusExporter {
    /// Writes a textfile-collector compatible snapshot.
    pub async fn export(
        report: &RegionReport,
        threshold_ms: i64,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        tokio::fs::write(path, Self::format(report, threshold_ms)).await?;
        Ok(())
    }

    pub fn format(report: &RegionReport, threshold_ms: i64) -> String {
        let mut out = String::new();

        Self::gauge(
            &mut out,
            "latency_region_avg_latency_ms",
            "Mean latency in milliseconds",
            report.iter().map(|(region, stats)| (region, stats.avg_latency)),
        );
        Self::gauge(
            &mut out,
            "latency_region_p95_latency_ms",
            "95th percentile latency in milliseconds",
            report
                .iter()
                .map(|(region, stats)| (region, stats.p95_latency as f64)),
        );
        Self::gauge(
            &mut out,
            "latency_region_avg_uptime_ratio",
            "Mean uptime between 0 and 1",
            report.iter().map(|(region, stats)| (region, stats.avg_uptime)),
        );

        let _ = writeln!(
            out,
            "# HELP latency_region_breaches Samples above the {}ms threshold",
            threshold_ms
        );
        let _ = writeln!(out, "# TYPE latency_region_breaches gauge");
        for (region, stats) in report.iter() {
            let _ = writeln!(
                out,
                "latency_region_breaches{{region=\"{}\",threshold_ms=\"{}\"}} {}",
                escape_label(region),
                threshold_ms,
                stats.breaches
            );
        }

        out
    }

    fn gauge<'a>(
        out: &mut String,
        name: &str,
        help: &str,
        samples: impl Iterator<Item = (&'a str, f64)>,
    ) {
        let _ = writeln!(out, "# HELP {} {}", name, help);
        let _ = writeln!(out, "# TYPE {} gauge", name);
        for (region, value) in samples {
            let _ = writeln!(out, "{}{{region=\"{}\"}} {}", name, escape_label(region), value);
        }
        out.push('\n');
    }
}

fn escape_label(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
