use crate::ui;
use anyhow::{bail, Context, Result};
use latency_core::load_dataset_from_file;
use latency_metrics::exporters::{JsonExporter, MarkdownExporter, PrometheusExporter};
use latency_metrics::{MetricsAggregator, RegionReport};
use std::path::{Path, PathBuf};
use tabled::{settings::Style, Table, Tabled};
use tracing::info;

const FORMATS: [&str; 4] = ["cli", "json", "markdown", "prometheus"];

#[derive(Tabled)]
struct RegionRow {
    #[tabled(rename = "Region")]
    region: String,
    #[tabled(rename = "Avg Latency (ms)")]
    avg_latency: String,
    #[tabled(rename = "P95 Latency (ms)")]
    p95_latency: u64,
    #[tabled(rename = "Avg Uptime")]
    avg_uptime: String,
    #[tabled(rename = "Breaches")]
    breaches: u64,
}

pub async fn execute(
    telemetry_file: PathBuf,
    regions: Vec<String>,
    threshold_ms: i64,
    format: String,
    output: Option<PathBuf>,
) -> Result<()> {
    if !FORMATS.contains(&format.as_str()) {
        bail!("Unknown format: {} (expected one of {})", format, FORMATS.join(", "));
    }

    let dataset = load_dataset_from_file(&telemetry_file)
        .await
        .with_context(|| format!("load telemetry from {}", telemetry_file.display()))?;
    info!(
        records = dataset.len(),
        regions = dataset.region_count(),
        "telemetry loaded"
    );

    let report = MetricsAggregator::compute(&dataset, &regions, threshold_ms);

    match output {
        Some(output_path) => {
            write_report(&report, &regions, threshold_ms, &format, &output_path)
                .await
                .with_context(|| format!("write report to {}", output_path.display()))?;
            ui::print_success(&format!("Report written to {}", output_path.display()));
        }
        None => match format.as_str() {
            "json" => println!("{}", JsonExporter::to_string(&report)?),
            "markdown" => println!("{}", MarkdownExporter::format(&report, threshold_ms)),
            "prometheus" => print!("{}", PrometheusExporter::format(&report, threshold_ms)),
            _ => {
                ui::print_header("Regional Latency Report");
                print!("{}", render_table(&report, &regions, threshold_ms));
            }
        },
    }

    Ok(())
}

async fn write_report(
    report: &RegionReport,
    requested: &[String],
    threshold_ms: i64,
    format: &str,
    path: &Path,
) -> Result<()> {
    match format {
        "json" => JsonExporter::export(report, path).await,
        "markdown" => MarkdownExporter::export(report, threshold_ms, path).await,
        "prometheus" => PrometheusExporter::export(report, threshold_ms, path).await,
        _ => {
            tokio::fs::write(path, render_table(report, requested, threshold_ms)).await?;
            Ok(())
        }
    }
}

/// Plain-text summary and table, shared by stdout and file output.
fn render_table(report: &RegionReport, requested: &[String], threshold_ms: i64) -> String {
    let mut out = format!(
        "Threshold: {} ms\nRegions matched: {}/{}\n",
        threshold_ms,
        report.len(),
        requested.len()
    );

    if report.is_empty() {
        out.push_str("\nNo matching regions in telemetry\n");
        return out;
    }

    let rows: Vec<RegionRow> = report
        .iter()
        .map(|(region, stats)| RegionRow {
            region: region.to_string(),
            avg_latency: format!("{:.2}", stats.avg_latency),
            p95_latency: stats.p95_latency,
            avg_uptime: format!("{:.2}%", stats.avg_uptime * 100.0),
            breaches: stats.breaches,
        })
        .collect();

    out.push_str(&format!("\n{}\n", Table::new(rows).with(Style::rounded())));

    let missing: Vec<&str> = requested
        .iter()
        .map(String::as_str)
        .filter(|region| report.get(region).is_none())
        .collect();
    if !missing.is_empty() {
        out.push_str(&format!("\nNo telemetry for: {}\n", missing.join(", ")));
    }

    out
}
