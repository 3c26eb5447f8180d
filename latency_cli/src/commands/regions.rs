use anyhow::{Context, Result};
use colored::Colorize;
use latency_core::load_dataset_from_file;
use std::path::PathBuf;

pub async fn execute(telemetry_file: PathBuf) -> Result<()> {
    println!("{}", "=== Available Regions ===".bold().cyan());

    let dataset = load_dataset_from_file(&telemetry_file)
        .await
        .with_context(|| format!("load telemetry from {}", telemetry_file.display()))?;

    println!("\nTotal regions: {}\n", dataset.region_count());

    for region in dataset.regions() {
        let count = dataset.region(region).map_or(0, |samples| samples.len());
        println!("  {} {} ({} records)", "•".green(), region, count);
    }

    println!(
        "\n{}",
        "Use 'latency query <FILE> --region <NAME> --threshold-ms <MS>' for statistics".yellow()
    );

    Ok(())
}
