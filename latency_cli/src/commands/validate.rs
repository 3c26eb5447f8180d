use crate::ui;
use anyhow::Result;
use latency_core::load_dataset_from_file;
use std::path::PathBuf;

pub async fn execute(telemetry_file: PathBuf) -> Result<()> {
    ui::print_header("Validating Telemetry");
    ui::print_field("File", telemetry_file.display());

    match load_dataset_from_file(&telemetry_file).await {
        Ok(dataset) => {
            println!();
            ui::print_success("Telemetry is valid!");
            ui::print_field("Records", dataset.len());
            ui::print_field("Regions", dataset.region_count());

            if dataset.is_empty() {
                println!();
                ui::print_warning("Telemetry has no records");
            }

            for region in dataset.regions() {
                if let Some(samples) = dataset.region(region) {
                    ui::print_field(
                        region,
                        format!("{} samples, {} up", samples.len(), samples.up_count()),
                    );
                }
            }

            Ok(())
        }
        Err(e) => {
            println!();
            ui::print_error("Telemetry is invalid!");
            ui::print_field("Error", &e);
            Err(e.into())
        }
    }
}
