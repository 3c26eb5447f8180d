mod commands;
mod ui;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "latency")]
#[command(about = "Latency and uptime statistics over telemetry files", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable quiet mode (errors only)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute per-region statistics from a telemetry file
    Query {
        /// Path to telemetry file (JSON or YAML)
        telemetry_file: PathBuf,

        /// Region to include; repeat or separate with commas
        #[arg(short, long = "region", value_delimiter = ',')]
        regions: Vec<String>,

        /// Latency above this value counts as a breach
        #[arg(short, long, allow_negative_numbers = true)]
        threshold_ms: i64,

        /// Output format (cli, json, markdown, prometheus)
        #[arg(short, long, default_value = "cli")]
        format: String,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a telemetry file
    Validate {
        /// Path to telemetry file
        telemetry_file: PathBuf,
    },

    /// List regions present in a telemetry file
    Regions {
        /// Path to telemetry file
        telemetry_file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Query {
            telemetry_file,
            regions,
            threshold_ms,
            format,
            output,
        } => {
            commands::query::execute(telemetry_file, regions, threshold_ms, format, output).await?;
        }

        Commands::Validate { telemetry_file } => {
            commands::validate::execute(telemetry_file).await?;
        }

        Commands::Regions { telemetry_file } => {
            commands::regions::execute(telemetry_file).await?;
        }
    }

    Ok(())
}
