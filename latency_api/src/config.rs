use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "latency_api")]
#[command(about = "Per-region latency and uptime statistics over HTTP", long_about = None)]
#[command(version)]
pub struct ServerConfig {
    /// Address the HTTP server listens on
    #[arg(long, env = "LATENCY_API_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Telemetry file loaded once at startup (.json, .yaml or .yml)
    #[arg(long, env = "LATENCY_TELEMETRY", default_value = "telemetry.json")]
    pub telemetry: PathBuf,

    /// Log level used when RUST_LOG is not set
    #[arg(long, env = "LATENCY_LOG", default_value = "info")]
    pub log_level: String,
}
