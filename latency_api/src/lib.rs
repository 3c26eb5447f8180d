pub mod common;
pub mod config;
pub mod error;
pub mod routes;

pub use common::{AppState, HealthStatus};
pub use config::ServerConfig;
pub use error::{ApiError, ErrorResponse};
pub use routes::{create_router, LatencyQuery};
