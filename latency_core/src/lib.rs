pub mod dataset;
pub mod error;
pub mod loader;
pub mod record;

pub use dataset::{RegionSamples, TelemetryDataset};
pub use error::{Result, TelemetryError};
pub use loader::{load_dataset_from_file, load_dataset_from_str, TelemetryFormat};
pub use record::{TelemetryRecord, Uptime};
