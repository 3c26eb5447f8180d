use crate::dataset::TelemetryDataset;
use crate::error::{Result, TelemetryError};
use crate::record::TelemetryRecord;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TelemetryFormat {
    Json,
    Yaml,
}

impl TelemetryFormat {
    /// Extensionless paths are read as JSON.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            None | Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some(_) => Err(TelemetryError::UnsupportedFormat(format!(
                "{} (use .json, .yaml or .yml)",
                path.display()
            ))),
        }
    }
}

pub async fn load_dataset_from_file(path: impl AsRef<Path>) -> Result<TelemetryDataset> {
    let path = path.as_ref();
    let format = TelemetryFormat::from_path(path)?;

    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| TelemetryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let dataset = load_dataset_from_str(&contents, format)?;
    debug!(
        path = %path.display(),
        records = dataset.len(),
        regions = dataset.region_count(),
        "loaded telemetry"
    );
    Ok(dataset)
}

pub fn load_dataset_from_str(
    content: &str,
    format: TelemetryFormat,
) -> Result<TelemetryDataset> {
    let records = match format {
        TelemetryFormat::Json => parse_json(content)?,
        TelemetryFormat::Yaml => parse_yaml(content)?,
    };
    Ok(TelemetryDataset::new(records))
}

fn parse_json(content: &str) -> Result<Vec<TelemetryRecord>> {
    Ok(serde_json::from_str(content)?)
}

fn parse_yaml(content: &str) -> Result<Vec<TelemetryRecord>> {
    Ok(serde_yaml::from_str(content)?)
}
