use crate::report::RegionReport;
use anyhow::{Context, Result};
use std::path::Path;

pub struct JsonExporter;

impl JsonExporter {
    /// Writes the report as pretty JSON, creating missing parent directories.
    pub async fn export(report: &RegionReport, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("create {}", parent.display()))?;
        }

        let mut json = serde_json::to_vec_pretty(report)?;
        json.push(b'\n');
        tokio::fs::write(path, json)
            .await
            .with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }

    pub fn to_string(report: &RegionReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}
