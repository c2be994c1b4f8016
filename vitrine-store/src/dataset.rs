use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::info;
use vitrine_core::CoreResult;

/// Reads a JSON array of records from disk
pub async fn load_records<T: DeserializeOwned>(path: impl AsRef<Path>) -> CoreResult<Vec<T>> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await?;
    let records: Vec<T> = serde_json::from_slice(&bytes)?;
    info!(path = %path.display(), count = records.len(), "Dataset loaded");
    Ok(records)
}
