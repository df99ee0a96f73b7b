use super::open_file_store;
use crate::services::fetch_canonical;
use crate::Result;
use std::path::PathBuf;

/// Print the canonical document as pretty JSON. Storage is not modified.
pub async fn run(data_dir: Option<PathBuf>) -> Result<()> {
    let store = open_file_store(data_dir)?;
    let document = fetch_canonical(&store).await?;
    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}
