use super::open_file_store;
use crate::models::Document;
use crate::services::replace_canonical;
use crate::store::BlobStore;
use crate::{Context, Result};
use colored::Colorize;
use serde_json::Value;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

/// Replace the stored document with the JSON in `source` (`-` for stdin)
pub async fn run(source: &str, data_dir: Option<PathBuf>) -> Result<()> {
    let raw = read_source(source).await?;
    let store = open_file_store(data_dir)?;
    let document = replace_from_str(&store, &raw).await?;

    println!("{}", "✓ Dashboard document replaced".green());
    println!("   Notice:  {} chars", document.notice.chars().count());
    println!("   Staff:   {}", document.staff.len());
    println!(
        "   Kanban:  {} todo, {} in progress, {} done",
        document.kanban.todo.len(),
        document.kanban.progress.len(),
        document.kanban.done.len()
    );
    Ok(())
}

/// Parse `raw` and replace the stored document
///
/// Invalid JSON is rejected before anything is merged or written.
pub async fn replace_from_str(store: &dyn BlobStore, raw: &str) -> Result<Document> {
    let incoming: Value = serde_json::from_str(raw).context("Invalid JSON")?;
    Ok(replace_canonical(store, &incoming).await?)
}

async fn read_source(source: &str) -> Result<String> {
    if source == "-" {
        let mut raw = String::new();
        tokio::io::stdin()
            .read_to_string(&mut raw)
            .await
            .context("Failed to read stdin")?;
        return Ok(raw);
    }

    tokio::fs::read_to_string(source)
        .await
        .with_context(|| format!("Failed to read {}", source))
}
