//! State service - fetch and replace the canonical dashboard document
//!
//! Shared by the HTTP endpoint and the CLI. Every call re-reads storage; no
//! document is cached between calls.

use crate::models::{Document, STATE_KEY};
use crate::state::merge_with_defaults;
use crate::store::{BlobStore, StoreError};
use serde_json::Value;

/// Errors from the state service
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Failed to encode document: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Read the stored document and return its canonical form
///
/// An empty store yields the default document. Nothing is written.
pub async fn fetch_canonical(store: &dyn BlobStore) -> Result<Document, StateError> {
    let raw = match store.get(STATE_KEY).await? {
        Some(bytes) => match serde_json::from_slice::<Value>(&bytes) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(error = %e, "stored document is not valid JSON, using defaults");
                None
            }
        },
        None => None,
    };

    Ok(merge_with_defaults(raw.as_ref()))
}

/// Normalize `incoming` against defaults, persist it, and return it
///
/// The previous stored document is never consulted: fields the caller omits
/// reset to their defaults, and a concurrent writer's changes are overwritten.
pub async fn replace_canonical(store: &dyn BlobStore, incoming: &Value) -> Result<Document, StateError> {
    let document = merge_with_defaults(Some(incoming));
    let bytes = serde_json::to_vec(&document)?;
    store.set(STATE_KEY, bytes).await?;

    tracing::info!(
        last_correction_date = document.last_correction_date,
        "dashboard document replaced"
    );
    Ok(document)
}
