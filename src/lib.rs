// Labboard - Lab Dashboard State Store
// A single shared JSON document for lab status displays, normalized on every read and write

pub mod cli;
pub mod config;
pub mod models;
pub mod server;
pub mod services;
pub mod state;
pub mod store;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use models::{Document, Kanban, Layout};
pub use state::{merge_with_defaults, normalize_layout};
pub use store::{BlobStore, FileStore, MemoryStore};
