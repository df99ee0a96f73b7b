//! Service layer for labboard
//!
//! Business logic shared by the HTTP endpoint and the CLI commands.

pub mod state_service;

pub use state_service::{fetch_canonical, replace_canonical, StateError};
