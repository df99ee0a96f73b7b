//! Dashboard state normalization
//!
//! Turns arbitrary stored or submitted JSON into a canonical [`Document`]:
//! - Per-field validation ([`field`])
//! - Layout clamping ([`layout`])
//! - Merging with schema defaults ([`merger`])
//!
//! [`Document`]: crate::models::Document

pub mod field;
mod layout;
mod merger;

pub use field::Field;
pub use layout::normalize_layout;
pub use merger::{merge_with_defaults, merge_with_defaults_at};
