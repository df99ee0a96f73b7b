//! Dashboard document data model
//!
//! These types only ever hold canonical values. Untrusted JSON is turned into a
//! [`Document`] by [`crate::state::merge_with_defaults`], never by deserializing
//! it directly.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Bench name to status string, in the order of [`super::schema::BENCHES`]
pub type Benches = IndexMap<String, String>;

/// The singleton dashboard document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Notice banner (HTML allowed)
    pub notice: String,

    /// Staff roster, in display order
    pub staff: Vec<String>,

    /// Status per bench
    pub benches: Benches,

    /// Three-column task board
    pub kanban: Kanban,

    /// Milliseconds since the Unix epoch
    pub last_correction_date: i64,

    /// Screen split configuration
    pub layout: Layout,
}

/// Kanban board with its three fixed columns
///
/// Task items are opaque to the store and kept exactly as submitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Kanban {
    #[serde(rename = "list-todo")]
    pub todo: Vec<Value>,

    #[serde(rename = "list-progress")]
    pub progress: Vec<Value>,

    #[serde(rename = "list-done")]
    pub done: Vec<Value>,
}

/// Screen split, in percent of the screen
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub notice_percent: f64,
    pub rotation_percent: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::schema::{default_document, KANBAN_COLUMNS};

    #[test]
    fn test_document_wire_names() {
        let doc = default_document(1_700_000_000_000);
        let json = serde_json::to_value(&doc).unwrap();

        assert!(json.get("notice").is_some());
        assert!(json.get("staff").is_some());
        assert_eq!(json["lastCorrectionDate"], 1_700_000_000_000i64);
        assert_eq!(json["layout"]["noticePercent"], 15.0);
        assert_eq!(json["layout"]["rotationPercent"], 20.0);
        for key in KANBAN_COLUMNS {
            assert!(json["kanban"][key].is_array(), "missing column {}", key);
        }
    }

    #[test]
    fn test_benches_serialize_in_list_order() {
        let doc = default_document(0);
        let json = serde_json::to_string(&doc.benches).unwrap();
        assert!(json.starts_with("{\"Hema\""));
        assert!(json.ends_with("\"Libero\":\"-- Select --\"}"));
    }
}
