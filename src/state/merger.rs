//! Merge untrusted input with schema defaults
//!
//! The merge is a projection onto the canonical schema: it never consults a
//! previously stored document, and feeding its output back in returns the same
//! document.

use super::field::{self, object};
use super::layout::normalize_layout;
use crate::models::schema::{
    default_document, default_staff, BENCHES, BENCH_SENTINEL, KANBAN_DONE, KANBAN_PROGRESS,
    KANBAN_TODO,
};
use crate::models::{Benches, Document, Kanban};
use chrono::Utc;
use serde_json::{Map, Value};

/// Produce the canonical document for `incoming`, stamping missing
/// timestamps with the current time
pub fn merge_with_defaults(incoming: Option<&Value>) -> Document {
    merge_with_defaults_at(incoming, Utc::now().timestamp_millis())
}

/// Same as [`merge_with_defaults`] with an explicit clock (milliseconds since
/// the Unix epoch)
///
/// - `None` or `null` yields the default document.
/// - Any other non-object value is treated as an empty object, so every field
///   falls back and `notice` becomes empty.
pub fn merge_with_defaults_at(incoming: Option<&Value>, now_ms: i64) -> Document {
    let incoming = match incoming {
        None | Some(Value::Null) => return default_document(now_ms),
        Some(value) => value,
    };

    let empty = Map::new();
    let raw = incoming.as_object().unwrap_or(&empty);

    Document {
        notice: field::non_empty_string(raw.get("notice")).or_default(),
        staff: field::string_array(raw.get("staff")).or_else(default_staff),
        benches: merge_benches(object(raw.get("benches")).or(&empty)),
        kanban: merge_kanban(object(raw.get("kanban")).or(&empty)),
        last_correction_date: field::timestamp(raw.get("lastCorrectionDate")).or(now_ms),
        layout: normalize_layout(raw.get("layout")),
    }
}

/// Exactly the fixed bench set; unknown incoming names are ignored
fn merge_benches(raw: &Map<String, Value>) -> Benches {
    BENCHES
        .iter()
        .map(|name| {
            let status = field::non_empty_string(raw.get(*name))
                .or_else(|| BENCH_SENTINEL.to_string());
            (name.to_string(), status)
        })
        .collect()
}

fn merge_kanban(raw: &Map<String, Value>) -> Kanban {
    Kanban {
        todo: field::array(raw.get(KANBAN_TODO)).or_default(),
        progress: field::array(raw.get(KANBAN_PROGRESS)).or_default(),
        done: field::array(raw.get(KANBAN_DONE)).or_default(),
    }
}
