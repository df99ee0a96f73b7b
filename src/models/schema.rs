//! Canonical dashboard schema: fixed name sets and default values
//!
//! Everything that decides the shape of the document lives here, so adding or
//! removing a bench only needs a change to [`BENCHES`].

use super::document::{Benches, Document, Kanban, Layout};

/// Blob store namespace holding the dashboard document
pub const STORE_NAMESPACE: &str = "lab-dashboard";

/// Key of the singleton document inside [`STORE_NAMESPACE`]
pub const STATE_KEY: &str = "state";

/// Fixed, closed set of lab benches, in display order
pub const BENCHES: &[&str] = &[
    "Hema", "Cobas", "Cyto", "Immulite", "RIA", "Recei", "Libero",
];

/// Placeholder status for an unassigned bench
pub const BENCH_SENTINEL: &str = "-- Select --";

/// Kanban column keys
pub const KANBAN_TODO: &str = "list-todo";
pub const KANBAN_PROGRESS: &str = "list-progress";
pub const KANBAN_DONE: &str = "list-done";

pub const KANBAN_COLUMNS: &[&str] = &[KANBAN_TODO, KANBAN_PROGRESS, KANBAN_DONE];

pub const DEFAULT_NOTICE: &str =
    "<div style='text-align:center;'>Welcome to <b>Lab Dashboard</b></div>";

pub const DEFAULT_STAFF: &[&str] = &["Alice", "Bob", "Charlie", "Dave", "Eve"];

/// Inclusive range and default of one numeric layout field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutField {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl LayoutField {
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

pub const NOTICE_PERCENT: LayoutField = LayoutField {
    name: "noticePercent",
    min: 5.0,
    max: 60.0,
    default: 15.0,
};

pub const ROTATION_PERCENT: LayoutField = LayoutField {
    name: "rotationPercent",
    min: 5.0,
    max: 60.0,
    default: 20.0,
};

/// Upper bound for `noticePercent + rotationPercent`
pub const LAYOUT_AREA_CEILING: f64 = 90.0;

pub fn default_layout() -> Layout {
    Layout {
        notice_percent: NOTICE_PERCENT.default,
        rotation_percent: ROTATION_PERCENT.default,
    }
}

pub fn default_staff() -> Vec<String> {
    DEFAULT_STAFF.iter().map(|s| s.to_string()).collect()
}

pub fn default_benches() -> Benches {
    BENCHES
        .iter()
        .map(|name| (name.to_string(), BENCH_SENTINEL.to_string()))
        .collect()
}

/// Build the default document, stamping `lastCorrectionDate` with `now_ms`
pub fn default_document(now_ms: i64) -> Document {
    Document {
        notice: DEFAULT_NOTICE.to_string(),
        staff: default_staff(),
        benches: default_benches(),
        kanban: Kanban::default(),
        last_correction_date: now_ms,
        layout: default_layout(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_benches_follow_fixed_list() {
        let benches = default_benches();
        let names: Vec<&str> = benches.keys().map(String::as_str).collect();
        assert_eq!(names, BENCHES);
        assert!(benches.values().all(|v| v == BENCH_SENTINEL));
    }

    #[test]
    fn test_default_layout_within_ceiling() {
        let layout = default_layout();
        assert!(layout.notice_percent + layout.rotation_percent <= LAYOUT_AREA_CEILING);
    }

    #[test]
    fn test_layout_field_clamp() {
        assert_eq!(NOTICE_PERCENT.clamp(1.0), 5.0);
        assert_eq!(NOTICE_PERCENT.clamp(75.0), 60.0);
        assert_eq!(ROTATION_PERCENT.clamp(33.5), 33.5);
    }
}
