//! Layout normalization

use super::field::{finite_float, object};
use crate::models::schema::{default_layout, LayoutField, LAYOUT_AREA_CEILING, NOTICE_PERCENT, ROTATION_PERCENT};
use crate::models::Layout;
use serde_json::{Map, Value};

/// Turn any candidate value into a valid [`Layout`]
///
/// Each field is parsed and clamped on its own. When the notice and rotation
/// areas together exceed [`LAYOUT_AREA_CEILING`], both fall back to their
/// defaults instead of being scaled. Unknown fields are dropped.
pub fn normalize_layout(candidate: Option<&Value>) -> Layout {
    let Some(raw) = object(candidate).into_option() else {
        return default_layout();
    };

    let layout = Layout {
        notice_percent: clamped(raw, &NOTICE_PERCENT),
        rotation_percent: clamped(raw, &ROTATION_PERCENT),
    };

    if layout.notice_percent + layout.rotation_percent > LAYOUT_AREA_CEILING {
        tracing::debug!(
            notice = layout.notice_percent,
            rotation = layout.rotation_percent,
            "layout areas exceed ceiling, resetting to defaults"
        );
        return default_layout();
    }

    layout
}

fn clamped(raw: &Map<String, Value>, field: &LayoutField) -> f64 {
    finite_float(raw.get(field.name))
        .map(|v| field.clamp(v))
        .or(field.default)
}
