use super::text::escape_html;
use model::{core::value::Value, grid::column::ColumnRenderer};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, sync::Arc};

pub const FALLBACK_BADGE_CLASS: &str = "secondary";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBadge {
    pub label: String,
    pub class: String,
}

impl StatusBadge {
    pub fn new(label: &str, class: &str) -> Self {
        Self {
            label: label.to_string(),
            class: class.to_string(),
        }
    }
}

/// Lookup key of a status cell. Booleans map to `"1"`/`"0"` so flags such as
/// `is_active` can be keyed the same way whether stored as bool or integer.
pub fn status_key(value: &Value) -> String {
    match value {
        Value::Boolean(b) => (if *b { "1" } else { "0" }).to_string(),
        other => other.as_text().unwrap_or_default(),
    }
}

/// Renders a status cell as a badge: `<span class="badge badge-{class}">{label}</span>`.
/// Values without an entry in `statuses` show their own text with the
/// `secondary` class.
pub fn format_status(statuses: HashMap<String, StatusBadge>) -> ColumnRenderer {
    Arc::new(move |record, key| {
        let raw = record.get(key).map(status_key).unwrap_or_default();
        let (label, class) = match statuses.get(&raw) {
            Some(badge) => (badge.label.as_str(), badge.class.as_str()),
            None => (raw.as_str(), FALLBACK_BADGE_CLASS),
        };
        Value::String(format!(
            r#"<span class="badge badge-{}">{}</span>"#,
            escape_html(class),
            escape_html(label)
        ))
    })
}

/// Badges for a boolean active flag.
pub fn active_flag(active_label: &str, inactive_label: &str) -> ColumnRenderer {
    format_status(HashMap::from([
        ("1".to_string(), StatusBadge::new(active_label, "success")),
        ("0".to_string(), StatusBadge::new(inactive_label, "danger")),
    ]))
}
