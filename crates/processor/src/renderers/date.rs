use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc,
    format::{Item, StrftimeItems},
};
use model::{core::value::Value, grid::column::ColumnRenderer};
use std::sync::Arc;
use tracing::warn;

pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Shown for cells without a date.
pub const MISSING_DATE: &str = "-";

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"];

/// Reformats date and timestamp cells with a chrono `strftime` pattern.
///
/// Accepts RFC 3339 timestamps, `YYYY-MM-DD HH:MM:SS` and plain
/// `YYYY-MM-DD` dates; naive values are taken as UTC. Missing cells render as
/// `-` and unparseable ones are passed through. An invalid pattern falls
/// back to [`DEFAULT_DATE_FORMAT`].
pub fn format_date(pattern: &str) -> ColumnRenderer {
    let pattern = if is_valid_pattern(pattern) {
        pattern.to_string()
    } else {
        warn!("Invalid date format '{pattern}', using '{DEFAULT_DATE_FORMAT}'");
        DEFAULT_DATE_FORMAT.to_string()
    };

    Arc::new(move |record, key| match record.get(key) {
        Some(value) => match value.as_text().as_deref().and_then(parse_datetime) {
            Some(dt) => Value::String(dt.format(&pattern).to_string()),
            None => value.clone(),
        },
        None => Value::String(MISSING_DATE.to_string()),
    })
}

fn is_valid_pattern(pattern: &str) -> bool {
    !pattern.is_empty() && StrftimeItems::new(pattern).all(|item| !matches!(item, Item::Error))
}

pub fn parse_datetime(text: &str) -> Option<DateTime<FixedOffset>> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt);
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;

    Some(Utc.from_utc_datetime(&naive).fixed_offset())
}
