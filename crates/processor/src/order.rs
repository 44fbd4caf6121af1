use model::{grid::request::OrderDirection, records::record::Record};
use std::cmp::Ordering;

/// Sorts rows by the text form of `key`.
///
/// Values are compared as strings, byte by byte, whatever their underlying
/// type, so `"10"` sorts before `"2"`. Absent fields compare as `""`. The
/// sort is stable: rows with equal keys keep their relative order in both
/// directions.
pub fn apply_order(rows: &mut [&Record], key: &str, direction: OrderDirection) {
    rows.sort_by(|a, b| compare(a, b, key, direction));
}

fn compare(a: &Record, b: &Record, key: &str, direction: OrderDirection) -> Ordering {
    let val_a = a.text(key).unwrap_or_default();
    let val_b = b.text(key).unwrap_or_default();

    match direction {
        OrderDirection::Asc => val_a.cmp(&val_b),
        OrderDirection::Desc => val_b.cmp(&val_a),
    }
}
