use model::{core::value::Value, grid::column::ColumnRenderer};
use std::sync::Arc;

/// Formats numeric cells with a fixed number of decimals and grouped
/// thousands, e.g. `1234567.891` -> `1.234.567,89` with
/// `format_number(2, ",", ".")`. Non-numeric values are passed through.
pub fn format_number(decimals: usize, decimal_sep: &str, thousands_sep: &str) -> ColumnRenderer {
    let decimal_sep = decimal_sep.to_string();
    let thousands_sep = thousands_sep.to_string();

    Arc::new(move |record, key| match record.get(key) {
        Some(value) => match numeric(value) {
            Some(num) => Value::String(group(num, decimals, &decimal_sep, &thousands_sep)),
            None => value.clone(),
        },
        None => Value::String(String::new()),
    })
}

/// Rupiah amounts: `Rp ` prefix, no decimals, `.` between thousands.
pub fn format_currency() -> ColumnRenderer {
    Arc::new(|record, key| match record.get(key) {
        Some(value) => match numeric(value) {
            Some(num) => Value::String(format!("Rp {}", group(num, 0, ",", "."))),
            None => value.clone(),
        },
        None => Value::String(String::new()),
    })
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Boolean(_) => None,
        other => other.as_f64().filter(|n| n.is_finite()),
    }
}

/// Renders `num` with `decimals` places and separators. Grouping only
/// touches the integer part.
pub fn group(num: f64, decimals: usize, decimal_sep: &str, thousands_sep: &str) -> String {
    let fixed = format!("{num:.decimals$}");
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(fixed.len() + digits.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(thousands_sep);
        }
        grouped.push(*digit);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}{decimal_sep}{frac}"),
        None => format!("{sign}{grouped}"),
    }
}
