use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar cell value as it travels between record sources, the grid
/// processor and the JSON wire format.
///
/// Serialized untagged, so `Value::Int(3)` is written as `3` and
/// `Value::Null` as `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Boolean(bool),
    String(String),
    Null,
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Text form used for searching, sorting and row identifiers.
    ///
    /// Returns `None` for `Null`, which callers treat the same as a missing
    /// field. Booleans follow the loose-typing convention of the grid's data
    /// sources: `true` is `"1"` and `false` is the empty string.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Value::Int(v) => Some(v.to_string()),
            Value::Float(v) => Some(v.to_string()),
            Value::Boolean(true) => Some("1".to_string()),
            Value::Boolean(false) => Some(String::new()),
            Value::String(v) => Some(v.clone()),
            Value::Null => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            Value::Boolean(v) => Some(if *v { 1.0 } else { 0.0 }),
            Value::String(v) => v.trim().parse::<f64>().ok(),
            Value::Null => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            Value::Float(v) if v.fract() == 0.0 => Some(*v as i64),
            Value::Boolean(v) => Some(*v as i64),
            Value::String(v) => v.trim().parse::<i64>().ok(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Int(v) => Some(*v != 0),
            Value::Float(v) => Some(*v != 0.0),
            Value::Boolean(v) => Some(*v),
            Value::String(v) => match v.to_lowercase().as_str() {
                "true" | "1" => Some(true),
                "false" | "0" | "" => Some(false),
                _ => None,
            },
            Value::Null => None,
        }
    }

    /// Infers a typed value from a raw text cell (CSV, form input).
    ///
    /// Empty cells become `Null`; integers, floats and `true`/`false` are
    /// recognised, everything else stays a string.
    pub fn infer(raw: &str) -> Value {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Value::Null;
        }

        // Leading zeros carry meaning in identifiers such as "0123", keep them as text
        let has_leading_zero = trimmed.len() > 1 && trimmed.starts_with('0') && !trimmed.starts_with("0.");

        if !has_leading_zero {
            if let Ok(i) = trimmed.parse::<i64>() {
                return Value::Int(i);
            }
            if let Ok(f) = trimmed.parse::<f64>()
                && f.is_finite()
            {
                return Value::Float(f);
            }
        }

        match trimmed.to_lowercase().as_str() {
            "true" => Value::Boolean(true),
            "false" => Value::Boolean(false),
            _ => Value::String(raw.to_string()),
        }
    }
}

impl From<serde_json::Value> for Value {
    /// Flattens a JSON value into a scalar. Arrays and objects are kept as
    /// their compact JSON text.
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
            },
            serde_json::Value::String(s) => Value::String(s),
            other => Value::String(other.to_string()),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_text().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_text() {
        assert_eq!(Value::Int(42).as_text(), Some("42".to_string()));
        assert_eq!(Value::Float(2.0).as_text(), Some("2".to_string()));
        assert_eq!(Value::Float(1.5).as_text(), Some("1.5".to_string()));
        assert_eq!(Value::Boolean(true).as_text(), Some("1".to_string()));
        assert_eq!(Value::Boolean(false).as_text(), Some(String::new()));
        assert_eq!(Value::Null.as_text(), None);
    }

    #[test]
    fn test_infer() {
        assert_eq!(Value::infer("12"), Value::Int(12));
        assert_eq!(Value::infer("-3"), Value::Int(-3));
        assert_eq!(Value::infer("0.5"), Value::Float(0.5));
        assert_eq!(Value::infer("TRUE"), Value::Boolean(true));
        assert_eq!(Value::infer("  "), Value::Null);
        assert_eq!(
            Value::infer("012345678901234"),
            Value::String("012345678901234".to_string())
        );
        assert_eq!(Value::infer("Dr. Andi"), Value::String("Dr. Andi".to_string()));
    }

    #[test]
    fn test_serializes_as_plain_scalars() {
        let values = vec![
            Value::Int(1),
            Value::String("a".to_string()),
            Value::Boolean(false),
            Value::Null,
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"[1,"a",false,null]"#);
    }

    #[test]
    fn test_from_json_flattens_nested_values() {
        let json = serde_json::json!({"a": [1, 2]});
        assert_eq!(
            Value::from(json["a"].clone()),
            Value::String("[1,2]".to_string())
        );
        assert_eq!(Value::from(serde_json::json!(7)), Value::Int(7));
        assert_eq!(Value::from(serde_json::json!(null)), Value::Null);
    }
}
