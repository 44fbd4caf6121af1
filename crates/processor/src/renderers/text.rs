use model::{core::value::Value, grid::column::ColumnRenderer};
use std::sync::Arc;

pub fn uppercase() -> ColumnRenderer {
    Arc::new(|record, key| Value::String(record.text(key).unwrap_or_default().to_uppercase()))
}

pub fn lowercase() -> ColumnRenderer {
    Arc::new(|record, key| Value::String(record.text(key).unwrap_or_default().to_lowercase()))
}

/// Escapes text for inclusion in HTML element content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::records::record::Record;

    #[test]
    fn test_case_mapping() {
        let record = Record::new().with("name", "Siti Rahma");
        assert_eq!(uppercase()(&record, "name"), Value::String("SITI RAHMA".to_string()));
        assert_eq!(lowercase()(&record, "name"), Value::String("siti rahma".to_string()));
        assert_eq!(uppercase()(&record, "missing"), Value::String(String::new()));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">R&D's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;R&amp;D&#39;s&lt;/a&gt;"
        );
    }
}
