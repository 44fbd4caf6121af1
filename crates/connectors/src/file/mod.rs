pub mod csv;
pub mod json;

/// Turns a header cell into a field name: lower case, with spaces and
/// punctuation replaced by underscores.
pub fn normalize_col_name(name: &str) -> String {
    name.trim()
        .replace([' ', '-', '.', '(', ')', ','], "_")
        .to_lowercase()
}
