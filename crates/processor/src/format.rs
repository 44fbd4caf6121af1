use model::{
    grid::{column::ColumnSpec, envelope::FormattedRow},
    records::record::Record,
};

/// Builds the output row for `record`: one cell per configured column and
/// the row id read from `primary_key` (empty when absent).
pub fn format_row(record: &Record, columns: &[ColumnSpec], primary_key: &str) -> FormattedRow {
    let mut row = FormattedRow::new(record.text(primary_key).unwrap_or_default());
    for column in columns {
        row.insert(&column.key, column.cell(record));
    }
    row
}
