use model::grid::request::PageLength;

/// Returns the page `[start, start + length)` of `rows`, clamped to what is
/// available. `PageLength::All` ignores `start` and returns everything.
pub fn apply_pagination<T>(rows: &[T], start: usize, length: PageLength) -> &[T] {
    match length {
        PageLength::All => rows,
        PageLength::Limit(length) => {
            let from = start.min(rows.len());
            let to = from.saturating_add(length).min(rows.len());
            &rows[from..to]
        }
    }
}
