use model::records::record::Record;

/// Free-text filter over the searchable columns of a grid.
///
/// A record is kept when any searchable field contains the term,
/// case-insensitively. Fields that are absent or null never match but do not
/// exclude the record by themselves.
pub struct SearchFilter<'a> {
    keys: &'a [String],
    needle: String,
}

impl<'a> SearchFilter<'a> {
    /// Returns `None` when there is nothing to search for, in which case
    /// every record passes.
    pub fn new(keys: &'a [String], term: &str) -> Option<Self> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        Some(Self { keys, needle })
    }

    pub fn should_keep(&self, record: &Record) -> bool {
        self.keys.iter().any(|key| {
            record
                .text(key)
                .is_some_and(|text| text.to_lowercase().contains(&self.needle))
        })
    }
}

/// Applies the search stage, borrowing the records that pass in source order.
pub fn apply_search<'r>(records: &'r [Record], keys: &[String], term: &str) -> Vec<&'r Record> {
    match SearchFilter::new(keys, term) {
        Some(filter) => records.iter().filter(|r| filter.should_keep(r)).collect(),
        None => records.iter().collect(),
    }
}
