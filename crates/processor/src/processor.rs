use crate::{format::format_row, order::apply_order, paginate::apply_pagination, search::apply_search};
use model::{
    grid::{column::ColumnSpec, envelope::ResultEnvelope, request::QueryRequest},
    records::record::Record,
};
use std::collections::BTreeMap;
use tracing::debug;

pub const DEFAULT_PRIMARY_KEY: &str = "id";

/// Server-side processing for one grid: search, order, paginate and format
/// an in-memory record set according to a [`QueryRequest`].
///
/// The processor keeps only its configuration between calls. `process`
/// never fails and never mutates the records; malformed requests degrade to
/// their defaults.
#[derive(Debug, Clone)]
pub struct TabularDataProcessor {
    records: Vec<Record>,
    columns: Vec<ColumnSpec>,
    searchable_keys: Vec<String>,
    /// Column position -> field key, for orderable columns only.
    orderable_keys: BTreeMap<usize, String>,
    primary_key: String,
}

impl TabularDataProcessor {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            columns: Vec::new(),
            searchable_keys: Vec::new(),
            orderable_keys: BTreeMap::new(),
            primary_key: DEFAULT_PRIMARY_KEY.to_string(),
        }
    }

    pub fn set_records(&mut self, records: Vec<Record>) -> &mut Self {
        self.records = records;
        self
    }

    pub fn set_columns(&mut self, columns: Vec<ColumnSpec>) -> &mut Self {
        self.searchable_keys = columns
            .iter()
            .filter(|c| c.searchable)
            .map(|c| c.key.clone())
            .collect();

        self.orderable_keys = columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.orderable)
            .map(|(index, c)| (index, c.key.clone()))
            .collect();

        self.columns = columns;
        self
    }

    pub fn set_primary_key_field(&mut self, name: &str) -> &mut Self {
        self.primary_key = name.to_string();
        self
    }

    pub fn records_total(&self) -> usize {
        self.records.len()
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn searchable_keys(&self) -> &[String] {
        &self.searchable_keys
    }

    /// Field key addressed by the column at `index`, if that column exists
    /// and is orderable.
    pub fn orderable_key(&self, index: usize) -> Option<&str> {
        self.orderable_keys.get(&index).map(String::as_str)
    }

    pub fn primary_key_field(&self) -> &str {
        &self.primary_key
    }

    pub fn process(&self, request: &QueryRequest) -> ResultEnvelope {
        let mut rows = apply_search(&self.records, &self.searchable_keys, &request.search_value);
        let records_filtered = rows.len();

        if let Some(order) = request.order {
            match self.orderable_key(order.column) {
                Some(key) => apply_order(&mut rows, key, order.direction),
                None => debug!(
                    column = order.column,
                    "Order column is not orderable, keeping filtered order"
                ),
            }
        }

        let page = apply_pagination(&rows, request.start, request.length);
        let data = page
            .iter()
            .map(|record| format_row(record, &self.columns, &self.primary_key))
            .collect::<Vec<_>>();

        debug!(
            draw = request.draw,
            records_total = self.records.len(),
            records_filtered,
            page_rows = data.len(),
            "Processed grid request"
        );

        ResultEnvelope {
            draw: request.draw,
            records_total: self.records.len(),
            records_filtered,
            data,
        }
    }
}

impl Default for TabularDataProcessor {
    fn default() -> Self {
        Self::new()
    }
}
