use crate::{core::value::Value, records::record::Record};
use std::{fmt, sync::Arc};

/// Produces the display value of a cell. Receives the whole record and the
/// key of the column being rendered, so one renderer can serve many columns.
pub type ColumnRenderer = Arc<dyn Fn(&Record, &str) -> Value + Send + Sync>;

/// Declares one displayed column of a grid.
#[derive(Clone)]
pub struct ColumnSpec {
    pub key: String,
    pub label: String,
    pub searchable: bool,
    pub orderable: bool,
    pub render: Option<ColumnRenderer>,
}

impl ColumnSpec {
    /// A plain column: searchable and orderable, no renderer.
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            searchable: true,
            orderable: true,
            render: None,
        }
    }

    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    pub fn orderable(mut self, orderable: bool) -> Self {
        self.orderable = orderable;
        self
    }

    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(&Record, &str) -> Value + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    pub fn with_renderer(mut self, render: ColumnRenderer) -> Self {
        self.render = Some(render);
        self
    }

    /// Display value for this column on `record`: the renderer's output when
    /// one is set, otherwise the raw field, with `""` for absent fields.
    pub fn cell(&self, record: &Record) -> Value {
        match &self.render {
            Some(render) => render(record, &self.key),
            None => record
                .get(&self.key)
                .cloned()
                .unwrap_or_else(|| Value::String(String::new())),
        }
    }
}

impl fmt::Debug for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("searchable", &self.searchable)
            .field("orderable", &self.orderable)
            .field("render", &self.render.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
