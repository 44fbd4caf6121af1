use crate::{error::ConfigError, settings::Settings};
use model::grid::{
    column::{ColumnRenderer, ColumnSpec},
    request::{OrderDirection, PageLength, QueryRequest},
};
use processor::{
    RendererRegistry, TabularDataProcessor,
    renderers::{
        ActionButtons, DEFAULT_DATE_FORMAT, StatusBadge, action_buttons, format_currency,
        format_date, format_number, format_status, lowercase, uppercase,
    },
};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, path::Path};
use tracing::info;

/// Serializable description of a column renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderSpec {
    Upper,
    Lower,
    Number {
        #[serde(default)]
        decimals: usize,
        #[serde(default = "default_decimal_separator")]
        decimal_separator: String,
        #[serde(default = "default_thousands_separator")]
        thousands_separator: String,
    },
    Currency,
    Date {
        #[serde(default = "default_date_format")]
        format: String,
    },
    Status {
        statuses: BTreeMap<String, StatusBadge>,
    },
    Actions(ActionButtons),
    /// Any renderer registered under this name.
    Named {
        name: String,
    },
}

fn default_decimal_separator() -> String {
    ",".to_string()
}

fn default_thousands_separator() -> String {
    ".".to_string()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl RenderSpec {
    pub fn build(&self, column: &str, registry: &RendererRegistry) -> Result<ColumnRenderer, ConfigError> {
        let renderer = match self {
            RenderSpec::Upper => uppercase(),
            RenderSpec::Lower => lowercase(),
            RenderSpec::Number {
                decimals,
                decimal_separator,
                thousands_separator,
            } => format_number(*decimals, decimal_separator, thousands_separator),
            RenderSpec::Currency => format_currency(),
            RenderSpec::Date { format } => format_date(format),
            RenderSpec::Status { statuses } => format_status(statuses.clone().into_iter().collect()),
            RenderSpec::Actions(buttons) => action_buttons(buttons.clone()),
            RenderSpec::Named { name } => {
                registry
                    .get(name)
                    .ok_or_else(|| ConfigError::UnknownRenderer {
                        column: column.to_string(),
                        renderer: name.clone(),
                    })?
            }
        };
        Ok(renderer)
    }
}

fn yes() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnConfig {
    pub key: String,
    pub label: String,
    #[serde(default = "yes")]
    pub searchable: bool,
    #[serde(default = "yes")]
    pub orderable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render: Option<RenderSpec>,
}

impl ColumnConfig {
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            searchable: true,
            orderable: true,
            render: None,
        }
    }

    pub fn fixed(mut self) -> Self {
        self.searchable = false;
        self.orderable = false;
        self
    }

    pub fn render(mut self, render: RenderSpec) -> Self {
        self.render = Some(render);
        self
    }
}

fn default_length_menu() -> Vec<i64> {
    vec![10, 25, 50, 100, -1]
}

/// One grid page: title, element id, data endpoint and column layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    pub title: String,
    pub table_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_data: Option<String>,
    /// Falls back to [`Settings::primary_key`] when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<String>,
    /// Falls back to [`Settings::default_page_length`] when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_length: Option<usize>,
    #[serde(default = "default_length_menu")]
    pub length_menu: Vec<i64>,
    pub columns: Vec<ColumnConfig>,
}

impl TableConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path).await?;
        let config = Self::from_json(&text)?;
        info!(
            "Loaded table config '{}' from {} ({} columns)",
            config.table_id,
            path.display(),
            config.columns.len()
        );
        Ok(config)
    }

    /// Column labels in display order.
    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.label.as_str()).collect()
    }

    pub fn column_specs(&self, registry: &RendererRegistry) -> Result<Vec<ColumnSpec>, ConfigError> {
        self.columns
            .iter()
            .map(|column| {
                let spec = ColumnSpec::new(&column.key, &column.label)
                    .searchable(column.searchable)
                    .orderable(column.orderable);
                match &column.render {
                    Some(render) => Ok(spec.with_renderer(render.build(&column.key, registry)?)),
                    None => Ok(spec),
                }
            })
            .collect()
    }

    /// A processor configured with this table's columns and primary key,
    /// waiting for records.
    pub fn processor(
        &self,
        registry: &RendererRegistry,
        settings: &Settings,
    ) -> Result<TabularDataProcessor, ConfigError> {
        let mut processor = TabularDataProcessor::new();
        processor
            .set_columns(self.column_specs(registry)?)
            .set_primary_key_field(self.primary_key.as_deref().unwrap_or(&settings.primary_key));
        Ok(processor)
    }

    /// The request the grid widget issues on first draw: first column
    /// ascending, first page.
    pub fn initial_request(&self, settings: &Settings) -> QueryRequest {
        let length = self.page_length.unwrap_or(settings.default_page_length);
        QueryRequest::new()
            .draw(1)
            .order_by(0, OrderDirection::Asc)
            .page(0, PageLength::Limit(length))
    }
}
