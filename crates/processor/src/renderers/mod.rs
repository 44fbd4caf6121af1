pub mod actions;
pub mod date;
pub mod number;
pub mod status;
pub mod text;

pub use actions::{ActionButtons, CustomButton, action_buttons};
pub use date::{DEFAULT_DATE_FORMAT, format_date};
pub use number::{format_currency, format_number};
pub use status::{StatusBadge, active_flag, format_status};
pub use text::{lowercase, uppercase};

use model::grid::column::ColumnRenderer;
use std::collections::HashMap;

/// Named renderers that table configurations can refer to by string.
pub struct RendererRegistry {
    renderers: HashMap<String, ColumnRenderer>,
}

impl RendererRegistry {
    /// Create a registry with the built-in renderers
    pub fn new() -> Self {
        let mut registry = Self {
            renderers: HashMap::new(),
        };

        registry.register("upper", uppercase());
        registry.register("lower", lowercase());
        registry.register("number", format_number(0, ",", "."));
        registry.register("currency", format_currency());
        registry.register("date", format_date(DEFAULT_DATE_FORMAT));
        registry.register("active", active_flag("Aktif", "Tidak Aktif"));
        registry.register("actions", action_buttons(ActionButtons::default()));

        registry
    }

    pub fn register(&mut self, name: &str, renderer: ColumnRenderer) {
        self.renderers.insert(name.to_lowercase(), renderer);
    }

    pub fn get(&self, name: &str) -> Option<ColumnRenderer> {
        self.renderers.get(&name.to_lowercase()).cloned()
    }

    pub fn has_renderer(&self, name: &str) -> bool {
        self.renderers.contains_key(&name.to_lowercase())
    }

    pub fn renderer_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.renderers.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::new()
    }
}
