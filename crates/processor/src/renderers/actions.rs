use super::text::escape_html;
use model::{core::value::Value, grid::column::ColumnRenderer};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Extra button in an action group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomButton {
    /// Bootstrap colour suffix (`btn-{class}`).
    #[serde(default = "default_button_class")]
    pub class: String,
    /// Class the page scripts bind their click handler to.
    pub class_name: String,
    pub icon: String,
    #[serde(default)]
    pub title: String,
}

fn default_button_class() -> String {
    "secondary".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionButtons {
    #[serde(default)]
    pub view: bool,
    #[serde(default)]
    pub edit: bool,
    #[serde(default)]
    pub delete: bool,
    #[serde(default)]
    pub custom: Vec<CustomButton>,
    /// Field whose value goes into each button's `data-id`.
    #[serde(default = "default_id_field")]
    pub id_field: String,
}

fn default_id_field() -> String {
    "id".to_string()
}

impl Default for ActionButtons {
    fn default() -> Self {
        Self {
            view: true,
            edit: true,
            delete: true,
            custom: Vec::new(),
            id_field: default_id_field(),
        }
    }
}

/// Renders the row's action button group. Ignores the column's own value.
pub fn action_buttons(buttons: ActionButtons) -> ColumnRenderer {
    Arc::new(move |record, _key| {
        let id = escape_html(&record.text(&buttons.id_field).unwrap_or_default());
        let mut html = String::from(r#"<div class="btn-group btn-group-sm" role="group">"#);

        let standard = [
            (buttons.view, "info", "btn-view", "Lihat", "eye"),
            (buttons.edit, "warning", "btn-edit", "Edit", "edit"),
            (buttons.delete, "danger", "btn-delete", "Hapus", "trash"),
        ];
        for (enabled, class, class_name, title, icon) in standard {
            if enabled {
                html.push_str(&button(class, class_name, &id, title, icon));
            }
        }

        for custom in &buttons.custom {
            html.push_str(&button(
                &escape_html(&custom.class),
                &escape_html(&custom.class_name),
                &id,
                &escape_html(&custom.title),
                &escape_html(&custom.icon),
            ));
        }

        html.push_str("</div>");
        Value::String(html)
    })
}

fn button(class: &str, class_name: &str, id: &str, title: &str, icon: &str) -> String {
    format!(
        r#"<button type="button" class="btn btn-{class} {class_name}" data-id="{id}" title="{title}"><i class="fa fa-{icon}"></i></button>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::records::record::Record;

    #[test]
    fn test_edit_and_delete_buttons() {
        let render = action_buttons(ActionButtons {
            view: false,
            ..ActionButtons::default()
        });
        let record = Record::new().with("id", 7);
        let Value::String(html) = render(&record, "action") else {
            panic!("expected html");
        };

        assert!(html.starts_with(r#"<div class="btn-group btn-group-sm" role="group">"#));
        assert!(!html.contains("btn-view"));
        assert!(html.contains(r#"class="btn btn-warning btn-edit" data-id="7""#));
        assert!(html.contains(r#"class="btn btn-danger btn-delete" data-id="7""#));
        assert!(html.ends_with("</div>"));
    }

    #[test]
    fn test_custom_button_and_id_field() {
        let render = action_buttons(ActionButtons {
            view: false,
            edit: false,
            delete: false,
            custom: vec![CustomButton {
                class: "primary".to_string(),
                class_name: "btn-reset".to_string(),
                icon: "key".to_string(),
                title: "Reset".to_string(),
            }],
            id_field: "nim".to_string(),
        });
        let record = Record::new().with("nim", "2021001");
        let html = render(&record, "action").as_text().unwrap();
        assert_eq!(
            html,
            r#"<div class="btn-group btn-group-sm" role="group"><button type="button" class="btn btn-primary btn-reset" data-id="2021001" title="Reset"><i class="fa fa-key"></i></button></div>"#
        );
    }

    #[test]
    fn test_deserialize_defaults() {
        let buttons: ActionButtons =
            serde_json::from_str(r#"{"edit": true, "custom": [{"class_name": "x", "icon": "y"}]}"#)
                .unwrap();
        assert!(!buttons.view);
        assert!(buttons.edit);
        assert_eq!(buttons.id_field, "id");
        assert_eq!(buttons.custom[0].class, "secondary");
    }
}
