use crate::{
    error::ConfigError,
    table::{ColumnConfig, RenderSpec, TableConfig},
};
use model::domain::status::UserStatus;
use processor::renderers::{ActionButtons, StatusBadge};
use std::collections::BTreeMap;

pub const TABLE_NAMES: [&str; 2] = ["lecturers", "students"];

/// Built-in table by name (`lecturers`, `students`, case-insensitive).
pub fn by_name(name: &str) -> Result<TableConfig, ConfigError> {
    match name.to_lowercase().as_str() {
        "lecturers" | "lecturer" => Ok(lecturers()),
        "students" | "student" => Ok(students()),
        _ => Err(ConfigError::UnknownTable(name.to_string())),
    }
}

fn edit_delete() -> RenderSpec {
    RenderSpec::Actions(ActionButtons {
        view: false,
        edit: true,
        delete: true,
        ..ActionButtons::default()
    })
}

pub fn lecturers() -> TableConfig {
    let active = BTreeMap::from([
        ("1".to_string(), StatusBadge::new("Aktif", "success")),
        ("0".to_string(), StatusBadge::new("Tidak Aktif", "danger")),
    ]);

    TableConfig {
        title: "Table data dosen".to_string(),
        table_id: "table_dosen".to_string(),
        url_data: Some("/lecture/all".to_string()),
        primary_key: None,
        page_length: None,
        length_menu: vec![10, 25, 50, 100, -1],
        columns: vec![
            ColumnConfig::new("name", "Nama Dosen"),
            ColumnConfig::new("nidn", "Nidn"),
            ColumnConfig::new("expertise", "Bidang Khusus"),
            ColumnConfig::new("is_active", "Status Aktif")
                .render(RenderSpec::Status { statuses: active }),
            ColumnConfig::new("action", "Aksi").fixed().render(edit_delete()),
        ],
    }
}

pub fn students() -> TableConfig {
    let statuses = UserStatus::ALL
        .iter()
        .map(|status| {
            let class = match status {
                UserStatus::Active => "success",
                UserStatus::Inactive => "secondary",
                UserStatus::Suspended => "warning",
                UserStatus::Banned => "danger",
            };
            (status.as_str().to_string(), StatusBadge::new(status.label(), class))
        })
        .collect();

    TableConfig {
        title: "Table data mahasiswa".to_string(),
        table_id: "table_mahasiswa".to_string(),
        url_data: Some("/student/all".to_string()),
        primary_key: None,
        page_length: None,
        length_menu: vec![10, 25, 50, 100, -1],
        columns: vec![
            ColumnConfig::new("nim", "NIM"),
            ColumnConfig::new("name", "Nama Mahasiswa"),
            ColumnConfig::new("program", "Program Studi"),
            ColumnConfig::new("entry_year", "Angkatan"),
            ColumnConfig::new("status", "Status").render(RenderSpec::Status { statuses }),
            ColumnConfig::new("action", "Aksi").fixed().render(edit_delete()),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use model::{
        core::value::Value,
        grid::request::{OrderDirection, QueryRequest},
        records::record::Record,
    };
    use processor::RendererRegistry;

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(by_name("Lecturers").unwrap().table_id, "table_dosen");
        assert_eq!(by_name("student").unwrap().table_id, "table_mahasiswa");
        assert!(matches!(by_name("courses"), Err(ConfigError::UnknownTable(name)) if name == "courses"));
    }

    #[test]
    fn test_builtin_tables_build() {
        for name in TABLE_NAMES {
            let config = by_name(name).unwrap();
            let specs = config.column_specs(&RendererRegistry::new()).unwrap();
            assert_eq!(specs.len(), config.columns.len());
            let action = specs.last().unwrap();
            assert!(!action.searchable && !action.orderable);
        }
    }

    #[test]
    fn test_builtin_configs_serialize_and_parse_back() {
        let config = lecturers();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(TableConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_lecturer_table_end_to_end() {
        let mut processor = lecturers()
            .processor(&RendererRegistry::new(), &Settings::default())
            .unwrap();
        processor.set_records(vec![
            Record::new().with("id", 1).with("name", "Budi").with("is_active", true),
            Record::new().with("id", 2).with("name", "Andi").with("is_active", false),
        ]);

        let request = QueryRequest::new().draw(3).order_by(0, OrderDirection::Asc);
        let envelope = processor.process(&request);
        assert_eq!(envelope.draw, 3);
        assert_eq!(envelope.data[0].row_id, "2");
        assert_eq!(
            envelope.data[0].get("is_active"),
            Some(&Value::String(
                r#"<span class="badge badge-danger">Tidak Aktif</span>"#.to_string()
            ))
        );
    }

    #[test]
    fn test_student_status_badges() {
        let specs = students().column_specs(&RendererRegistry::new()).unwrap();
        let record = Record::new().with("status", "banned");
        let cell = specs[4].cell(&record);
        assert!(cell.as_text().unwrap().contains("badge-danger"));
    }
}
