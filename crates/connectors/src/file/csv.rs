use crate::{error::SourceError, file::normalize_col_name, source::RecordSource};
use async_trait::async_trait;
use model::{core::value::Value, records::record::Record};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct CsvSettings {
    pub delimiter: u8,
    pub has_header: bool,
    /// Lower-case header names and replace punctuation with underscores.
    pub normalize_headers: bool,
}

impl Default for CsvSettings {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_header: true,
            normalize_headers: true,
        }
    }
}

/// Reads records from a CSV file. Cells are typed by inference (integers,
/// floats, booleans), empty cells become null and short rows are padded
/// with nulls.
#[derive(Debug, Clone)]
pub struct CsvSource {
    name: String,
    path: PathBuf,
    settings: CsvSettings,
}

impl CsvSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::with_settings(path, CsvSettings::default())
    }

    pub fn with_settings(path: impl AsRef<Path>, settings: CsvSettings) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        Self {
            name,
            path,
            settings,
        }
    }
}

#[async_trait]
impl RecordSource for CsvSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_all(&self) -> Result<Vec<Record>, SourceError> {
        let start = std::time::Instant::now();
        let bytes = tokio::fs::read(&self.path).await?;
        let records = parse_csv(&bytes, &self.settings)?;
        debug!(
            source = %self.name,
            rows = records.len(),
            took_ms = start.elapsed().as_millis() as u64,
            "Loaded CSV records"
        );
        Ok(records)
    }
}

pub fn parse_csv(bytes: &[u8], settings: &CsvSettings) -> Result<Vec<Record>, SourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(settings.delimiter)
        .has_headers(settings.has_header)
        .flexible(true)
        .from_reader(bytes);

    let headers: Vec<String> = if settings.has_header {
        reader
            .headers()?
            .iter()
            .map(|h| {
                if settings.normalize_headers {
                    normalize_col_name(h)
                } else {
                    h.to_string()
                }
            })
            .collect()
    } else {
        Vec::new()
    };

    let mut records = Vec::new();
    for (line, row) in reader.records().enumerate() {
        let row = row?;

        if settings.has_header && row.len() > headers.len() {
            warn!(
                "Row {} has {} cells but only {} headers, extra cells dropped",
                line + 1,
                row.len(),
                headers.len()
            );
        }

        let width = if settings.has_header { headers.len() } else { row.len() };
        let mut record = Record::new();
        for ordinal in 0..width {
            let name = match headers.get(ordinal) {
                Some(name) => name.clone(),
                None => format!("col_{}", ordinal + 1),
            };
            let value = row.get(ordinal).map(Value::infer).unwrap_or(Value::Null);
            record.set(&name, value);
        }
        records.push(record);
    }

    Ok(records)
}

/// Writes records as CSV. The header is the union of all field names in
/// first-seen order; missing fields are written as empty cells.
pub fn to_csv_string(records: &[Record]) -> Result<String, SourceError> {
    let mut headers: Vec<String> = Vec::new();
    for record in records {
        for name in record.field_names() {
            if !headers.iter().any(|h| h == name) {
                headers.push(name.to_string());
            }
        }
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&headers)?;
    for record in records {
        writer.write_record(headers.iter().map(|h| record.text(h).unwrap_or_default()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| SourceError::InvalidFormat(format!("Failed to flush CSV writer: {e}")))?;
    String::from_utf8(bytes).map_err(|e| SourceError::InvalidFormat(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const LECTURERS_CSV: &str = "\
id,NIDN,Name,Expertise,Academic Rank,Is Active
1,012345678901234,Dr. Andi Wijaya,Software Engineering,3,true
2,098765432109876,Prof. Budi Santoso,Data Science,5,true
3,,\"Siti Rahma, M.Kom\",Information Systems,2,false
";

    #[test]
    fn test_parse_with_headers() {
        let records = parse_csv(LECTURERS_CSV.as_bytes(), &CsvSettings::default()).unwrap();
        assert_eq!(records.len(), 3);

        let siti = &records[2];
        assert!(siti.get("nidn").is_none());
        assert_eq!(siti.text("name"), Some("Siti Rahma, M.Kom".to_string()));
        assert_eq!(siti.get("academic_rank"), Some(&Value::Int(2)));
        assert_eq!(siti.get("is_active"), Some(&Value::Boolean(false)));
        assert_eq!(
            records[0].get("nidn"),
            Some(&Value::String("012345678901234".to_string()))
        );
    }

    #[test]
    fn test_short_rows_are_padded() {
        let csv = "a,b,c\n1,2\n";
        let records = parse_csv(csv.as_bytes(), &CsvSettings::default()).unwrap();
        assert_eq!(records[0].len(), 3);
        assert!(records[0].get("c").is_none());
    }

    #[test]
    fn test_without_header() {
        let settings = CsvSettings {
            delimiter: b';',
            has_header: false,
            normalize_headers: false,
        };
        let records = parse_csv("x;y\n".as_bytes(), &settings).unwrap();
        assert_eq!(records[0].text("col_1"), Some("x".to_string()));
        assert_eq!(records[0].text("col_2"), Some("y".to_string()));
    }

    #[test]
    fn test_write_csv() {
        let records = vec![
            Record::new().with("id", 1).with("name", "Andi"),
            Record::new().with("id", 2).with("nidn", "0987"),
        ];
        let csv = to_csv_string(&records).unwrap();
        assert_eq!(csv, "id,name,nidn\n1,Andi,\n2,,0987\n");
    }

    #[tokio::test]
    async fn test_fetch_from_file() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(LECTURERS_CSV.as_bytes()).unwrap();

        let source = CsvSource::new(file.path());
        let records = source.fetch_all().await.unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].text("name"), Some("Prof. Budi Santoso".to_string()));
    }
}
