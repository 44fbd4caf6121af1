use crate::error::CliError;
use serde::Serialize;

fn to_json<T: Serialize>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Writes `value` as pretty JSON to `path`, or to stdout when no path is given.
pub async fn emit_json<T: Serialize>(value: &T, path: Option<String>) -> Result<(), CliError> {
    emit_text(to_json(value)?, path).await
}

pub async fn emit_text(text: String, path: Option<String>) -> Result<(), CliError> {
    match path {
        Some(path) => tokio::fs::write(path, text).await?,
        None => println!("{text}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::grid::envelope::ResultEnvelope;

    #[tokio::test]
    async fn test_emit_json_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("envelope.json");
        let envelope = ResultEnvelope {
            draw: 2,
            records_total: 0,
            records_filtered: 0,
            data: Vec::new(),
        };

        emit_json(&envelope, Some(path.display().to_string()))
            .await
            .unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["draw"], 2);
        assert_eq!(written["recordsTotal"], 0);
    }
}
