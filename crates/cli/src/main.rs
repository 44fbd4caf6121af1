use crate::error::CliError;
use clap::Parser;
use commands::Commands;
use connectors::{RecordSource, file::csv::to_csv_string, open_file, seed::SeedEntity};
use engine_config::{Settings, TableConfig, builtin};
use model::{grid::request::QueryRequest, listing::lecturer_listing, records::record::Record};
use processor::RendererRegistry;
use std::{path::Path, str::FromStr};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "gridline",
    version = "0.1.0",
    about = "Server-side data-table processing"
)]
struct Cli {
    #[arg(long, global = true, help = "Optional .env file layered over the environment")]
    env_file: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // Logs go to stderr so stdout carries only JSON
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::load(cli.env_file.as_deref().map(Path::new))?;

    match cli.command {
        Commands::Query {
            table,
            source,
            params,
            output,
        } => {
            let config = load_table(&table).await?;
            let records = load_records(&table, source.as_deref()).await?;

            let mut processor = config.processor(&RendererRegistry::new(), &settings)?;
            processor.set_records(records);

            let request = match params {
                Some(query) => QueryRequest::from_query_string(&query),
                None => config.initial_request(&settings),
            };
            let envelope = processor.process(&request);
            info!(
                "Table '{}': {} of {} records matched, {} on this page",
                config.table_id,
                envelope.records_filtered,
                envelope.records_total,
                envelope.data.len()
            );

            output::emit_json(&envelope, output).await?;
        }
        Commands::Listing { source, output } => {
            let records = load_records("lecturers", source.as_deref()).await?;
            output::emit_json(&lecturer_listing(&records), output).await?;
        }
        Commands::Seed {
            entity,
            format,
            output,
        } => {
            let records = SeedEntity::from_str(&entity)?.records();
            match format.to_lowercase().as_str() {
                "csv" => output::emit_text(to_csv_string(&records)?, output).await?,
                "json" => output::emit_json(&records, output).await?,
                other => {
                    return Err(connectors::SourceError::UnsupportedFormat(other.to_string()).into());
                }
            }
        }
        Commands::Columns { table } => {
            let config = load_table(&table).await?;
            output::emit_json(&config, None).await?;
        }
    }

    Ok(())
}

/// A built-in table name, or a path to a JSON table config.
async fn load_table(table: &str) -> Result<TableConfig, CliError> {
    if table.ends_with(".json") || Path::new(table).is_file() {
        Ok(TableConfig::load(table).await?)
    } else {
        Ok(builtin::by_name(table)?)
    }
}

/// Records from `source` when given, else the seed rows matching `table`.
async fn load_records(table: &str, source: Option<&str>) -> Result<Vec<Record>, CliError> {
    let source: Box<dyn RecordSource> = match source {
        Some(path) => open_file(path)?,
        None => {
            let entity = SeedEntity::from_str(table)
                .map_err(|_| CliError::MissingSource(table.to_string()))?;
            Box::new(entity.source())
        }
    };

    let records = source.fetch_all().await?;
    info!("Loaded {} records from '{}'", records.len(), source.name());
    Ok(records)
}
