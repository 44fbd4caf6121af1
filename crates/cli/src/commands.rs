use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Run one grid request against a table and print the result envelope
    Query {
        #[arg(
            long,
            help = "Built-in table name (lecturers, students) or path to a table config JSON file"
        )]
        table: String,

        #[arg(
            long,
            help = "CSV or JSON file with the records; defaults to the seed rows of a built-in table"
        )]
        source: Option<String>,

        #[arg(
            long,
            help = "Grid request as a query string, e.g. 'draw=1&search[value]=di&start=0&length=10'"
        )]
        params: Option<String>,

        #[arg(
            long,
            help = "If specified, writes the JSON envelope to this file instead of stdout"
        )]
        output: Option<String>,
    },
    /// Print the lecturer listing response
    Listing {
        #[arg(long, help = "CSV or JSON file with lecturer records")]
        source: Option<String>,

        #[arg(
            long,
            help = "If specified, writes the JSON response to this file instead of stdout"
        )]
        output: Option<String>,
    },
    /// Export the fixture rows of an entity
    Seed {
        #[arg(long, help = "Entity to export: lecturers or students")]
        entity: String,

        #[arg(long, default_value = "json", help = "Output format: json or csv")]
        format: String,

        #[arg(long, help = "If specified, writes the rows to this file instead of stdout")]
        output: Option<String>,
    },
    /// Print a table configuration as JSON
    Columns {
        #[arg(long, help = "Built-in table name or path to a table config JSON file")]
        table: String,
    },
}
