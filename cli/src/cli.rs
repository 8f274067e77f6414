use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about, version, name = "sparql-assist")]
/// SPARQL query validation, formatting and editing toolkit
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check a query for structural mistakes
    ///
    /// Warnings are written to stderr. The command fails if the query is invalid.
    Validate {
        /// File to read the query from
        ///
        /// If no file is given, stdin is read.
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
        /// SPARQL endpoint the query is meant for
        ///
        /// If set, the query must also be ready to be sent to this endpoint.
        #[arg(long, value_hint = ValueHint::Url)]
        endpoint: Option<String>,
    },
    /// Put each clause on its own line and indent by brace depth
    Format {
        #[command(flatten)]
        io: QueryIo,
    },
    /// Declare a prefix after the existing PREFIX lines
    AddPrefix {
        #[command(flatten)]
        io: QueryIo,
        /// Name of the prefix, e.g. "foaf"
        name: String,
        /// Namespace IRI of the prefix
        ///
        /// May be omitted for the prefixes listed by the `prefixes` command.
        #[arg(value_hint = ValueHint::Url)]
        iri: Option<String>,
    },
    /// Append a LIMIT clause if the query has none
    AddLimit {
        #[command(flatten)]
        io: QueryIo,
        /// Maximum number of results
        #[arg(long, env = "SPARQL_ASSIST_LIMIT", default_value_t = sparql_assist::editor::DEFAULT_LIMIT)]
        limit: u64,
    },
    /// Write a boilerplate query if the input is empty
    Skeleton {
        #[command(flatten)]
        io: QueryIo,
    },
    /// List the common prefixes known to `add-prefix`
    Prefixes,
    /// List suggested public SPARQL endpoints
    Endpoints,
}

#[derive(clap::Args)]
pub struct QueryIo {
    /// File to read the query from
    ///
    /// If no file is given, stdin is read.
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,
    /// File to write the resulting query to
    ///
    /// If no file is given, stdout is written.
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub to_file: Option<PathBuf>,
}
