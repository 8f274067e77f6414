#![allow(clippy::print_stderr)]
use crate::cli::{Args, Command, QueryIo};
use anyhow::{bail, Context};
use clap::Parser;
use oxiri::Iri;
use sparql_assist::vocab::{PrefixDeclaration, COMMON_PREFIXES, SUGGESTED_ENDPOINTS};
use sparql_assist::{validate, Edit, EditSession, SessionConfig};
use std::fs::File;
use std::io::{self, stdin, stdout, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod cli;

pub fn main() -> anyhow::Result<()> {
    init_logging();
    let matches = Args::parse();
    match matches.command {
        Command::Validate { file, endpoint } => {
            let query = read_query(file.as_deref())?;
            let warnings = if let Some(endpoint) = endpoint {
                let session = EditSession::default()
                    .apply(Edit::Replace(query))
                    .apply(Edit::SetEndpoint(endpoint));
                session.prepare_execution()?.warnings
            } else {
                validate(&query).into_result()?
            };
            for warning in warnings {
                eprintln!("Warning: {warning}");
            }
            Ok(())
        }
        Command::Format { io } => edit_query(io, SessionConfig::default(), Edit::Format),
        Command::AddPrefix { io, name, iri } => {
            let namespace = if let Some(iri) = iri {
                Iri::parse(iri.as_str())
                    .with_context(|| format!("Invalid IRI for prefix {name}: {iri}"))?;
                iri
            } else if let Some(prefix) = PrefixDeclaration::lookup(&name) {
                prefix.namespace.to_owned()
            } else {
                bail!("The prefix '{name}' is unknown, its IRI must be given")
            };
            edit_query(
                io,
                SessionConfig::default(),
                Edit::AddPrefix { name, namespace },
            )
        }
        Command::AddLimit { io, limit } => edit_query(
            io,
            SessionConfig {
                default_limit: limit,
                ..SessionConfig::default()
            },
            Edit::AddLimit,
        ),
        Command::Skeleton { io } => edit_query(io, SessionConfig::default(), Edit::AddSkeleton),
        Command::Prefixes => {
            let mut output = stdout().lock();
            for prefix in COMMON_PREFIXES {
                writeln!(
                    output,
                    "{}\t{}\t{}",
                    prefix.name, prefix.namespace, prefix.description
                )?;
            }
            Ok(output.flush()?)
        }
        Command::Endpoints => {
            let mut output = stdout().lock();
            for endpoint in SUGGESTED_ENDPOINTS {
                writeln!(output, "{}\t{}", endpoint.name, endpoint.url)?;
            }
            Ok(output.flush()?)
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn edit_query(io: QueryIo, config: SessionConfig, edit: Edit) -> anyhow::Result<()> {
    let query = read_query(io.file.as_deref())?;
    let session = EditSession::new(config)
        .apply(Edit::Replace(query))
        .apply(edit);
    if let Some(validation) = session.validation() {
        tracing::info!(?validation, lines = session.line_count(), "edited query");
    }
    write_query(io.to_file, session.query())
}

fn read_query(file: Option<&Path>) -> anyhow::Result<String> {
    let mut query = String::new();
    if let Some(file) = file {
        File::open(file)
            .with_context(|| format!("Not able to open {}", file.display()))?
            .read_to_string(&mut query)?;
    } else {
        stdin().lock().read_to_string(&mut query)?;
    }
    Ok(query)
}

fn write_query(to_file: Option<PathBuf>, query: &str) -> anyhow::Result<()> {
    if let Some(to_file) = to_file {
        let mut writer = BufWriter::new(
            File::create(&to_file)
                .with_context(|| format!("Not able to create {}", to_file.display()))?,
        );
        writer.write_all(query.as_bytes())?;
        close_file_writer(writer)?;
    } else {
        let mut output = stdout().lock();
        output.write_all(query.as_bytes())?;
        output.flush()?;
    }
    Ok(())
}

fn close_file_writer(writer: BufWriter<File>) -> io::Result<()> {
    let mut file = writer
        .into_inner()
        .map_err(io::IntoInnerError::into_error)?;
    file.flush()?;
    file.sync_all()
}
