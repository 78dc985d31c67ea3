use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI parser for the `surveyd` binary.
///
/// Every flag is optional; when given it overrides the loaded configuration.
#[derive(Debug, Parser)]
#[command(name = "surveyd", version, about = "Survey platform HTTP server")]
pub struct Cli {
    /// Quiet mode (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,

    /// Interface to bind (overrides `server.host`)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides `server.port`)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Snapshot file loaded at startup and written at shutdown (overrides `storage.data_file`)
    #[arg(short, long)]
    pub data_file: Option<PathBuf>,

    /// Maximum questions per survey and answers per response (overrides `survey.max_questions`)
    #[arg(long)]
    pub max_questions: Option<usize>,
}
