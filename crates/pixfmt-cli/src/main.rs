//! pixfmt - Inspect and validate pixel format description tables

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "pixfmt")]
#[command(author, version, about = "Inspect and validate pixel format description tables")]
#[command(long_about = "
Parses a pixel format description table (one format per CSV row) and reports
on the formats it describes.

Examples:
  pixfmt check u_format.csv                       # Validate a table
  pixfmt list u_format.csv --layout s3tc          # List compressed formats
  pixfmt info u_format.csv b5g6r5_unorm           # Channel layout and properties
  pixfmt info u_format.csv PIPE_FORMAT_Z16_UNORM --json
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate one or more tables
    #[command(visible_alias = "c")]
    Check(CheckArgs),

    /// List formats in table order
    #[command(visible_alias = "l")]
    List(ListArgs),

    /// Show channels and derived properties of formats
    #[command(visible_alias = "i")]
    Info(InfoArgs),
}

#[derive(Args)]
struct CheckArgs {
    /// Format table(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,
}

#[derive(Args)]
struct ListArgs {
    /// Format table
    input: PathBuf,

    /// Only list formats with this layout tag (plain, s3tc, ...)
    #[arg(short, long)]
    layout: Option<String>,
}

#[derive(Args)]
struct InfoArgs {
    /// Format table
    input: PathBuf,

    /// Format names, full (PIPE_FORMAT_R8_UNORM) or short (r8_unorm)
    #[arg(required = true)]
    format: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Check(args) => commands::check::run(args, cli.verbose),
        Commands::List(args) => commands::list::run(args),
        Commands::Info(args) => commands::info::run(args),
    }
}
