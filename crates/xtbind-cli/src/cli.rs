use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "The xtbind developers",
    version,
    about = "xtbind CLI - structure validation and method inspection for the xtbind GFN-xTB binding layer.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a molecular structure the way a calculator construction would.
    Check(CheckArgs),
    /// List the known method parametrizations and their capabilities.
    Methods,
}

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the input structure in XYZ format (coordinates in angstrom).
    #[arg(value_name = "PATH")]
    pub input: PathBuf,

    /// Method parametrization to check the structure against
    /// (e.g. 'gfn2-xtb'; overrides the settings file).
    #[arg(short, long, value_name = "NAME")]
    pub method: Option<String>,

    /// Path to a TOML settings file with calculation options.
    #[arg(short, long, value_name = "PATH")]
    pub settings: Option<PathBuf>,
}
