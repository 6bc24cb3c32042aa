use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu",
    version,
    about = "pdbio - inspect and rewrite Protein Data Bank (PDB) structure files.",
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

    /// Path to a configuration file in TOML format
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Treat any malformed or incomplete record as an error instead of a warning
    #[arg(long, global = true)]
    pub strict: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read a PDB file and print a summary of its records.
    Info(InfoArgs),
    /// Print the atoms of a PDB file as formatted ATOM lines.
    Atoms(AtomsArgs),
    /// Read a PDB file and write it back out.
    Convert(ConvertArgs),
}

/// Arguments for the `info` subcommand.
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Path to the input PDB file.
    #[arg(value_name = "PATH")]
    pub input: PathBuf,
}

/// Arguments for the `atoms` subcommand.
#[derive(Args, Debug)]
pub struct AtomsArgs {
    /// Path to the input PDB file.
    #[arg(value_name = "PATH")]
    pub input: PathBuf,

    /// Print at most this many atoms.
    #[arg(short = 'n', long, value_name = "INT")]
    pub limit: Option<usize>,
}

/// Arguments for the `convert` subcommand.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Path to the input PDB file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the output PDB file (overwritten if it exists).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Write every supported record kind, not only atoms.
    #[arg(long, conflicts_with = "include")]
    pub complete: bool,

    /// Record kinds to write in addition to atoms. Can be used multiple times.
    #[arg(long, value_enum, value_name = "KIND")]
    pub include: Vec<RecordSelection>,
}

/// Non-atom record kinds that can be selected for output.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordSelection {
    Symmetries,
    Bonds,
    Crystal,
    Matrices,
}
