use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "promol CLI - evaluate promolecular properties from tabulated atomic reference data.",
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

    /// Set the number of threads for parallel grid evaluation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the species tabulated by a reference dataset.
    Info(InfoArgs),
    /// Compute a molecular scalar property (extensive sum or power mean).
    Scalar(ScalarArgs),
    /// Evaluate a spatial property field over a grid of query points.
    Eval(EvalArgs),
}

/// Arguments for the `info` subcommand.
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Path to the dataset TOML file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub dataset: PathBuf,
}

/// Arguments for the `scalar` subcommand.
#[derive(Args, Debug)]
pub struct ScalarArgs {
    /// Path to the dataset TOML file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub dataset: PathBuf,

    /// Path to the molecule TOML file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub molecule: PathBuf,

    /// Scalar property kind (mass, energy, nelec, nspin, ip).
    #[arg(short, long, required = true, value_name = "KIND")]
    pub kind: String,

    /// Compute the intensive power mean with this exponent instead of the
    /// extensive sum.
    #[arg(short, long, value_name = "FLOAT")]
    pub power: Option<f64>,
}

/// Arguments for the `eval` subcommand.
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Path to the dataset TOML file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub dataset: PathBuf,

    /// Path to the molecule TOML file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub molecule: PathBuf,

    /// Field kind (density, ked, gradient, laplacian, hessian).
    #[arg(short, long, required = true, value_name = "KIND")]
    pub kind: String,

    /// Path to a CSV file of query points with an x,y,z header, in bohr.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub points: PathBuf,

    /// Path for the CSV output; stdout when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Spin channel: a, b, or ab.
    #[arg(short, long, default_value = "ab", value_name = "SPIN")]
    pub spin: String,

    /// Apply the natural logarithm to the summed scalar field.
    #[arg(long)]
    pub log: bool,
}
