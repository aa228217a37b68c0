//! CLI argument definitions for the fastighet pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use fastighet_predict::VoteChoice;
use fastighet_store::DEFAULT_NAMESPACE;

#[derive(Parser)]
#[command(
    name = "fastighet",
    version,
    about = "Fastighet - Swedish property sales pipeline",
    long_about = "Load Swedish property sales exports into SQLite, partitioned by\n\
                  property type, and compare price estimates from the trained\n\
                  LightGBM and CatBoost models."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load a listing export into the SQLite database.
    Etl(EtlArgs),

    /// Estimate a sale price with both model families.
    Predict(PredictArgs),

    /// Cast and tally votes on which model estimated best.
    Votes(VotesArgs),
}

#[derive(Parser)]
pub struct EtlArgs {
    /// Path to the delimited listing export.
    #[arg(value_name = "LISTINGS_FILE")]
    pub input: PathBuf,

    /// SQLite database to load into.
    #[arg(long = "database", value_name = "PATH", default_value = "fastigheter.db")]
    pub database: PathBuf,

    /// Table name prefix for the per-type partitions.
    #[arg(long = "namespace", value_name = "PREFIX", default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Transform and report without writing to the database.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct PredictArgs {
    /// Directory holding the trained model artifacts.
    #[arg(long = "models", value_name = "DIR")]
    pub models: PathBuf,

    /// Property type to estimate for (e.g. "Villa").
    #[arg(long = "type", value_name = "TYPE")]
    pub property_type: String,

    /// Living area in square meters.
    #[arg(long)]
    pub boarea: Option<f64>,

    /// Auxiliary area in square meters.
    #[arg(long)]
    pub biarea: Option<f64>,

    /// Number of rooms.
    #[arg(long)]
    pub rum: Option<f64>,

    /// Plot area in square meters.
    #[arg(long)]
    pub tomtarea: Option<f64>,

    /// Floor number.
    #[arg(long)]
    pub vaning: Option<f64>,

    /// Street address.
    #[arg(long)]
    pub adress: Option<String>,

    /// District within the locality.
    #[arg(long)]
    pub omrade: Option<String>,

    /// Locality.
    #[arg(long)]
    pub ort: Option<String>,
}

#[derive(Parser)]
pub struct VotesArgs {
    /// Path to the vote ledger CSV.
    #[arg(long = "ledger", value_name = "PATH", default_value = "roster.csv")]
    pub ledger: PathBuf,

    /// Cast a vote before tallying.
    #[arg(long = "cast", value_enum, requires = "property_type")]
    pub cast: Option<VoteChoiceArg>,

    /// Property type the vote applies to.
    #[arg(long = "type", value_name = "TYPE")]
    pub property_type: Option<String>,
}

/// CLI vote choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum VoteChoiceArg {
    Lightgbm,
    Catboost,
    /// Neither family convinced you.
    Ingen,
}

impl From<VoteChoiceArg> for VoteChoice {
    fn from(choice: VoteChoiceArg) -> Self {
        match choice {
            VoteChoiceArg::Lightgbm => VoteChoice::LightGbm,
            VoteChoiceArg::Catboost => VoteChoice::CatBoost,
            VoteChoiceArg::Ingen => VoteChoice::Neither,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
