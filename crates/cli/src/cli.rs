//! Command structure and configuration.
//!
//! Every scalar input can come from a flag or from a `SMARTSTOCK_*`
//! environment variable; the defaults match the dashboard's initial values.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use smartstock_observability::LogFormat;

/// SmartStock - inventory intelligence for growing retailers
///
/// Forecasts demand, scores stockout risk and recommends a reorder that fits
/// the purchasing budget.
#[derive(Debug, Parser)]
#[command(name = "smartstock")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log output format (pretty, json)
    #[arg(long, global = true, env = "SMARTSTOCK_LOG_FORMAT", default_value = "pretty")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn default_log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List products found in the sales dataset
    Products(DataArgs),

    /// Forecast demand, score risk and recommend a reorder
    Evaluate(EvaluateArgs),

    /// Write the sample CSV template
    Template(OutputArgs),

    /// Write a synthetic demo dataset
    Generate(GenerateArgs),
}

#[derive(Debug, Clone, Args)]
pub struct DataArgs {
    /// Sales CSV with columns date, product, sales (date as YYYY-MM-DD)
    #[arg(long, env = "SMARTSTOCK_DATA", default_value = "data/retail_sales_data.csv")]
    pub data: PathBuf,
}

#[derive(Debug, Clone, Args)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Product to evaluate
    #[arg(short, long, required_unless_present = "all", conflicts_with = "all")]
    pub product: Option<String>,

    /// Evaluate every product in the dataset
    #[arg(long)]
    pub all: bool,

    /// Units currently on hand
    #[arg(long, env = "SMARTSTOCK_CURRENT_STOCK", default_value_t = 500)]
    pub current_stock: u64,

    /// Cost per unit
    #[arg(long, env = "SMARTSTOCK_UNIT_COST", default_value_t = 1000.0)]
    pub unit_cost: f64,

    /// Capital available for reordering
    #[arg(long, env = "SMARTSTOCK_AVAILABLE_CAPITAL", default_value_t = 500_000.0)]
    pub available_capital: f64,

    /// Supplier lead time in days
    #[arg(long, env = "SMARTSTOCK_LEAD_TIME_DAYS", default_value_t = 7.0)]
    pub lead_time_days: f64,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Args)]
pub struct OutputArgs {
    /// Destination file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub output: OutputArgs,

    /// RNG seed; the same seed always yields the same history
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}
