//! SmartStock command line.
//!
//! Usage:
//!   smartstock products                       # list products in the dataset
//!   smartstock evaluate --product "Rice 50kg" # forecast, risk, timing, reorder
//!   smartstock evaluate --all --format json
//!   smartstock template                       # sample CSV layout
//!   smartstock generate --output data/retail_sales_data.csv

mod cli;
mod commands;
mod render;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    smartstock_observability::init_with_default(cli.log_format, cli.default_log_filter());

    match &cli.command {
        Commands::Products(args) => commands::products(args),
        Commands::Evaluate(args) => commands::evaluate(args),
        Commands::Template(args) => commands::template(args),
        Commands::Generate(args) => commands::generate(args),
    }
}
