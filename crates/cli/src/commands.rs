//! Subcommand handlers.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};

use smartstock_analytics::{EvaluationReport, evaluate as evaluate_series};
use smartstock_core::{CapitalConstraint, ProductId, RiskInputs};
use smartstock_ingest::{
    Dataset, DemoDataConfig, IngestError, generate as generate_demo, template, write_records,
};

use crate::cli::{DataArgs, EvaluateArgs, GenerateArgs, OutputArgs, OutputFormat};
use crate::render;

pub fn products(args: &DataArgs) -> Result<()> {
    let dataset = load(args)?;
    let mut out = io::stdout().lock();
    for product in dataset.products() {
        writeln!(out, "{product}")?;
    }
    Ok(())
}

pub fn evaluate(args: &EvaluateArgs) -> Result<()> {
    let dataset = load(&args.data)?;

    let inputs = RiskInputs::new(args.current_stock, args.lead_time_days)
        .context("invalid stock or lead time")?;
    let capital = CapitalConstraint::new(args.unit_cost, args.available_capital)
        .context("invalid unit cost or capital")?;

    let products = match &args.product {
        Some(name) => vec![ProductId::new(name.as_str()).context("invalid product name")?],
        None => dataset.products(),
    };

    let reports = products
        .iter()
        .map(|product| evaluate_product(&dataset, product, &inputs, &capital))
        .collect::<Result<Vec<_>>>()?;

    let mut out = io::stdout().lock();
    match args.format {
        OutputFormat::Text => {
            for (i, report) in reports.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                write!(out, "{}", render::text(report))?;
            }
        }
        OutputFormat::Json => {
            let views: Vec<_> = reports.iter().map(render::JsonReport::new).collect();
            serde_json::to_writer_pretty(&mut out, &views)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

pub fn template(args: &OutputArgs) -> Result<()> {
    let writer = open_output(args.output.as_deref())?;
    template::write_template(writer).context("failed to write template")?;
    if let Some(path) = &args.output {
        tracing::info!(path = %path.display(), "wrote sample CSV template");
    }
    Ok(())
}

pub fn generate(args: &GenerateArgs) -> Result<()> {
    let records = generate_demo(&DemoDataConfig::default().with_seed(args.seed))?;
    let writer = open_output(args.output.output.as_deref())?;
    write_records(writer, &records).context("failed to write demo dataset")?;
    tracing::info!(rows = records.len(), seed = args.seed, "generated demo dataset");
    Ok(())
}

fn evaluate_product(
    dataset: &Dataset,
    product: &ProductId,
    inputs: &RiskInputs,
    capital: &CapitalConstraint,
) -> Result<EvaluationReport> {
    let series = match dataset.series(product) {
        Ok(series) => series,
        Err(IngestError::UnknownProduct(_)) => bail!(no_data(product)),
        Err(e) => return Err(e).with_context(|| format!("cannot build series for '{product}'")),
    };

    evaluate_series(&series, inputs, capital).map_err(|e| {
        if e.is_insufficient_data() {
            anyhow!(no_data(product))
        } else {
            anyhow!(e)
        }
    })
}

fn no_data(product: &ProductId) -> String {
    format!("No data available for selected product '{product}'.")
}

fn load(args: &DataArgs) -> Result<Dataset> {
    Dataset::from_path(&args.data).with_context(|| {
        format!(
            "could not load sales data from '{path}' \
             (run `smartstock generate --output {path}` for a demo dataset)",
            path = args.data.display()
        )
    })
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create '{}'", parent.display()))?;
            }
            let file = File::create(path)
                .with_context(|| format!("failed to create '{}'", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    })
}
