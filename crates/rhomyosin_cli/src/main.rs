//! Runs the reference Rho/myosin simulation and writes `data.csv`.

mod csv;

use crate::csv::CsvSink;
use anyhow::{Context, Result};
use log::info;
use rhomyosin_core::integration::{integrate, IntegrationSettings, RunSummary};
use rhomyosin_core::kinetics::RhoMyosinNetwork;
use rhomyosin_core::species::initial_conditions;
use rhomyosin_core::traits::DynamicalSystem;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;

const OUTPUT_PATH: &str = "data.csv";

fn run(path: &Path) -> Result<RunSummary> {
    let file = File::create(path)
        .with_context(|| format!("unable to open output file {}", path.display()))?;
    let sink = CsvSink::new(BufWriter::new(file))
        .with_context(|| format!("failed to write header to {}", path.display()))?;

    simulate(
        &RhoMyosinNetwork::new(),
        initial_conditions().as_slice(),
        &IntegrationSettings::default(),
        sink,
    )
}

/// Integrates into `sink`, flushing whatever was sampled even if the run fails.
fn simulate<S, W>(
    system: &S,
    initial: &[f64],
    settings: &IntegrationSettings,
    mut sink: CsvSink<W>,
) -> Result<RunSummary>
where
    S: DynamicalSystem<f64>,
    W: Write,
{
    let outcome = integrate(system, initial, settings, &mut sink);

    let rows = sink.rows();
    let flushed = sink.finish();
    let summary = outcome.context("integration failed")?;
    flushed.context("failed to flush output")?;
    info!("wrote {rows} rows");
    Ok(summary)
}

fn report(summary: &RunSummary) {
    println!("integration complete.");
    println!("number of steps: {}", summary.steps);
    println!("proportion bad steps: {}", summary.rejected_fraction());
    println!("average step size: {}", summary.mean_step());
    println!("min step size: {}", summary.min_step);
    println!("max step size: {}", summary.max_step);
}

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .init();

    match run(Path::new(OUTPUT_PATH)) {
        Ok(summary) => {
            report(&summary);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
