//! Simulate command implementation
//!
//! Simulates freight-rate paths and prints cross-sectional statistics per
//! time step, optionally followed by the first few trajectories.

use std::io::Write;

use fra_core::DistributionSummary;
use fra_pricing::mc::simulate_gbm_paths;
use fra_pricing::rng::SimulationRng;
use serde::Serialize;
use tracing::info;

use super::{EngineArgs, ProcessArgs};
use crate::config::CliConfig;
use crate::output::{write_json, OutputFormat};
use crate::Result;

/// Cross-section of all paths at one step
#[derive(Debug, Clone, Serialize)]
struct StepSummary {
    step: usize,
    time: f64,
    mean: f64,
    std_dev: f64,
    min: f64,
    max: f64,
}

#[derive(Debug, Serialize)]
struct SimulationReport {
    seed: u64,
    n_paths: usize,
    n_steps: usize,
    steps: Vec<StepSummary>,
    paths: Vec<Vec<f64>>,
}

/// Run the simulate command
pub fn run(
    mut config: CliConfig,
    process: &ProcessArgs,
    engine: &EngineArgs,
    show_paths: usize,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    process.apply(&mut config);
    engine.apply(&mut config);
    config.validate()?;

    let params = config.scenario_params()?;
    let mut rng = SimulationRng::from_optional_seed(params.seed());

    info!("Simulating freight-rate paths...");
    info!("  S0: {}", params.initial_rate());
    info!("  Volatility: {}", params.volatility());
    info!("  Horizon: {} years", params.horizon());
    info!("  Paths: {}", params.n_paths());
    info!("  Seed: {}", rng.seed());

    let paths = simulate_gbm_paths(params.gbm(), params.n_paths(), &mut rng)?;

    let steps = (0..paths.n_steps())
        .map(|step| -> Result<StepSummary> {
            let summary = DistributionSummary::from_samples(&paths.column(step))?;
            Ok(StepSummary {
                step,
                time: paths.grid().time_at(step),
                mean: summary.mean,
                std_dev: summary.std_dev,
                min: summary.min,
                max: summary.max,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let shown: Vec<&[f64]> = paths.rows().take(show_paths).collect();

    match format {
        OutputFormat::Json => {
            let report = SimulationReport {
                seed: rng.seed(),
                n_paths: paths.n_paths(),
                n_steps: paths.n_steps(),
                steps,
                paths: shown.iter().map(|p| p.to_vec()).collect(),
            };
            write_json(out, &report)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            let mut header: Vec<String> = ["step", "time", "mean", "std_dev", "min", "max"]
                .iter()
                .map(|s| s.to_string())
                .collect();
            header.extend((0..shown.len()).map(|i| format!("path_{}", i)));
            writer.write_record(&header)?;

            for s in &steps {
                let mut record = vec![
                    s.step.to_string(),
                    s.time.to_string(),
                    s.mean.to_string(),
                    s.std_dev.to_string(),
                    s.min.to_string(),
                    s.max.to_string(),
                ];
                record.extend(shown.iter().map(|p| p[s.step].to_string()));
                writer.write_record(&record)?;
            }
            writer.flush()?;
        }
        OutputFormat::Table => {
            write!(
                out,
                "{:>5} {:>8} {:>12} {:>12} {:>12} {:>12}",
                "step", "time", "mean", "std_dev", "min", "max"
            )?;
            for i in 0..shown.len() {
                write!(out, " {:>12}", format!("path_{}", i))?;
            }
            writeln!(out)?;

            for s in &steps {
                write!(
                    out,
                    "{:>5} {:>8.4} {:>12.2} {:>12.2} {:>12.2} {:>12.2}",
                    s.step, s.time, s.mean, s.std_dev, s.min, s.max
                )?;
                for p in &shown {
                    write!(out, " {:>12.2}", p[s.step])?;
                }
                writeln!(out)?;
            }
        }
    }

    info!("Simulation complete");
    Ok(())
}
