//! Hedge command implementation
//!
//! Compares the cost of the floating freight exposure with and without the
//! FRA across the simulated paths.

use std::io::Write;

use fra_core::DistributionSummary;
use fra_pricing::scenario::analyse_hedge;
use serde::Serialize;
use tracing::info;

use super::{ContractArgs, EngineArgs, ProcessArgs};
use crate::config::CliConfig;
use crate::output::{write_csv, write_json, OutputFormat};
use crate::Result;

#[derive(Debug, Serialize)]
struct HedgeReport {
    evaluation_day: usize,
    seed: u64,
    fixed_cost: f64,
    hedge_effectiveness: f64,
    payoff: DistributionSummary,
    unhedged_cost: DistributionSummary,
    hedged_cost: DistributionSummary,
}

#[derive(Debug, Serialize)]
struct SummaryRecord<'a> {
    distribution: &'a str,
    mean: f64,
    std_dev: f64,
    min: f64,
    max: f64,
    count: usize,
}

impl<'a> SummaryRecord<'a> {
    fn new(distribution: &'a str, s: &DistributionSummary) -> Self {
        Self {
            distribution,
            mean: s.mean,
            std_dev: s.std_dev,
            min: s.min,
            max: s.max,
            count: s.count,
        }
    }
}

/// Run the hedge command
pub fn run(
    mut config: CliConfig,
    process: &ProcessArgs,
    engine: &EngineArgs,
    contract: &ContractArgs,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    process.apply(&mut config);
    engine.apply(&mut config);
    contract.apply(&mut config);
    config.validate()?;

    let params = config.scenario_params()?;
    info!("Analysing hedged vs unhedged cost...");
    info!("  Strike: {}", params.strike());
    info!("  Notional: {}", params.notional());
    info!("  Duration: {} years", params.duration());

    let analysis = analyse_hedge(&params)?;
    info!("  Seed: {}", analysis.seed);

    let report = HedgeReport {
        evaluation_day: analysis.evaluation_day,
        seed: analysis.seed,
        fixed_cost: params.contract().fixed_cost(),
        hedge_effectiveness: analysis.hedge_effectiveness(),
        payoff: analysis.payoff_summary,
        unhedged_cost: analysis.unhedged_summary,
        hedged_cost: analysis.hedged_summary,
    };

    let records = [
        SummaryRecord::new("payoff", &report.payoff),
        SummaryRecord::new("unhedged_cost", &report.unhedged_cost),
        SummaryRecord::new("hedged_cost", &report.hedged_cost),
    ];

    match format {
        OutputFormat::Json => write_json(out, &report)?,
        OutputFormat::Csv => write_csv(out, &records)?,
        OutputFormat::Table => {
            writeln!(
                out,
                "Hedged vs unhedged cost (evaluation day {}, seed {})",
                report.evaluation_day, report.seed
            )?;
            writeln!(
                out,
                "{:<14} {:>14} {:>14} {:>14} {:>14}",
                "", "mean", "std_dev", "min", "max"
            )?;
            for r in &records {
                writeln!(
                    out,
                    "{:<14} {:>14.2} {:>14.2} {:>14.2} {:>14.2}",
                    r.distribution, r.mean, r.std_dev, r.min, r.max
                )?;
            }
            writeln!(out, "Locked-in cost:      {:.2}", report.fixed_cost)?;
            writeln!(
                out,
                "Hedge effectiveness: {:.2}%",
                100.0 * report.hedge_effectiveness
            )?;
        }
    }

    info!("Hedge analysis complete");
    Ok(())
}
