//! Scenario command implementation
//!
//! Evaluates one FRA hedge scenario and reports the mean and standard
//! deviation of the settlement cashflow.

use std::io::Write;

use fra_pricing::scenario::evaluate_scenario;
use tracing::info;

use super::{ContractArgs, EngineArgs, ProcessArgs};
use crate::config::CliConfig;
use crate::output::{write_csv, write_json, OutputFormat};
use crate::Result;

/// Run the scenario command
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
    info!("Evaluating scenario...");
    info!("  S0: {}", params.initial_rate());
    info!("  Volatility: {}", params.volatility());
    info!("  Horizon: {} years", params.horizon());
    info!("  Strike: {}", params.strike());

    let result = evaluate_scenario(&params)?;
    info!("  Seed: {}", result.seed);

    match format {
        OutputFormat::Json => write_json(out, &result)?,
        OutputFormat::Csv => write_csv(out, &[result])?,
        OutputFormat::Table => {
            writeln!(out, "FRA PnL (evaluation day {})", result.evaluation_day)?;
            writeln!(out, "  mean:    {:>14.2}", result.mean)?;
            writeln!(out, "  std_dev: {:>14.2}", result.std_dev)?;
            writeln!(out, "  seed:    {:>14}", result.seed)?;
        }
    }

    info!("Scenario complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use fra_core::types::FraError;

    fn quarterly() -> CliConfig {
        let mut config = CliConfig::default();
        config.seed = Some(7);
        config.simulation.volatility = 0.25;
        config.simulation.horizon = 0.25;
        config
    }

    fn render(config: CliConfig, contract: &ContractArgs, format: OutputFormat) -> Result<String> {
        let mut buf = Vec::new();
        run(
            config,
            &ProcessArgs::default(),
            &EngineArgs::default(),
            contract,
            format,
            &mut buf,
        )?;
        Ok(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_json_reports_evaluation_day_and_seed() {
        let text = render(quarterly(), &ContractArgs::default(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["evaluation_day"], 20);
        assert_eq!(value["seed"], 7);
        assert!(value["std_dev"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn test_csv_single_record() {
        let text = render(quarterly(), &ContractArgs::default(), OutputFormat::Csv).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "mean,std_dev,evaluation_day,seed");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_short_duration_surfaces_engine_error() {
        let contract = ContractArgs {
            duration: Some(0.001),
            ..Default::default()
        };
        let err = render(quarterly(), &contract, OutputFormat::Table).unwrap_err();
        assert!(matches!(
            err,
            CliError::Engine(FraError::EvaluationDayOutOfRange { index: -1, .. })
        ));
    }
}
