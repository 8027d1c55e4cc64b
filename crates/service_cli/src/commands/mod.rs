//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Flags shared between
//! commands are grouped into the argument structs below; a flag that is not
//! given leaves the configured value in place.

use clap::Args;

use crate::config::CliConfig;

pub mod grid;
pub mod hedge;
pub mod scenario;
pub mod simulate;

/// Rate process flags
#[derive(Args, Debug, Clone, Default)]
pub struct ProcessArgs {
    /// Initial freight rate S0
    #[arg(long)]
    pub initial_rate: Option<f64>,

    /// Annualised volatility
    #[arg(long)]
    pub volatility: Option<f64>,

    /// Simulated horizon in years
    #[arg(long)]
    pub horizon: Option<f64>,
}

/// Monte Carlo engine flags
#[derive(Args, Debug, Clone, Default)]
pub struct EngineArgs {
    /// Annualised drift
    #[arg(long, allow_negative_numbers = true)]
    pub drift: Option<f64>,

    /// Time step in years
    #[arg(long)]
    pub time_step: Option<f64>,

    /// Number of Monte Carlo paths
    #[arg(short = 'n', long)]
    pub paths: Option<usize>,
}

/// FRA contract flags
#[derive(Args, Debug, Clone, Default)]
pub struct ContractArgs {
    /// Agreed fixed rate
    #[arg(long)]
    pub strike: Option<f64>,

    /// Notional (e.g. charter days)
    #[arg(long)]
    pub notional: Option<f64>,

    /// Contract duration in years
    #[arg(long)]
    pub duration: Option<f64>,

    /// Settlement step; derived from the duration when omitted
    #[arg(long)]
    pub eval_day: Option<usize>,
}

impl ProcessArgs {
    /// Overlay the given flags on `config`
    pub fn apply(&self, config: &mut CliConfig) {
        let sim = &mut config.simulation;
        if let Some(v) = self.initial_rate {
            sim.initial_rate = v;
        }
        if let Some(v) = self.volatility {
            sim.volatility = v;
        }
        if let Some(v) = self.horizon {
            sim.horizon = v;
        }
    }
}

impl EngineArgs {
    /// Overlay the given flags on `config`
    pub fn apply(&self, config: &mut CliConfig) {
        let sim = &mut config.simulation;
        if let Some(v) = self.drift {
            sim.drift = v;
        }
        if let Some(v) = self.time_step {
            sim.time_step = v;
        }
        if let Some(v) = self.paths {
            sim.n_paths = v;
        }
    }
}

impl ContractArgs {
    /// Overlay the given flags on `config`
    pub fn apply(&self, config: &mut CliConfig) {
        let contract = &mut config.contract;
        if let Some(v) = self.strike {
            contract.strike = v;
        }
        if let Some(v) = self.notional {
            contract.notional = v;
        }
        if let Some(v) = self.duration {
            contract.duration = v;
        }
        if self.eval_day.is_some() {
            contract.evaluation_day = self.eval_day;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_flags_keep_config() {
        let mut config = CliConfig::default();
        ProcessArgs::default().apply(&mut config);
        EngineArgs::default().apply(&mut config);
        ContractArgs::default().apply(&mut config);
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = CliConfig::default();
        config.contract.evaluation_day = Some(5);

        ProcessArgs {
            volatility: Some(0.25),
            ..Default::default()
        }
        .apply(&mut config);
        EngineArgs {
            paths: Some(10),
            ..Default::default()
        }
        .apply(&mut config);
        ContractArgs {
            eval_day: Some(7),
            ..Default::default()
        }
        .apply(&mut config);

        assert_eq!(config.simulation.volatility, 0.25);
        assert_eq!(config.simulation.n_paths, 10);
        assert_eq!(config.contract.evaluation_day, Some(7));
        assert_eq!(config.simulation.initial_rate, 15_000.0);
    }
}
