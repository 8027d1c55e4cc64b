//! CLI configuration management
//!
//! Settings are resolved in order of precedence:
//!
//! 1. Command-line flags
//! 2. `FRA_*` environment variables
//! 3. TOML configuration file (`--config`)
//! 4. Built-in defaults
//!
//! ```toml
//! log_level = "info"
//! seed = 42
//!
//! [simulation]
//! initial_rate = 15000.0
//! volatility = 0.25
//! horizon = 0.25
//!
//! [contract]
//! strike = 14500.0
//!
//! [grid]
//! initial_rates = [12000.0, 14000.0]
//! volatilities = [0.1, 0.2]
//! maturities = [0.25]
//! ```

use std::path::Path;
use std::str::FromStr;

use fra_core::types::FraResult;
use fra_pricing::scenario::{
    ScenarioParams, DEFAULT_DURATION, DEFAULT_HORIZON, DEFAULT_INITIAL_RATE, DEFAULT_NOTIONAL,
    DEFAULT_N_PATHS, DEFAULT_STRIKE, DEFAULT_TIME_STEP, DEFAULT_VOLATILITY,
};
use fra_risk::{GridSettings, SensitivityGrid};
use serde::Deserialize;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse configuration file: {0}")]
    Parse(String),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Environment variable {var} has invalid value '{value}'")]
    Env { var: &'static str, value: String },

    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Log levels accepted in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

/// `[simulation]` section: process and engine parameters
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub initial_rate: f64,
    pub drift: f64,
    pub volatility: f64,
    pub horizon: f64,
    pub time_step: f64,
    pub n_paths: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            initial_rate: DEFAULT_INITIAL_RATE,
            drift: 0.0,
            volatility: DEFAULT_VOLATILITY,
            horizon: DEFAULT_HORIZON,
            time_step: DEFAULT_TIME_STEP,
            n_paths: DEFAULT_N_PATHS,
        }
    }
}

/// `[contract]` section: FRA terms
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContractConfig {
    pub strike: f64,
    pub notional: f64,
    pub duration: f64,
    /// Explicit settlement step; derived from `duration` when absent
    pub evaluation_day: Option<usize>,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            strike: DEFAULT_STRIKE,
            notional: DEFAULT_NOTIONAL,
            duration: DEFAULT_DURATION,
            evaluation_day: None,
        }
    }
}

/// `[grid]` section: sensitivity sweep axes
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub initial_rates: Vec<f64>,
    pub volatilities: Vec<f64>,
    pub maturities: Vec<f64>,
    /// Evaluate cells on the Rayon pool
    pub parallel: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            initial_rates: vec![12_000.0, 14_000.0, 16_000.0],
            volatilities: vec![0.1, 0.2, 0.3],
            maturities: vec![0.25, 0.5, 1.0],
            parallel: true,
        }
    }
}

/// Fully merged CLI configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct CliConfig {
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    pub seed: Option<u64>,
    pub simulation: SimulationConfig,
    pub contract: ContractConfig,
    pub grid: GridConfig,
}

fn parse_var<T: FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::Env { var, value })
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load the file if given, otherwise start from defaults, then apply
    /// environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.with_env_override()
    }

    /// Apply `FRA_*` environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|var| std::env::var(var).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("FRA_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(seed) = lookup("FRA_SEED") {
            self.seed = Some(parse_var("FRA_SEED", seed)?);
        }
        if let Some(n_paths) = lookup("FRA_N_PATHS") {
            self.simulation.n_paths = parse_var("FRA_N_PATHS", n_paths)?;
        }
        if let Some(time_step) = lookup("FRA_TIME_STEP") {
            self.simulation.time_step = parse_var("FRA_TIME_STEP", time_step)?;
        }
        if let Some(strike) = lookup("FRA_STRIKE") {
            self.contract.strike = parse_var("FRA_STRIKE", strike)?;
        }
        if let Some(notional) = lookup("FRA_NOTIONAL") {
            self.contract.notional = parse_var("FRA_NOTIONAL", notional)?;
        }
        if let Some(duration) = lookup("FRA_DURATION") {
            self.contract.duration = parse_var("FRA_DURATION", duration)?;
        }
        Ok(self)
    }

    /// Validate the merged configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if let Err(e) = self.scenario_params() {
            errors.push(e.to_string());
        }

        let axes = [
            ("grid.initial_rates", &self.grid.initial_rates),
            ("grid.volatilities", &self.grid.volatilities),
            ("grid.maturities", &self.grid.maturities),
        ];
        for (name, values) in axes {
            if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
                errors.push(format!("{} contains non-finite value {}", name, bad));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Scenario parameters for the `simulate`, `scenario` and `hedge` commands
    pub fn scenario_params(&self) -> FraResult<ScenarioParams> {
        let sim = &self.simulation;
        let contract = &self.contract;
        ScenarioParams::builder()
            .initial_rate(sim.initial_rate)
            .drift(sim.drift)
            .volatility(sim.volatility)
            .horizon(sim.horizon)
            .time_step(sim.time_step)
            .n_paths(sim.n_paths)
            .strike(contract.strike)
            .notional(contract.notional)
            .duration(contract.duration)
            .maybe_evaluation_day(contract.evaluation_day)
            .maybe_seed(self.seed)
            .build()
    }

    /// Axes of the sensitivity sweep
    pub fn sensitivity_grid(&self) -> SensitivityGrid {
        SensitivityGrid::new(
            self.grid.initial_rates.clone(),
            self.grid.volatilities.clone(),
            self.grid.maturities.clone(),
        )
    }

    /// Settings shared by every grid cell
    pub fn grid_settings(&self) -> GridSettings {
        GridSettings {
            strike: self.contract.strike,
            notional: self.contract.notional,
            duration: self.contract.duration,
            time_step: self.simulation.time_step,
            n_paths: self.simulation.n_paths,
            drift: self.simulation.drift,
            evaluation_day: self.contract.evaluation_day,
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.seed, None);
        assert_eq!(config.simulation.n_paths, 1_000);
        assert_eq!(config.contract.strike, 14_500.0);
        assert!(config.grid.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = CliConfig::from_toml_str(
            r#"
            log_level = "debug"
            seed = 42

            [simulation]
            volatility = 0.25
            horizon = 0.25

            [grid]
            maturities = [0.25]
            parallel = false
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.simulation.volatility, 0.25);
        assert_eq!(config.simulation.initial_rate, 15_000.0);
        assert_eq!(config.contract, ContractConfig::default());
        assert_eq!(config.grid.maturities, vec![0.25]);
        assert_eq!(config.grid.initial_rates.len(), 3);
        assert!(!config.grid.parallel);
    }

    #[test]
    fn test_invalid_log_level_in_toml() {
        let err = CliConfig::from_toml_str(r#"log_level = "loud""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = CliConfig::from_file(Path::new("/nonexistent/fra-hedge.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_env_overrides() {
        let config = CliConfig::default()
            .with_overrides(lookup(&[
                ("FRA_LOG_LEVEL", "WARN"),
                ("FRA_SEED", "7"),
                ("FRA_N_PATHS", "250"),
                ("FRA_STRIKE", "15000"),
                ("FRA_DURATION", "0.25"),
            ]))
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.simulation.n_paths, 250);
        assert_eq!(config.contract.strike, 15_000.0);
        assert_eq!(config.contract.duration, 0.25);
        assert_eq!(config.contract.notional, 100.0);
    }

    #[test]
    fn test_unparseable_env_value() {
        let err = CliConfig::default()
            .with_overrides(lookup(&[("FRA_N_PATHS", "many")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Env { var: "FRA_N_PATHS", .. }));
    }

    #[test]
    fn test_validation_collects_errors() {
        let mut config = CliConfig::default();
        config.simulation.n_paths = 0;
        config.grid.volatilities = vec![0.1, f64::NAN];

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 2);
                assert!(errors[0].contains("n_paths"));
                assert!(errors[1].contains("grid.volatilities"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_grid_settings_mirror_config() {
        let mut config = CliConfig::default();
        config.seed = Some(3);
        config.simulation.n_paths = 10;
        let settings = config.grid_settings();
        assert_eq!(settings.seed, Some(3));
        assert_eq!(settings.n_paths, 10);
        assert_eq!(settings.strike, config.contract.strike);
        assert_eq!(config.sensitivity_grid().len(), 27);
    }
}
