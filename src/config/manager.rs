use super::{
    output::OutputConfig,
    simulation::SimulationConfig,
    traits::ConfigSection,
};
use crate::error::KnapsackError;
use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

pub const ENV_PREFIX: &str = "KNAPSACK";
pub const DEFAULT_CONFIG_FILE: &str = "knapsack.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub simulation: SimulationConfig,
    pub output: OutputConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), KnapsackError> {
        self.simulation.validate()?;
        self.output.validate()?;
        Ok(())
    }
}

pub struct ConfigManager {
    config: AppConfig,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Layer an optional TOML file and `KNAPSACK_*` variables over the defaults.
    ///
    /// Section keys are separated by a double underscore, e.g.
    /// `KNAPSACK_SIMULATION__SEED=7`.
    pub fn load_from_file<P: AsRef<Path>>(path: P, required: bool) -> Result<Self, KnapsackError> {
        Self::load_with_env(path, required, None)
    }

    /// Same as [`ConfigManager::load_from_file`], but reads environment
    /// overrides from `env` instead of the process environment when given.
    pub fn load_with_env<P: AsRef<Path>>(
        path: P,
        required: bool,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, KnapsackError> {
        let path = path.as_ref();
        log::debug!("Loading configuration from {} (required: {})", path.display(), required);

        let environment = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(env.map(|vars| vars.into_iter().collect()));

        let config: AppConfig = Config::builder()
            .add_source(File::from(path).required(required))
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        config.validate()?;
        log::debug!(
            "Validated [{}] and [{}] sections",
            SimulationConfig::section_name(),
            OutputConfig::section_name()
        );

        Ok(Self { config })
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), KnapsackError> {
        let toml_str = toml::to_string_pretty(&self.config)
            .map_err(|e| KnapsackError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)?;

        Ok(())
    }

    pub fn get(&self) -> &AppConfig {
        &self.config
    }

    pub fn update<F>(&mut self, f: F) -> Result<(), KnapsackError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.config.clone();
        f(&mut candidate);
        candidate.validate()?;
        self.config = candidate;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
