use super::traits::ConfigSection;
use crate::engines::generation::population::DEFAULT_VALUES;
use crate::error::KnapsackError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Fixed RNG seed; entropy-seeded when absent
    pub seed: Option<u64>,
    pub initial_values: Vec<u64>,
    pub fit_threshold: usize,
    pub max_iterations: Option<usize>,
    pub mutation_style: MutationStyle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationStyle {
    /// Adds the complement of the chosen bit mask (wrapping)
    #[default]
    Complement,
    /// XORs the chosen bit
    BitFlip,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            initial_values: DEFAULT_VALUES.to_vec(),
            fit_threshold: 5,
            max_iterations: None,
            mutation_style: MutationStyle::Complement,
        }
    }
}

impl ConfigSection for SimulationConfig {
    fn section_name() -> &'static str {
        "simulation"
    }

    fn validate(&self) -> Result<(), KnapsackError> {
        if self.initial_values.len() < 3 {
            return Err(KnapsackError::Configuration(
                "Population needs at least 3 initial values".to_string()
            ));
        }
        if self.fit_threshold == 0 || self.fit_threshold > self.initial_values.len() {
            return Err(KnapsackError::Configuration(format!(
                "Fit threshold must be between 1 and {}",
                self.initial_values.len()
            )));
        }
        if self.max_iterations == Some(0) {
            return Err(KnapsackError::Configuration(
                "Max iterations must be at least 1 when set".to_string()
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.initial_values.len(), 10);
        assert_eq!(config.fit_threshold, 5);
    }

    #[test]
    fn test_rejects_small_population() {
        let config = SimulationConfig {
            initial_values: vec![1, 2],
            fit_threshold: 1,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(KnapsackError::Configuration(_))));
    }

    #[test]
    fn test_rejects_threshold_out_of_range() {
        let mut config = SimulationConfig::default();
        config.fit_threshold = 0;
        assert!(config.validate().is_err());

        config.fit_threshold = 11;
        assert!(config.validate().is_err());

        config.fit_threshold = 10;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_iteration_cap() {
        let config = SimulationConfig {
            max_iterations: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
