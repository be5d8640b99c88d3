use thiserror::Error;

#[derive(Error, Debug)]
pub enum KnapsackError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Simulation error: {0}")]
    Simulation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config source error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, KnapsackError>;
