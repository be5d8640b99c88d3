pub mod traits;
pub mod simulation;
pub mod output;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use simulation::{SimulationConfig, MutationStyle};
pub use output::{OutputConfig, OutputFormat};
pub use traits::ConfigSection;
