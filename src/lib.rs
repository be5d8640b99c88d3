pub mod config;
pub mod engines;
pub mod error;
pub mod report;

pub use error::{KnapsackError, Result};
