pub mod population;
pub mod operators;
pub mod fitness;
pub mod evolution_engine;
pub mod progress;

pub use population::{Item, Population, create_items};
pub use operators::Triple;
pub use evolution_engine::{SimulationEngine, SimulationOutcome, ProgressCallback};
pub use progress::{ConsoleProgressCallback, NoopProgressCallback};
