use anyhow::Context;
use knapsack_ga::config::manager::{ConfigManager, DEFAULT_CONFIG_FILE};
use knapsack_ga::engines::generation::{ConsoleProgressCallback, SimulationEngine};
use knapsack_ga::report::write_report;
use std::env;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // An explicit path must exist; the default one is optional
    let (path, required) = match env::args().nth(1) {
        Some(path) => (path, true),
        None => (DEFAULT_CONFIG_FILE.to_string(), false),
    };

    let manager = ConfigManager::load_from_file(&path, required)
        .with_context(|| format!("Failed to load configuration from {}", path))?;
    let config = manager.get();

    let mut engine = SimulationEngine::new(config.simulation.clone());
    let outcome = engine
        .run(ConsoleProgressCallback)
        .context("Simulation failed")?;

    let stdout = std::io::stdout();
    write_report(&mut stdout.lock(), &outcome, config.output.format)
        .context("Failed to write report")?;

    Ok(())
}
