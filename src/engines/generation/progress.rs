use super::evolution_engine::ProgressCallback;
use super::operators::Triple;

/// Logs each iteration through the `log` facade.
pub struct ConsoleProgressCallback;

impl ProgressCallback for ConsoleProgressCallback {
    fn on_iteration_start(&mut self, iteration: usize) {
        log::trace!("Iteration {} starting", iteration);
    }

    fn on_operators_applied(&mut self, iteration: usize, triple: &Triple, bit: u32) {
        log::debug!(
            "Iteration {}: rotated, crossed and mutated {:?} (bit {})",
            iteration, triple, bit
        );
    }

    fn on_fitness_evaluated(
        &mut self,
        iteration: usize,
        fit_count: usize,
        population_size: usize,
    ) {
        log::debug!(
            "Iteration {}: {}/{} items fit",
            iteration, fit_count, population_size
        );
    }
}

pub struct NoopProgressCallback;

impl ProgressCallback for NoopProgressCallback {
    fn on_iteration_start(&mut self, _iteration: usize) {}

    fn on_operators_applied(&mut self, _iteration: usize, _triple: &Triple, _bit: u32) {}

    fn on_fitness_evaluated(
        &mut self,
        _iteration: usize,
        _fit_count: usize,
        _population_size: usize,
    ) {
    }
}
