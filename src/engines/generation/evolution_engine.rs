use crate::config::{ConfigSection, SimulationConfig};
use crate::engines::generation::{
    fitness::{evaluate_population, fit_enough},
    operators::{crossover, mutate, rotate_values, select_triple, Triple},
    population::{from_values, Item, Population},
};
use crate::error::KnapsackError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

pub struct SimulationEngine {
    config: SimulationConfig,
    items: Population,
    rng: StdRng,
}

/// Final state of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    pub items: Vec<Item>,
    pub iterations: usize,
    /// Fit items at the last evaluation
    pub fit_count: usize,
    /// Stopped by `max_iterations` rather than the fitness check
    pub capped: bool,
}

pub trait ProgressCallback {
    fn on_iteration_start(&mut self, iteration: usize);
    fn on_operators_applied(&mut self, iteration: usize, triple: &Triple, bit: u32);
    fn on_fitness_evaluated(
        &mut self,
        iteration: usize,
        fit_count: usize,
        population_size: usize,
    );
}

impl<C: ProgressCallback + ?Sized> ProgressCallback for &mut C {
    fn on_iteration_start(&mut self, iteration: usize) {
        (**self).on_iteration_start(iteration);
    }

    fn on_operators_applied(&mut self, iteration: usize, triple: &Triple, bit: u32) {
        (**self).on_operators_applied(iteration, triple, bit);
    }

    fn on_fitness_evaluated(
        &mut self,
        iteration: usize,
        fit_count: usize,
        population_size: usize,
    ) {
        (**self).on_fitness_evaluated(iteration, fit_count, population_size);
    }
}

impl SimulationEngine {
    pub fn new(config: SimulationConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let items = from_values(&config.initial_values);

        Self { config, items, rng }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Run the simulation loop.
    ///
    /// Each iteration draws a fresh triple and applies rotate, crossover and
    /// mutate to it before every item's fitness is re-rolled. The operators
    /// always run at least once. The loop ends when `fit_threshold` items are
    /// fit, or after `max_iterations` when a cap is configured.
    pub fn run<C: ProgressCallback>(
        &mut self,
        mut callback: C,
    ) -> Result<SimulationOutcome, KnapsackError> {
        let population_size = self.items.len();
        if population_size < 3 {
            return Err(KnapsackError::Simulation(format!(
                "Population of {} is too small to select a triple",
                population_size
            )));
        }
        // A threshold above the population size would never be reached
        self.config.validate()?;

        log::info!(
            "Starting simulation: {} items, fit threshold {}, mutation {:?}",
            population_size, self.config.fit_threshold, self.config.mutation_style
        );

        let mut iteration = 0;
        let (fit_count, capped) = loop {
            iteration += 1;
            callback.on_iteration_start(iteration);

            let triple = select_triple(population_size, &mut self.rng);
            rotate_values(&mut self.items, &triple);
            crossover(&mut self.items, &triple);
            let bit = mutate(&mut self.items, &triple, self.config.mutation_style, &mut self.rng);
            callback.on_operators_applied(iteration, &triple, bit);

            let fit_count = evaluate_population(&mut self.items, &mut self.rng);
            callback.on_fitness_evaluated(iteration, fit_count, population_size);

            if fit_enough(fit_count, self.config.fit_threshold) {
                break (fit_count, false);
            }

            if self.config.max_iterations == Some(iteration) {
                log::warn!(
                    "Stopped after {} iterations with only {}/{} items fit",
                    iteration, fit_count, population_size
                );
                break (fit_count, true);
            }
        };

        log::info!(
            "Simulation finished after {} iterations ({}/{} fit)",
            iteration, fit_count, population_size
        );

        Ok(SimulationOutcome {
            items: self.items.clone(),
            iterations: iteration,
            fit_count,
            capped,
        })
    }
}
