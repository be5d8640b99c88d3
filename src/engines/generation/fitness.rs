use crate::engines::generation::population::Item;
use rand::Rng;

/// Fitness is a fair coin flip, independent of the item's value.
pub fn compute_fitness<R: Rng>(item: &mut Item, rng: &mut R) {
    item.fit = rng.gen_bool(0.5);
}

/// Re-roll every item and return how many came up fit.
///
/// All items are rolled even once the count is decided, so the number of
/// draws per evaluation is always the population size.
pub fn evaluate_population<R: Rng>(items: &mut [Item], rng: &mut R) -> usize {
    items
        .iter_mut()
        .map(|item| {
            compute_fitness(item, rng);
            item.fit
        })
        .filter(|&fit| fit)
        .count()
}

pub fn fit_enough(fit_count: usize, threshold: usize) -> bool {
    fit_count >= threshold
}
