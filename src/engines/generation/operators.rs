use crate::config::MutationStyle;
use crate::engines::generation::population::Item;
use rand::Rng;

/// Indices of the items an iteration works on. Drawn with replacement.
pub type Triple = [usize; 3];

/// Width of the value word; bit positions are drawn from `0..VALUE_BITS`.
pub const VALUE_BITS: u32 = u64::BITS;

/// Pick three population indices uniformly, with replacement
pub fn select_triple<R: Rng>(population_len: usize, rng: &mut R) -> Triple {
    [
        rng.gen_range(0..population_len),
        rng.gen_range(0..population_len),
        rng.gen_range(0..population_len),
    ]
}

/// Cyclic shift: first takes the second's value, second the third's,
/// third the first's original value.
pub fn rotate_values(items: &mut [Item], triple: &Triple) {
    let [a, b, c] = *triple;
    let temp = items[a].value;
    items[a].value = items[b].value;
    items[b].value = items[c].value;
    items[c].value = temp;
}

/// Averaging crossover: all three take the truncated mean of their sum.
/// The sum wraps on overflow.
pub fn crossover(items: &mut [Item], triple: &Triple) {
    let total = triple
        .iter()
        .fold(0u64, |acc, &idx| acc.wrapping_add(items[idx].value));
    let mean = total / 3;

    for &idx in triple {
        items[idx].value = mean;
    }
}

/// Mutation on one random bit position, shared by the whole triple.
///
/// Returns the chosen bit.
pub fn mutate<R: Rng>(
    items: &mut [Item],
    triple: &Triple,
    style: MutationStyle,
    rng: &mut R,
) -> u32 {
    let bit = rng.gen_range(0..VALUE_BITS);
    apply_mutation(items, triple, style, bit);
    bit
}

/// Deterministic half of [`mutate`]. Repeated indices are applied once per slot.
pub fn apply_mutation(items: &mut [Item], triple: &Triple, style: MutationStyle, bit: u32) {
    let mask = 1u64 << bit;

    for &idx in triple {
        let value = &mut items[idx].value;
        *value = match style {
            MutationStyle::Complement => value.wrapping_add(!mask),
            MutationStyle::BitFlip => *value ^ mask,
        };
    }
}
