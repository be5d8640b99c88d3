use serde::{Deserialize, Serialize};

/// Starting values of the canonical ten-item population, by id.
pub const DEFAULT_VALUES: [u64; 10] = [4, 8, 1, 7, 1, 3, 7, 9, 2, 4];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: usize,
    pub value: u64,
    /// Result of the latest fitness roll
    pub fit: bool,
}

impl Item {
    pub fn new(id: usize, value: u64) -> Self {
        Self { id, value, fit: false }
    }
}

/// Fixed-size population, mutated in place for the whole run.
pub type Population = Vec<Item>;

pub fn create_items() -> Population {
    from_values(&DEFAULT_VALUES)
}

/// Build a population whose ids follow the position of each value.
pub fn from_values(values: &[u64]) -> Population {
    values
        .iter()
        .enumerate()
        .map(|(id, &value)| Item::new(id, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_items() {
        let items = create_items();

        assert_eq!(items.len(), 10);
        assert_eq!(items[0], Item::new(0, 4));
        assert_eq!(items[7], Item::new(7, 9));
        assert!(items.iter().enumerate().all(|(i, item)| item.id == i && !item.fit));
    }
}
