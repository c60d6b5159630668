use alloc::vec::Vec;

use crate::*;

pub trait CategoryPicker {
    fn pick(self, config: GameConfig) -> Vec<CategoryId>;
}

/// Picks `config.categories` ids uniformly from `1..=config.max_id`.
///
/// Picks are independent, so the same id can show up more than once on a board.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomCategoryPicker {
    seed: u64,
}

impl RandomCategoryPicker {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl CategoryPicker for RandomCategoryPicker {
    fn pick(self, config: GameConfig) -> Vec<CategoryId> {
        use rand::prelude::*;

        let max_id = config.max_id.max(1);
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let ids: Vec<CategoryId> = (0..config.categories)
            .map(|_| rng.random_range(1..=max_id))
            .collect();

        log::debug!("picked category ids {:?} (seed {})", ids, self.seed);
        ids
    }
}

/// Always hands out the given ids, cycling when the board needs more.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedCategoryPicker {
    ids: Vec<CategoryId>,
}

impl FixedCategoryPicker {
    pub fn new(ids: Vec<CategoryId>) -> Self {
        Self { ids }
    }
}

impl CategoryPicker for FixedCategoryPicker {
    fn pick(self, config: GameConfig) -> Vec<CategoryId> {
        if self.ids.is_empty() {
            log::warn!("fixed picker has no ids, board will be empty");
            return Vec::new();
        }
        self.ids.iter().copied().cycle().take(config.categories).collect()
    }
}
