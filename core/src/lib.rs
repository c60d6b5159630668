#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use error::*;
pub use game::*;
pub use picker::*;
pub use render::*;
pub use reveal::*;
pub use source::*;
pub use types::*;

mod board;
mod error;
mod game;
mod picker;
mod render;
mod reveal;
mod source;
mod types;

/// Upper bound for both the number of categories and the number of clue rows on a board.
pub const MAX_BOARD_SIDE: usize = 32;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Categories fetched for every game, one per column.
    pub categories: usize,
    /// Clue rows shown per category, regardless of how many clues a category has.
    pub rows: usize,
    /// Largest category id that may be picked, ids start at 1.
    pub max_id: CategoryId,
}

impl GameConfig {
    pub const DEFAULT_CATEGORIES: usize = 6;
    pub const DEFAULT_ROWS: usize = 5;
    pub const DEFAULT_MAX_ID: CategoryId = 100;

    pub const fn new_unchecked(categories: usize, rows: usize, max_id: CategoryId) -> Self {
        Self {
            categories,
            rows,
            max_id,
        }
    }

    pub fn new(categories: usize, rows: usize, max_id: CategoryId) -> Self {
        let categories = categories.clamp(1, MAX_BOARD_SIDE);
        let rows = rows.clamp(1, MAX_BOARD_SIDE);
        let max_id = max_id.max(1);
        Self::new_unchecked(categories, rows, max_id)
    }

    pub const fn total_cells(&self) -> usize {
        self.categories * self.rows
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(
            Self::DEFAULT_CATEGORIES,
            Self::DEFAULT_ROWS,
            Self::DEFAULT_MAX_ID,
        )
    }
}
