use alloc::vec::Vec;
use core::mem;
use serde::{Deserialize, Serialize};

use crate::*;

/// Categories of the current game, column order is selection order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardStore {
    categories: Vec<Category>,
}

impl BoardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swaps in a whole new board, handing back the previous one.
    pub fn replace(&mut self, categories: Vec<Category>) -> Vec<Category> {
        mem::replace(&mut self.categories, categories)
    }

    pub fn clear(&mut self) {
        self.categories.clear();
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(Category::title)
    }

    pub fn get(&self, pos: CellPos) -> Option<&Clue> {
        self.categories.get(pos.col)?.clue(pos.row)
    }

    pub fn get_mut(&mut self, pos: CellPos) -> Option<&mut Clue> {
        self.categories.get_mut(pos.col)?.clue_mut(pos.row)
    }
}

impl From<Vec<Category>> for BoardStore {
    fn from(categories: Vec<Category>) -> Self {
        Self { categories }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn sample() -> BoardStore {
        BoardStore::from(vec![
            Category::from_pairs("Math", [("2+2", "4"), ("1+1", "2")]),
            Category::from_pairs("Literature", [("Hamlet Author", "Shakespeare")]),
        ])
    }

    #[test]
    fn get_maps_column_to_category_and_row_to_clue() {
        let store = sample();

        assert_eq!(store.get(CellPos::new(1, 0)).map(Clue::question), Some("1+1"));
        assert_eq!(
            store.get(CellPos::new(0, 1)).map(Clue::answer),
            Some("Shakespeare")
        );
    }

    #[test]
    fn get_out_of_range_is_absent() {
        let mut store = sample();

        assert!(store.get(CellPos::new(1, 1)).is_none());
        assert!(store.get(CellPos::new(0, 2)).is_none());
        assert!(store.get_mut(CellPos::new(7, 0)).is_none());
    }

    #[test]
    fn replace_swaps_whole_board() {
        let mut store = sample();

        let previous = store.replace(vec![Category::from_pairs("Science", [("H2O", "Water")])]);

        assert_eq!(previous.len(), 2);
        assert_eq!(store.len(), 1);
        assert_eq!(store.titles().next(), Some("Science"));

        store.clear();
        assert!(store.is_empty());
    }
}
