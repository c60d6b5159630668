use alloc::vec::Vec;
use ndarray::Array2;

use crate::*;

/// What a single grid cell displays.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellView<'a> {
    /// No clue at this position, the category is shorter than the board.
    Empty,
    Hidden,
    Question(&'a str),
    Answer(&'a str),
}

impl<'a> CellView<'a> {
    pub const HIDDEN_TEXT: &'static str = "?";

    pub fn of(clue: Option<&'a Clue>) -> Self {
        let Some(clue) = clue else {
            return Self::Empty;
        };

        match clue.reveal_state() {
            RevealState::Hidden => Self::Hidden,
            RevealState::Question => Self::Question(clue.question()),
            RevealState::Answer => Self::Answer(clue.answer()),
        }
    }

    pub const fn text(&self) -> &'a str {
        match *self {
            Self::Empty => "",
            Self::Hidden => Self::HIDDEN_TEXT,
            Self::Question(text) | Self::Answer(text) => text,
        }
    }

    /// Only cells backed by a clue react to clicks.
    pub const fn is_clickable(&self) -> bool {
        !matches!(self, Self::Empty)
    }
}

/// Render model of the board: one header per category and a `rows x categories` cell grid.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardGrid<'a> {
    headers: Vec<&'a str>,
    cells: Array2<CellView<'a>>,
}

impl<'a> BoardGrid<'a> {
    pub fn build(store: &'a BoardStore, rows: usize) -> Self {
        let headers: Vec<&str> = store.titles().collect();
        let cells = Array2::from_shape_fn((rows, headers.len()), |(row, col)| {
            CellView::of(store.get(CellPos::new(row, col)))
        });
        Self { headers, cells }
    }

    pub fn headers(&self) -> &[&'a str] {
        &self.headers
    }

    pub fn row_count(&self) -> usize {
        self.cells.nrows()
    }

    pub fn column_count(&self) -> usize {
        self.cells.ncols()
    }

    pub fn cell(&self, pos: CellPos) -> Option<&CellView<'a>> {
        self.cells.get((pos.row, pos.col))
    }

    /// Cells of one row, left to right, with their positions.
    pub fn iter_row(&self, row: usize) -> impl Iterator<Item = (CellPos, CellView<'a>)> + '_ {
        (0..self.column_count()).filter_map(move |col| {
            let pos = CellPos::new(row, col);
            self.cell(pos).map(|&view| (pos, view))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn grid_has_header_per_category_and_fixed_rows() {
        let store = BoardStore::from(vec![
            Category::from_pairs("Math", [("2+2", "4"), ("1+1", "2")]),
            Category::from_pairs("Literature", [("Hamlet Author", "Shakespeare")]),
        ]);

        let grid = BoardGrid::build(&store, 5);

        assert_eq!(grid.headers(), &["Math", "Literature"]);
        assert_eq!(grid.row_count(), 5);
        assert_eq!(grid.column_count(), 2);
    }

    #[test]
    fn cells_show_placeholder_or_blank() {
        let store = BoardStore::from(vec![
            Category::from_pairs("Math", [("2+2", "4"), ("1+1", "2")]),
            Category::from_pairs("Literature", [("Hamlet Author", "Shakespeare")]),
        ]);

        let grid = BoardGrid::build(&store, 3);

        assert_eq!(grid.cell(CellPos::new(0, 0)), Some(&CellView::Hidden));
        assert_eq!(grid.cell(CellPos::new(1, 1)), Some(&CellView::Empty));
        assert_eq!(grid.cell(CellPos::new(2, 0)).map(CellView::text), Some(""));
        assert!(grid.cell(CellPos::new(3, 0)).is_none());

        let row: Vec<_> = grid.iter_row(0).map(|(_, view)| view.text()).collect();
        assert_eq!(row, vec!["?", "?"]);
        assert!(!grid.cell(CellPos::new(1, 1)).unwrap().is_clickable());
    }

    #[test]
    fn revealed_clues_show_their_text() {
        let mut store = BoardStore::from(vec![Category::from_pairs(
            "Literature",
            [("Hamlet Author", "Shakespeare"), ("Bell Jar Author", "Plath")],
        )]);
        reveal_at(&mut store, CellPos::new(0, 0));
        reveal_at(&mut store, CellPos::new(1, 0));
        reveal_at(&mut store, CellPos::new(1, 0));

        let grid = BoardGrid::build(&store, 2);

        assert_eq!(
            grid.cell(CellPos::new(0, 0)),
            Some(&CellView::Question("Hamlet Author"))
        );
        assert_eq!(
            grid.cell(CellPos::new(1, 0)),
            Some(&CellView::Answer("Plath"))
        );
    }

    #[test]
    fn rows_beyond_clue_count_are_dropped_when_board_is_shorter() {
        let store = BoardStore::from(vec![Category::from_pairs(
            "Math",
            [("2+2", "4"), ("1+1", "2"), ("3+3", "6")],
        )]);

        let grid = BoardGrid::build(&store, 2);

        assert_eq!(grid.row_count(), 2);
        assert!(grid.cell(CellPos::new(2, 0)).is_none());
    }

    #[test]
    fn iter_row_positions_address_the_clue_a_click_reveals() {
        let mut store = BoardStore::from(vec![
            Category::from_pairs("Math", [("2+2", "4"), ("1+1", "2"), ("3+3", "6")]),
            Category::from_pairs("Literature", [("Hamlet Author", "Shakespeare")]),
            Category::from_pairs("Science", [("H2O", "Water"), ("NaCl", "Salt")]),
        ]);
        let rows = 3;

        for row in 0..rows {
            let positions: Vec<_> = BoardGrid::build(&store, rows)
                .iter_row(row)
                .map(|(pos, view)| (pos, view.is_clickable()))
                .collect();
            assert_eq!(positions.len(), 3);

            for (col, (pos, clickable)) in positions.into_iter().enumerate() {
                assert_eq!(pos, CellPos::new(row, col));
                assert_eq!(clickable, store.get(pos).is_some());

                let before = store.clone();
                let outcome = reveal_at(&mut store, pos);
                assert_eq!(outcome.has_update(), clickable);

                let after_grid = BoardGrid::build(&store, rows);
                let before_grid = BoardGrid::build(&before, rows);
                for other_row in 0..rows {
                    for other_col in 0..3 {
                        let other = CellPos::new(other_row, other_col);
                        if other == pos && clickable {
                            assert_eq!(
                                after_grid.cell(other).map(CellView::text),
                                store.get(pos).map(Clue::question)
                            );
                        } else {
                            assert_eq!(after_grid.cell(other), before_grid.cell(other));
                        }
                    }
                }
            }
        }
    }
}
