use alloc::string::{String, ToString};

use crate::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed { state: RevealState, text: String },
}

impl RevealOutcome {
    pub const fn has_update(&self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Revealed { .. } => true,
        }
    }

    /// Text the clicked cell shows after the reveal, if it changed.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::NoChange => None,
            Self::Revealed { text, .. } => Some(text.as_str()),
        }
    }
}

/// Advances one clue by a single click.
///
/// Hidden clues show their question, questions turn into answers, answers stay put.
pub fn reveal_clue(clue: &mut Clue) -> RevealOutcome {
    let Some(state) = clue.advance() else {
        return RevealOutcome::NoChange;
    };

    // `advance` only ever lands on `Question` or `Answer`.
    let text = if state == RevealState::Question {
        clue.question()
    } else {
        clue.answer()
    };

    RevealOutcome::Revealed {
        state,
        text: text.to_string(),
    }
}

/// Handles a click on the cell at `pos`; positions without a clue are ignored.
pub fn reveal_at(store: &mut BoardStore, pos: CellPos) -> RevealOutcome {
    match store.get_mut(pos) {
        Some(clue) => reveal_clue(clue),
        None => {
            log::trace!("click on empty cell {:?}", pos);
            RevealOutcome::NoChange
        }
    }
}
