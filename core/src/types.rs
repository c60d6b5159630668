use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Identifier of a category on the remote trivia service.
pub type CategoryId = u32;

/// Grid position of a clue cell, `col` selects the category and `row` the clue within it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// What a clue cell currently shows, only ever moves forward.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RevealState {
    #[default]
    Hidden,
    Question,
    Answer,
}

impl RevealState {
    /// State reached by one more click, `None` once the answer is showing.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Hidden => Some(Self::Question),
            Self::Question => Some(Self::Answer),
            Self::Answer => None,
        }
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Answer)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    question: String,
    answer: String,
    reveal: RevealState,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            reveal: RevealState::Hidden,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn reveal_state(&self) -> RevealState {
        self.reveal
    }

    /// Moves to the next reveal state, returns the new state or `None` if nothing changed.
    pub(crate) fn advance(&mut self) -> Option<RevealState> {
        let next = self.reveal.next()?;
        self.reveal = next;
        Some(next)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    pub fn new(title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Self {
            title: title.into(),
            clues,
        }
    }

    /// Builds a category from plain `(question, answer)` pairs, all hidden.
    pub fn from_pairs<Q, A>(title: impl Into<String>, pairs: impl IntoIterator<Item = (Q, A)>) -> Self
    where
        Q: Into<String>,
        A: Into<String>,
    {
        let clues = pairs
            .into_iter()
            .map(|(question, answer)| Clue::new(question, answer))
            .collect();
        Self::new(title, clues)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    pub fn clue(&self, row: usize) -> Option<&Clue> {
        self.clues.get(row)
    }

    pub(crate) fn clue_mut(&mut self, row: usize) -> Option<&mut Clue> {
        self.clues.get_mut(row)
    }
}
