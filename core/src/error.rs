use alloc::string::String;
use thiserror::Error;

use crate::CategoryId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Could not fetch category {id}: {reason}")]
    Fetch { id: CategoryId, reason: String },
    #[error("Category {id} has a malformed payload: {reason}")]
    MalformedCategory { id: CategoryId, reason: String },
}

impl GameError {
    /// Category id the failed request was made for.
    pub const fn category_id(&self) -> CategoryId {
        match self {
            Self::Fetch { id, .. } | Self::MalformedCategory { id, .. } => *id,
        }
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
