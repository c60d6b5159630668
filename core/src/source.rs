use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::future::Future;
use futures_util::future::try_join_all;
use serde::Deserialize;

use crate::*;

/// Somewhere categories can be read from, keyed by id.
pub trait CategorySource {
    fn fetch_category(&self, id: CategoryId) -> impl Future<Output = Result<Category>>;
}

/// Fetches every id concurrently, the result keeps the order of `ids`.
///
/// The first failing category fails the whole board.
pub async fn fetch_board<S: CategorySource>(source: &S, ids: &[CategoryId]) -> Result<Vec<Category>> {
    let categories = try_join_all(ids.iter().map(|&id| source.fetch_category(id))).await?;
    log::debug!("fetched {} categories", categories.len());
    Ok(categories)
}

#[derive(Deserialize)]
struct CategoryPayload {
    title: String,
    clues: Vec<CluePayload>,
}

#[derive(Deserialize)]
struct CluePayload {
    #[serde(default)]
    question: Option<ClueText>,
    #[serde(default)]
    answer: Option<ClueText>,
}

/// Clue text as the service sends it, some answers are bare numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum ClueText {
    Text(String),
    Number(serde_json::Number),
}

impl ClueText {
    fn into_string(text: Option<Self>) -> String {
        match text {
            Some(Self::Text(text)) => text,
            Some(Self::Number(number)) => number.to_string(),
            None => String::new(),
        }
    }
}

/// Turns a category payload into a [`Category`] with every clue hidden.
pub fn parse_category(id: CategoryId, body: &str) -> Result<Category> {
    let payload: CategoryPayload =
        serde_json::from_str(body).map_err(|err| GameError::MalformedCategory {
            id,
            reason: err.to_string(),
        })?;

    let clues = payload
        .clues
        .into_iter()
        .map(|clue| {
            Clue::new(
                ClueText::into_string(clue.question),
                ClueText::into_string(clue.answer),
            )
        })
        .collect();
    Ok(Category::new(payload.title, clues))
}
