use alloc::vec::Vec;
use core::future::Future;

use crate::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GameStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(GameError),
}

impl GameStatus {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn error(&self) -> Option<&GameError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// One board load in flight, tagged with the generation it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Round {
    generation: u64,
    ids: Vec<CategoryId>,
}

impl Round {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn ids(&self) -> &[CategoryId] {
        &self.ids
    }

    /// Fetches this round's categories in selection order.
    pub fn fetch<'a, S: CategorySource>(
        &'a self,
        source: &'a S,
    ) -> impl Future<Output = Result<Vec<Category>>> + 'a {
        fetch_board(source, &self.ids)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The board now holds the round's categories.
    Committed,
    /// The round failed, the board stays empty.
    Failed,
    /// A newer round was started meanwhile, the result was dropped.
    Stale,
}

impl CommitOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Committed | Self::Failed => true,
            Self::Stale => false,
        }
    }
}

/// Owns the board of the current game and decides which load gets to fill it.
#[derive(Clone, Debug, PartialEq)]
pub struct GameController {
    config: GameConfig,
    store: BoardStore,
    status: GameStatus,
    generation: u64,
}

impl GameController {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            store: BoardStore::new(),
            status: GameStatus::Idle,
            generation: 0,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    pub fn store(&self) -> &BoardStore {
        &self.store
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Begins a new game: wipes the board, picks the categories and supersedes any load in flight.
    pub fn start_round(&mut self, picker: impl CategoryPicker) -> Round {
        self.generation = self.generation.wrapping_add(1);
        self.store.clear();
        self.status = GameStatus::Loading;

        let ids = picker.pick(self.config);
        log::debug!("round {} started with ids {:?}", self.generation, ids);
        Round {
            generation: self.generation,
            ids,
        }
    }

    /// Stores the outcome of a round, unless a newer round has started since.
    pub fn commit_round(
        &mut self,
        generation: u64,
        result: Result<Vec<Category>>,
    ) -> CommitOutcome {
        if !self.is_current(generation) {
            log::warn!(
                "dropping result of round {}, round {} is current",
                generation,
                self.generation
            );
            return CommitOutcome::Stale;
        }

        match result {
            Ok(categories) => {
                log::debug!("round {} ready with {} categories", generation, categories.len());
                self.store.replace(categories);
                self.status = GameStatus::Ready;
                CommitOutcome::Committed
            }
            Err(err) => {
                log::warn!("round {} failed: {}", generation, err);
                self.store.clear();
                self.status = GameStatus::Failed(err);
                CommitOutcome::Failed
            }
        }
    }

    /// Starts a round and fetches it to completion against `source`.
    pub async fn play_round<S: CategorySource>(
        &mut self,
        source: &S,
        picker: impl CategoryPicker,
    ) -> CommitOutcome {
        let round = self.start_round(picker);
        let result = round.fetch(source).await;
        self.commit_round(round.generation(), result)
    }

    pub fn reveal(&mut self, pos: CellPos) -> RevealOutcome {
        reveal_at(&mut self.store, pos)
    }

    pub fn grid(&self) -> BoardGrid<'_> {
        BoardGrid::build(&self.store, self.config.rows)
    }
}
