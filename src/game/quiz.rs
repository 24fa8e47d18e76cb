//! file: quiz.rs
//! author: Jacob Xie
//! date: 2025/12/20 11:20:48 Saturday
//! brief: round state machine

use std::collections::HashSet;

use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use super::{Country, RoundStatus, Selection, Tile, build_deck};
use crate::error::QuizError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    Ignored,
    Selected,
    Matched,
    Mismatched,
    Won,
}

pub struct Quiz {
    deck: Vec<Tile>,
    selection: Selection,
    matched: HashSet<usize>,
    rounds_won: u32,
    status: RoundStatus,
    pair_count: usize,
    rng: StdRng,
}

impl Quiz {
    pub fn new(pair_count: usize) -> Self {
        Self::with_rng(pair_count, StdRng::from_entropy())
    }

    pub fn with_seed(pair_count: usize, seed: u64) -> Self {
        Self::with_rng(pair_count, StdRng::seed_from_u64(seed))
    }

    fn with_rng(pair_count: usize, rng: StdRng) -> Self {
        Self {
            deck: Vec::new(),
            selection: Selection::Idle,
            matched: HashSet::new(),
            rounds_won: 0,
            status: RoundStatus::Loading,
            pair_count: pair_count.max(1),
            rng,
        }
    }

    pub fn deck(&self) -> &[Tile] {
        &self.deck
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn rounds_won(&self) -> u32 {
        self.rounds_won
    }

    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    pub fn is_matched(&self, id: usize) -> bool {
        self.matched.contains(&id)
    }

    pub fn is_pending(&self, id: usize) -> bool {
        self.selection == Selection::Pending(id)
    }

    pub fn is_mismatched(&self, id: usize) -> bool {
        self.selection.is_comparing() && self.selection.contains(id)
    }

    pub fn tile(&self, id: usize) -> Option<&Tile> {
        self.deck.iter().find(|tile| tile.id == id)
    }

    fn reset(&mut self) {
        self.deck.clear();
        self.selection = Selection::Idle;
        self.matched.clear();
    }

    pub fn begin_loading(&mut self) {
        self.reset();
        self.status = RoundStatus::Loading;
    }

    pub fn fail(&mut self) {
        self.reset();
        self.status = RoundStatus::Failed;
    }

    /// Deals a fresh deck from `countries` and starts playing it.
    ///
    /// Returns the number of tiles dealt. Fails, and leaves the quiz in
    /// `Failed`, when no country has a known capital.
    pub fn start_round(&mut self, countries: &[Country]) -> Result<usize, QuizError> {
        self.reset();
        self.deck = build_deck(countries, self.pair_count, &mut self.rng);
        if self.deck.is_empty() {
            self.status = RoundStatus::Failed;
            return Err(QuizError::NoPlayableCountries);
        }

        self.status = RoundStatus::Playing;
        info!(
            tiles = self.deck.len(),
            rounds_won = self.rounds_won,
            "round started"
        );
        Ok(self.deck.len())
    }

    pub fn click(&mut self, id: usize) -> ClickOutcome {
        if self.status != RoundStatus::Playing || self.is_matched(id) || self.tile(id).is_none() {
            return ClickOutcome::Ignored;
        }

        let pending = match self.selection {
            Selection::Idle => {
                self.selection = Selection::Pending(id);
                return ClickOutcome::Selected;
            }
            Selection::Pending(pending) if pending != id => pending,
            Selection::Pending(_) | Selection::Comparing { .. } => return ClickOutcome::Ignored,
        };

        let is_match = match (self.tile(pending), self.tile(id)) {
            (Some(first), Some(second)) => first.pairs_with(second),
            _ => false,
        };

        if !is_match {
            debug!(first = pending, second = id, "tiles mismatched");
            self.selection = Selection::Comparing {
                first: pending,
                second: id,
            };
            return ClickOutcome::Mismatched;
        }

        self.matched.insert(pending);
        self.matched.insert(id);
        self.selection = Selection::Idle;
        debug!(first = pending, second = id, "tiles matched");

        if self.matched.len() == self.deck.len() {
            self.status = RoundStatus::Won;
            self.rounds_won += 1;
            info!(rounds_won = self.rounds_won, "round won");
            return ClickOutcome::Won;
        }
        ClickOutcome::Matched
    }

    /// Drops a mismatched pair once its highlight has been shown.
    pub fn clear_mismatch(&mut self) -> bool {
        if self.selection.is_comparing() {
            self.selection = Selection::Idle;
            return true;
        }
        false
    }
}
