use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Valid transitions for one board lifecycle:
/// - Setup -> Memorizing
/// - Memorizing -> Playing
///
/// Both transitions are unconditional; keeping them in order is the delivery
/// layer's concern. There is no way out of Playing except discarding the
/// board for a freshly dealt one.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Board dealt, nothing shown yet
    Setup,
    /// Preview with every card face up
    Memorizing,
    /// Cards hidden, flips accepted
    Playing,
}

impl Phase {
    pub const fn is_setup(self) -> bool {
        matches!(self, Self::Setup)
    }

    pub const fn is_memorizing(self) -> bool {
        matches!(self, Self::Memorizing)
    }

    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::Setup
    }
}

/// Represents one game from deal to win.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    deck: Deck,
    cells: Vec<CellState>,
    move_count: u32,
    phase: Phase,
    started_at: Option<DateTime<Utc>>,
}

impl Board {
    pub fn new(deck: Deck) -> Self {
        let cells = vec![CellState::Hidden; deck.len()];
        Self {
            deck,
            cells,
            move_count: 0,
            phase: Default::default(),
            started_at: None,
        }
    }

    pub fn generate(config: GameConfig, generator: impl DeckGenerator) -> Self {
        Self::new(generator.generate(config))
    }

    pub(crate) fn from_parts(
        deck: Deck,
        cells: Vec<CellState>,
        move_count: u32,
        phase: Phase,
        started_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            deck,
            cells,
            move_count,
            phase,
            started_at,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell_at(&self, index: usize) -> CellState {
        self.cells[index]
    }

    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// When the memorizing preview started, if it has
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn can_flip(&self) -> bool {
        self.phase.is_playing()
    }

    pub fn is_win(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_matched())
    }

    /// Show every card for the preview and start the clock. Calling it again
    /// restarts the clock.
    pub fn begin_memorizing(&mut self) {
        let now = Utc::now();
        log::debug!("memorizing since {}", now);
        self.phase = Phase::Memorizing;
        self.started_at.replace(now);
    }

    /// Hide every card and hand the board to the player.
    pub fn begin_playing(&mut self) {
        self.phase = Phase::Playing;
        self.cells.fill(CellState::Hidden);
        self.move_count = 0;
    }

    /// Turn the card at `index` face up and, when it is the second card of a
    /// pair-attempt, judge the pair. Wrong phase, out-of-range index, a
    /// non-hidden cell, or two cards already face up all degrade to a
    /// no-op `Rejected`.
    pub fn flip(&mut self, index: usize) -> FlipOutcome {
        use FlipOutcome::*;

        if !self.can_flip() {
            return Rejected;
        }
        if index >= self.cells.len() {
            return Rejected;
        }
        if !self.cells[index].is_hidden() {
            return Rejected;
        }
        if self.revealed_indices().len() == 2 {
            return Rejected;
        }

        self.cells[index] = CellState::Revealed;

        let revealed = self.revealed_indices();
        let (first, second) = match revealed.as_slice() {
            &[first, second] => (first, second),
            _ => return Revealed,
        };

        // second card of the attempt, exactly one move either way
        self.move_count += 1;
        if self.deck.symbol_at(first) == self.deck.symbol_at(second) {
            self.cells[first] = CellState::Matched;
            self.cells[second] = CellState::Matched;
            log::debug!("matched {} and {}, move {}", first, second, self.move_count);
            Matched
        } else {
            log::debug!(
                "mismatch between {} and {}, move {}",
                first,
                second,
                self.move_count
            );
            Mismatched
        }
    }

    /// Turn a pending mismatched pair back face down. Operates on whatever is
    /// currently face up, no index needed; anything other than exactly two
    /// differing cards is a no-op.
    pub fn resolve_mismatch(&mut self) -> ResolveOutcome {
        let revealed = self.revealed_indices();
        let (first, second) = match revealed.as_slice() {
            &[first, second] => (first, second),
            _ => return ResolveOutcome::NoChange,
        };

        if self.deck.symbol_at(first) == self.deck.symbol_at(second) {
            return ResolveOutcome::NoChange;
        }

        self.cells[first] = CellState::Hidden;
        self.cells[second] = CellState::Hidden;
        ResolveOutcome::Cleared
    }

    /// Cells face up but not yet matched
    fn revealed_indices(&self) -> SmallVec<[usize; 2]> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_revealed())
            .map(|(index, _)| index)
            .collect()
    }
}
