use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use observation::*;
pub use snapshot::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod observation;
mod snapshot;
mod types;

/// Number of symbol pairs dealt onto a fresh board.
pub const DEFAULT_PAIRS: u8 = 8;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub pairs: u8,
}

impl GameConfig {
    pub const fn new_unchecked(pairs: u8) -> Self {
        Self { pairs }
    }

    pub fn new(pairs: u8) -> Self {
        Self::new_unchecked(pairs.max(1))
    }

    pub const fn total_cards(&self) -> CellCount {
        cards_for_pairs(self.pairs)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_PAIRS)
    }
}

/// Card layout of one game. Immutable once dealt; every symbol sits on
/// exactly two cards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Symbol>,
}

impl Deck {
    pub fn from_cards(cards: Vec<Symbol>) -> Result<Self> {
        if cards.len() % 2 != 0 {
            return Err(GameError::OddDeckSize);
        }

        let mut counts = [0usize; 256];
        for &symbol in &cards {
            counts[symbol as usize] += 1;
        }
        if counts.iter().any(|&count| count != 0 && count != 2) {
            return Err(GameError::UnpairedSymbol);
        }

        Ok(Self::from_cards_unchecked(cards))
    }

    /// Snapshot restore path, takes the layout as-is.
    pub fn from_cards_unchecked(cards: Vec<Symbol>) -> Self {
        Self { cards }
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked((self.cards.len() / 2).min(u8::MAX as usize) as u8)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn symbol_at(&self, index: usize) -> Symbol {
        self.cards[index]
    }

    pub fn cards(&self) -> &[Symbol] {
        &self.cards
    }
}

/// Outcome of flipping a single card.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlipOutcome {
    /// The flip was not accepted and nothing changed.
    Rejected,
    /// First card of a pair-attempt turned face up.
    Revealed,
    /// Second card completed the pair.
    Matched,
    /// Second card did not match the first; both stay face up until resolved.
    Mismatched,
}

impl FlipOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        use FlipOutcome::*;
        match self {
            Rejected => false,
            Revealed => true,
            Matched => true,
            Mismatched => true,
        }
    }

    /// True only when this flip revealed a non-matching second card.
    pub const fn is_mismatch(self) -> bool {
        matches!(self, Self::Mismatched)
    }
}

/// Outcome of clearing a pending mismatch.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ResolveOutcome {
    NoChange,
    Cleared,
}

impl ResolveOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Cleared => true,
        }
    }
}
