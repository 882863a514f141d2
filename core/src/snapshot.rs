use chrono::prelude::*;
use serde::{Deserialize, Serialize};

use crate::*;

/// Session-persistable form of a [`Board`].
///
/// Field names and encodings match the session payload the frontend reads:
/// states as 0/1/2 integers, phase as a lowercase string. Every field
/// defaults when missing, so partial snapshots stay loadable.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub cards: Vec<Symbol>,
    #[serde(default)]
    pub states: Vec<CellState>,
    #[serde(default)]
    pub moves: u32,
    #[serde(default)]
    pub phase: Phase,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
}

impl Board {
    /// Serialize for storage in a session.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cards: self.deck().cards().to_vec(),
            states: self.cells().to_vec(),
            moves: self.move_count(),
            phase: self.phase(),
            start_time: self.started_at(),
        }
    }

    /// Rebuild a board from a stored snapshot. Fields are taken as-is without
    /// cross-validation; callers are trusted to hand back what
    /// [`Board::snapshot`] produced.
    pub fn restore(snapshot: Snapshot) -> Self {
        Self::from_parts(
            Deck::from_cards_unchecked(snapshot.cards),
            snapshot.states,
            snapshot.moves,
            snapshot.phase,
            snapshot.start_time,
        )
    }
}
