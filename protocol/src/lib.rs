//! Wire types exchanged between the game client and the session adapter.
//!
//! Plain data only; the engine crate is deliberately not a dependency so the
//! protocol can be consumed by clients that never link the engine.

use serde::{Deserialize, Serialize};

/// Sentinel the client sends through the flip channel to clear a pending
/// mismatch instead of flipping a card.
pub const RESOLVE_MISMATCH_INDEX: i64 = -1;

/// Game phase as it appears on the wire.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Setup,
    Memorizing,
    Playing,
}

impl Default for Phase {
    fn default() -> Self {
        Self::Setup
    }
}

/// One client request against a session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Flip the card at `index`, or resolve a pending mismatch when the
    /// index is [`RESOLVE_MISMATCH_INDEX`].
    Flip { index: i64 },
    /// Throw the board away and deal a fresh one.
    Restart,
    /// Enter the preview phase with every card face up.
    StartMemorizing,
    /// Hide the cards and start accepting flips.
    StartPlaying,
}

/// Post-operation board view returned to the client.
///
/// `cards` carries every symbol, hidden cells included; rendering keeps them
/// face down. `states` uses the 0/1/2 hidden/revealed/matched encoding.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameView {
    pub cards: Vec<u8>,
    pub states: Vec<u8>,
    pub moves: u32,
    pub win: bool,
    pub mismatch: bool,
    pub phase: Phase,
}
