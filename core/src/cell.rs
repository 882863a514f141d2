use serde::{Deserialize, Serialize};

/// Player-visible state of a single board cell.
///
/// Serialized as the integers 0/1/2 so snapshots keep the encoding the
/// frontend already renders from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", from = "u8")]
pub enum CellState {
    Hidden,
    Revealed,
    Matched,
}

impl CellState {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }

    pub const fn is_matched(self) -> bool {
        matches!(self, Self::Matched)
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Hidden
    }
}

impl From<CellState> for u8 {
    fn from(state: CellState) -> u8 {
        match state {
            CellState::Hidden => 0,
            CellState::Revealed => 1,
            CellState::Matched => 2,
        }
    }
}

impl From<u8> for CellState {
    // unknown values decode as Hidden
    fn from(raw: u8) -> CellState {
        match raw {
            1 => CellState::Revealed,
            2 => CellState::Matched,
            _ => CellState::Hidden,
        }
    }
}
