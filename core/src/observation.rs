use serde::{Deserialize, Serialize};

use crate::*;

/// Client-visible projection of a board that withholds the symbols of cards
/// the player has not earned sight of.
///
/// During [`Phase::Memorizing`] every symbol is visible, that being the point
/// of the preview; in any other phase only `Revealed` and `Matched` cells
/// carry their symbol.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub cards: Vec<Option<Symbol>>,
    pub states: Vec<CellState>,
    pub moves: u32,
    pub phase: Phase,
}

impl Observation {
    pub fn from_board(board: &Board) -> Self {
        let show_all = board.phase().is_memorizing();
        let cards = board
            .cells()
            .iter()
            .enumerate()
            .map(|(index, cell)| {
                if show_all || !cell.is_hidden() {
                    board.deck().cards().get(index).copied()
                } else {
                    None
                }
            })
            .collect();

        Self {
            cards,
            states: board.cells().to_vec(),
            moves: board.move_count(),
            phase: board.phase(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.cards.len() != self.states.len() {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing_board(cards: &[Symbol]) -> Board {
        let mut board = Board::new(Deck::from_cards(cards.to_vec()).unwrap());
        board.begin_playing();
        board
    }

    #[test]
    fn hidden_symbols_are_masked_during_play() {
        let mut board = playing_board(&[0, 1, 0, 1]);
        board.flip(0);

        let obs = Observation::from_board(&board);
        assert_eq!(obs.cards, [Some(0), None, None, None]);
        assert_eq!(obs.states[0], CellState::Revealed);
        obs.validate().unwrap();
    }

    #[test]
    fn matched_symbols_stay_visible() {
        let mut board = playing_board(&[0, 1, 0, 1]);
        board.flip(0);
        board.flip(2);

        let obs = Observation::from_board(&board);
        assert_eq!(obs.cards, [Some(0), None, Some(0), None]);
    }

    #[test]
    fn memorizing_preview_shows_everything() {
        let mut board = Board::new(Deck::from_cards(vec![0, 1, 0, 1]).unwrap());
        board.begin_memorizing();

        let obs = Observation::from_board(&board);
        assert_eq!(obs.cards, [Some(0), Some(1), Some(0), Some(1)]);
        assert_eq!(obs.phase, Phase::Memorizing);
    }

    #[test]
    fn validate_rejects_shape_mismatch() {
        let obs = Observation {
            cards: vec![None, None],
            states: vec![CellState::Hidden],
            moves: 0,
            phase: Phase::Setup,
        };

        assert_eq!(obs.validate(), Err(GameError::InvalidBoardShape));
    }
}
