use chrono::prelude::*;
use pexeso_core as game;
use pexeso_protocol as protocol;

use crate::Result;

fn wire_phase(phase: game::Phase) -> protocol::Phase {
    match phase {
        game::Phase::Setup => protocol::Phase::Setup,
        game::Phase::Memorizing => protocol::Phase::Memorizing,
        game::Phase::Playing => protocol::Phase::Playing,
    }
}

/// One player's game, restored from and persisted back to a session snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSession {
    board: game::Board,
}

impl GameSession {
    /// Deal a fresh default-size board from the given seed.
    pub fn fresh(seed: u64) -> Self {
        let generator = game::ShuffledDeckGenerator::new(seed);
        Self {
            board: game::Board::generate(game::GameConfig::default(), generator),
        }
    }

    pub fn fresh_random() -> Self {
        Self::fresh(rand::random())
    }

    pub fn restore(snapshot: game::Snapshot) -> Self {
        Self {
            board: game::Board::restore(snapshot),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(Self::restore(serde_json::from_str(raw)?))
    }

    pub fn board(&self) -> &game::Board {
        &self.board
    }

    pub fn snapshot(&self) -> game::Snapshot {
        self.board.snapshot()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }

    /// Seconds since the memorizing preview started, 0 before that. Pacing
    /// only; the engine never reads this.
    pub fn elapsed_secs(&self, now: DateTime<Utc>) -> u32 {
        if let Some(started_at) = self.board.started_at() {
            (now - started_at).num_seconds().max(0) as u32
        } else {
            0
        }
    }

    /// Apply one client action and build the response payload.
    pub fn handle(&mut self, action: &protocol::Action) -> protocol::GameView {
        use protocol::Action::*;

        match action {
            Flip { index } if *index == protocol::RESOLVE_MISMATCH_INDEX => {
                let outcome = self.board.resolve_mismatch();
                log::debug!("resolve mismatch: {:?}", outcome);
                self.view(false, self.board.is_win())
            }
            Flip { index } => {
                let outcome = match usize::try_from(*index) {
                    Ok(index) => self.board.flip(index),
                    Err(_) => game::FlipOutcome::Rejected,
                };
                self.view(outcome.is_mismatch(), self.board.is_win())
            }
            Restart => {
                log::debug!("restart, dealing a fresh board");
                self.board = Self::fresh_random().board;
                self.view(false, false)
            }
            StartMemorizing => {
                self.board.begin_memorizing();
                self.preview_view()
            }
            StartPlaying => {
                self.board.begin_playing();
                self.view(false, false)
            }
        }
    }

    fn view(&self, mismatch: bool, win: bool) -> protocol::GameView {
        protocol::GameView {
            cards: self.board.deck().cards().to_vec(),
            states: self.board.cells().iter().map(|&cell| cell.into()).collect(),
            moves: self.board.move_count(),
            win,
            mismatch,
            phase: wire_phase(self.board.phase()),
        }
    }

    /// Preview payload: every card reported face up without touching the
    /// actual cell states.
    fn preview_view(&self) -> protocol::GameView {
        protocol::GameView {
            states: vec![u8::from(game::CellState::Revealed); self.board.len()],
            ..self.view(false, false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use game::{CellState, Phase, Snapshot};
    use protocol::Action;

    fn playing_session(cards: &[u8]) -> GameSession {
        GameSession::restore(Snapshot {
            cards: cards.to_vec(),
            states: vec![CellState::Hidden; cards.len()],
            moves: 0,
            phase: Phase::Playing,
            start_time: None,
        })
    }

    #[test]
    fn flip_reports_mismatch_and_sentinel_resolves_it() {
        let mut session = playing_session(&[0, 1, 0, 1]);

        let view = session.handle(&Action::Flip { index: 0 });
        assert!(!view.mismatch);

        let view = session.handle(&Action::Flip { index: 1 });
        assert!(view.mismatch);
        assert_eq!(view.states, [1, 1, 0, 0]);
        assert_eq!(view.moves, 1);

        let view = session.handle(&Action::Flip {
            index: protocol::RESOLVE_MISMATCH_INDEX,
        });
        assert!(!view.mismatch);
        assert_eq!(view.states, [0, 0, 0, 0]);
        assert_eq!(view.moves, 1);
    }

    #[test]
    fn flip_view_reports_the_win() {
        let mut session = playing_session(&[5, 5]);

        session.handle(&Action::Flip { index: 0 });
        let view = session.handle(&Action::Flip { index: 1 });

        assert!(view.win);
        assert!(!view.mismatch);
        assert_eq!(view.states, [2, 2]);
        assert_eq!(view.moves, 1);
    }

    #[test]
    fn negative_non_sentinel_index_changes_nothing() {
        let mut session = playing_session(&[0, 1, 0, 1]);

        let view = session.handle(&Action::Flip { index: -5 });
        assert!(!view.mismatch);
        assert_eq!(view.states, [0, 0, 0, 0]);
        assert_eq!(view.moves, 0);
    }

    #[test]
    fn memorize_view_shows_everything_without_mutating() {
        let mut session = playing_session(&[0, 1, 0, 1]);

        let view = session.handle(&Action::StartMemorizing);
        assert_eq!(view.states, [1, 1, 1, 1]);
        assert_eq!(view.phase, protocol::Phase::Memorizing);
        assert!(!view.win);

        // preview is a view-layer fiction, the cells stay hidden
        assert!(session.board().cells().iter().all(|cell| cell.is_hidden()));
        assert!(session.board().started_at().is_some());
    }

    #[test]
    fn start_playing_rehides_and_zeroes_moves() {
        let mut session = playing_session(&[0, 1, 0, 1]);
        session.handle(&Action::Flip { index: 0 });
        session.handle(&Action::Flip { index: 1 });

        let view = session.handle(&Action::StartPlaying);
        assert_eq!(view.phase, protocol::Phase::Playing);
        assert_eq!(view.states, [0, 0, 0, 0]);
        assert_eq!(view.moves, 0);
    }

    #[test]
    fn restart_deals_a_fresh_default_board() {
        let mut session = playing_session(&[0, 1, 0, 1]);
        session.handle(&Action::Flip { index: 0 });

        let view = session.handle(&Action::Restart);
        assert_eq!(view.cards.len(), 16);
        assert_eq!(view.states, vec![0; 16]);
        assert_eq!(view.moves, 0);
        assert_eq!(view.phase, protocol::Phase::Setup);
        assert!(!view.win);
    }

    #[test]
    fn json_round_trip_preserves_the_session() {
        let mut session = GameSession::fresh(21);
        session.handle(&Action::StartMemorizing);

        let raw = session.to_json().unwrap();
        let restored = GameSession::from_json(&raw).unwrap();
        assert_eq!(restored, session);
    }

    #[test]
    fn malformed_snapshot_json_errors() {
        assert!(matches!(
            GameSession::from_json("not json"),
            Err(crate::SessionError::MalformedSnapshot(_))
        ));
    }

    #[test]
    fn elapsed_counts_from_the_preview_start() {
        let session = GameSession::fresh(3);
        assert_eq!(session.elapsed_secs(Utc::now()), 0);

        let mut session = session;
        session.handle(&Action::StartMemorizing);
        let started = session.board().started_at().unwrap();
        assert_eq!(session.elapsed_secs(started + TimeDelta::seconds(3)), 3);
    }
}
