use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Deck has an odd number of cards")]
    OddDeckSize,
    #[error("Symbol does not appear exactly twice")]
    UnpairedSymbol,
    #[error("Board shape does not match declared deck")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, GameError>;
