use crate::board::Mark;
use thiserror::Error;

/// Invalid-move conditions. All are synchronous and leave the game
/// state untouched; the caller decides whether to display or ignore them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("cell index {0} is out of range")]
    OutOfRange(usize),

    #[error("cell {0} is already marked")]
    CellOccupied(usize),

    #[error("it is not {0}'s turn")]
    NotYourTurn(Mark),

    #[error("game is already over")]
    GameOver,
}
