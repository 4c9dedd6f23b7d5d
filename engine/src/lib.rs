//! Tic-tac-toe rules and move selection, split off from any front-end:
//! [`GameState`] owns the board and turn order, [`select_move`] picks
//! moves for the computer opponent, and [`GameSession`] ties the two
//! together for a presentation layer to drive.

pub mod board;
pub mod bot_controller;
pub mod error;
pub mod game_state;
pub mod session;
pub mod session_rng;
pub mod win_detector;

pub use board::{BOARD_CELLS, Board, Mark};
pub use bot_controller::{
    Difficulty, MEDIUM_RANDOM_PROBABILITY, calculate_minimax_move, select_move,
};
pub use error::GameError;
pub use game_state::{GameState, GameStatus};
pub use session::{COMPUTER_MARK, GameMode, GameSession};
pub use session_rng::GameRng;
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line};
