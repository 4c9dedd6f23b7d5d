use crate::board::Mark;
use crate::bot_controller::{Difficulty, calculate_minimax_move, select_move};
use crate::error::GameError;
use crate::game_state::GameState;
use crate::session_rng::GameRng;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// In PlayerVsComputer mode the human is always X and the computer O,
/// so the human opens the round.
pub const COMPUTER_MARK: Mark = Mark::O;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    PlayerVsPlayer,
    PlayerVsComputer,
}

/// One round of tic-tac-toe at a time: owns the game state, the
/// configured opponent, and the randomness the lower tiers draw from.
pub struct GameSession {
    state: GameState,
    mode: GameMode,
    difficulty: Difficulty,
    rng: GameRng,
}

impl GameSession {
    pub fn new(mode: GameMode, difficulty: Difficulty, rng: GameRng) -> Self {
        Self {
            state: GameState::new(),
            mode,
            difficulty,
            rng,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::PlayerVsComputer
            && self.state.current_mark() == COMPUTER_MARK
            && !self.state.is_terminal()
    }

    pub fn play_human_move(&mut self, index: usize) -> Result<(), GameError> {
        if self.is_computer_turn() {
            return Err(GameError::NotYourTurn(Mark::X));
        }
        let mark = self.state.current_mark();
        self.state.apply_move(index, mark)
    }

    /// Lets the configured bot take its turn and reports the cell it chose.
    pub fn play_computer_move(&mut self) -> Result<usize, GameError> {
        if !self.is_computer_turn() {
            return Err(GameError::NotYourTurn(COMPUTER_MARK));
        }

        let index = select_move(
            self.state.board(),
            COMPUTER_MARK,
            self.difficulty,
            &mut self.rng,
        )
        .ok_or(GameError::GameOver)?;

        self.state.apply_move(index, COMPUTER_MARK)?;
        Ok(index)
    }

    /// Optimal move for whichever side is currently to move, or `None`
    /// once the round is over.
    pub fn hint(&self) -> Option<usize> {
        if self.state.is_terminal() {
            return None;
        }
        calculate_minimax_move(self.state.board(), self.state.current_mark())
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Switching modes starts a fresh round.
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.state.reset();
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }
}
