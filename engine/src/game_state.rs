use crate::board::{BOARD_CELLS, Board, Mark};
use crate::error::GameError;
use crate::win_detector::{check_win, check_win_with_line};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    current_mark: Mark,
    status: GameStatus,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Places `mark` at `index`. Fails without touching the board if the
    /// game is over, the index is out of range, the cell is taken, or it
    /// is not `mark`'s turn.
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> Result<(), GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }

        if index >= BOARD_CELLS {
            return Err(GameError::OutOfRange(index));
        }

        if mark != self.current_mark {
            return Err(GameError::NotYourTurn(mark));
        }

        if !self.board.is_empty_cell(index) {
            return Err(GameError::CellOccupied(index));
        }

        self.board.set(index, mark);
        self.update_status();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = match self.current_mark {
            Mark::X => Mark::O,
            _ => Mark::X,
        };
    }

    fn update_status(&mut self) {
        if let Some(winner_mark) = check_win(&self.board) {
            self.status = match winner_mark {
                Mark::X => GameStatus::XWon,
                _ => GameStatus::OWon,
            };
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<(Mark, [usize; 3])> {
        match self.status {
            GameStatus::XWon | GameStatus::OWon => check_win_with_line(&self.board),
            _ => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.status == GameStatus::Draw
    }

    pub fn is_terminal(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn reset(&mut self) {
        self.board.clear();
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(state: &mut GameState, moves: &[usize]) {
        for &index in moves {
            let mark = state.current_mark();
            state.apply_move(index, mark).unwrap();
        }
    }

    #[test]
    fn test_x_moves_first_and_turns_alternate() {
        let mut state = GameState::new();
        assert_eq!(state.current_mark(), Mark::X);

        state.apply_move(0, Mark::X).unwrap();
        assert_eq!(state.current_mark(), Mark::O);

        state.apply_move(4, Mark::O).unwrap();
        assert_eq!(state.current_mark(), Mark::X);
    }

    #[test]
    fn test_move_out_of_turn_is_rejected() {
        let mut state = GameState::new();
        assert_eq!(state.apply_move(0, Mark::O), Err(GameError::NotYourTurn(Mark::O)));
        assert_eq!(state.board().empty_cells().len(), 9);
    }

    #[test]
    fn test_occupied_cell_is_rejected_without_mutation() {
        let mut state = GameState::new();
        state.apply_move(4, Mark::X).unwrap();

        assert_eq!(state.apply_move(4, Mark::O), Err(GameError::CellOccupied(4)));
        assert_eq!(state.board().get(4), Some(Mark::X));
        assert_eq!(state.current_mark(), Mark::O);
    }

    #[test]
    fn test_out_of_range_index_is_rejected() {
        let mut state = GameState::new();
        assert_eq!(state.apply_move(9, Mark::X), Err(GameError::OutOfRange(9)));
        assert_eq!(state.apply_move(42, Mark::X), Err(GameError::OutOfRange(42)));
    }

    #[test]
    fn test_top_row_win_for_x() {
        let mut state = GameState::new();
        play(&mut state, &[0, 3, 1, 4, 2]);

        assert_eq!(state.status(), GameStatus::XWon);
        assert_eq!(state.winner(), Some(Mark::X));
        assert_eq!(state.winning_line(), Some((Mark::X, [0, 1, 2])));
        assert!(state.is_terminal());
        assert!(!state.is_draw());
    }

    #[test]
    fn test_column_win_for_o() {
        let mut state = GameState::new();
        play(&mut state, &[0, 1, 2, 4, 3, 7]);

        assert_eq!(state.status(), GameStatus::OWon);
        assert_eq!(state.winner(), Some(Mark::O));
        assert_eq!(state.winning_line(), Some((Mark::O, [1, 4, 7])));
    }

    #[test]
    fn test_full_board_without_winner_is_a_draw() {
        let mut state = GameState::new();
        // X O X / X O O / O X X
        play(&mut state, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

        assert_eq!(state.status(), GameStatus::Draw);
        assert!(state.is_draw());
        assert!(state.is_terminal());
        assert_eq!(state.winner(), None);
        assert_eq!(state.winning_line(), None);
    }

    #[test]
    fn test_moves_after_game_over_are_rejected() {
        let mut state = GameState::new();
        play(&mut state, &[0, 3, 1, 4, 2]);

        assert_eq!(state.apply_move(5, Mark::O), Err(GameError::GameOver));
        assert_eq!(state.status(), GameStatus::XWon);
    }

    #[test]
    fn test_queries_are_idempotent() {
        let mut state = GameState::new();
        play(&mut state, &[0, 3, 1, 4, 2]);

        for _ in 0..3 {
            assert_eq!(state.winner(), Some(Mark::X));
            assert!(!state.is_draw());
            assert!(state.is_terminal());
        }
    }

    #[test]
    fn test_reset_clears_board_and_turn() {
        let mut state = GameState::new();
        play(&mut state, &[0, 3, 1, 4, 2]);

        state.reset();

        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.current_mark(), Mark::X);
        assert_eq!(state.board().empty_cells().len(), 9);
        assert_eq!(state.winner(), None);
    }
}
