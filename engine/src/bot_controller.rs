use crate::board::{Board, Mark};
use crate::session_rng::GameRng;
use crate::win_detector::check_win;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Chance that the Medium tier plays a random move instead of the
/// minimax move. Tunable; not a load-bearing value.
pub const MEDIUM_RANDOM_PROBABILITY: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Picks the next move for `mark`. Returns `None` only when the board has
/// no empty cell, which callers should treat as a logic error.
pub fn select_move(
    board: &Board,
    mark: Mark,
    difficulty: Difficulty,
    rng: &mut GameRng,
) -> Option<usize> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(board, rng),
        Difficulty::Medium => {
            if rng.random_f64() < MEDIUM_RANDOM_PROBABILITY {
                calculate_random_move(board, rng)
            } else {
                calculate_minimax_move(board, mark)
            }
        }
        Difficulty::Hard => calculate_minimax_move(board, mark),
    }
}

fn calculate_random_move(board: &Board, rng: &mut GameRng) -> Option<usize> {
    rng.pick(&board.empty_cells()).copied()
}

/// Exhaustive minimax with `for_mark` as the maximizing side, so the same
/// search answers both "best computer move" and "hint for the human".
/// Ties are broken by the lowest board index: the root scans cells in
/// ascending order and replaces the best move only on a strictly greater
/// score.
pub fn calculate_minimax_move(board: &Board, for_mark: Mark) -> Option<usize> {
    let opponent = for_mark.opponent()?;
    let empty_cells = board.empty_cells();
    if empty_cells.is_empty() {
        return None;
    }

    let mut scratch = *board;
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in empty_cells {
        scratch.set(index, for_mark);
        let score = minimax(&mut scratch, for_mark, opponent, false, i32::MIN, i32::MAX);
        scratch.set(index, Mark::Empty);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

fn minimax(
    board: &mut Board,
    for_mark: Mark,
    opponent: Mark,
    is_maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if let Some(winner) = check_win(board) {
        return if winner == for_mark { 1 } else { -1 };
    }

    let empty_cells = board.empty_cells();
    if empty_cells.is_empty() {
        return 0;
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in empty_cells {
            board.set(index, for_mark);
            let eval = minimax(board, for_mark, opponent, false, alpha, beta);
            board.set(index, Mark::Empty);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in empty_cells {
            board.set(index, opponent);
            let eval = minimax(board, for_mark, opponent, true, alpha, beta);
            board.set(index, Mark::Empty);

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}
