mod config;
mod logger;

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;
use tictactoe_engine::{
    Board, Difficulty, GameMode, GameRng, GameSession, GameState, Mark,
    calculate_minimax_move,
};

#[derive(Parser)]
#[command(name = "tictactoe_cli")]
struct Args {
    #[arg(long, value_enum)]
    mode: Option<GameMode>,

    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,

    /// Seed for the random difficulty tiers; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Config file path; defaults to tictactoe_config.yaml if present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Play one Hard-vs-Hard game and exit.
    #[arg(long)]
    selfplay: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    if args.selfplay {
        return run_selfplay();
    }

    let config = config::load(args.config.as_deref())?;

    let mode = args
        .mode
        .or(config.mode)
        .unwrap_or(GameMode::PlayerVsComputer);
    let difficulty = args
        .difficulty
        .or(config.difficulty)
        .unwrap_or(Difficulty::Medium);
    let rng = match args.seed.or(config.seed) {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_random(),
    };

    crate::log!(
        "starting {:?} at {:?} difficulty, seed {}",
        mode,
        difficulty,
        rng.seed()
    );

    let mut session = GameSession::new(mode, difficulty, rng);
    run_interactive(&mut session, Duration::from_millis(config.computer_delay_ms))
}

fn run_interactive(
    session: &mut GameSession,
    computer_delay: Duration,
) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("{}", render_board(session.state().board()));

    loop {
        if session.state().is_terminal() {
            announce_result(session.state());
            session.reset();
            println!("New round.");
            println!("{}", render_board(session.state().board()));
            continue;
        }

        if session.is_computer_turn() {
            thread::sleep(computer_delay);
            let index = session.play_computer_move()?;
            crate::log!("computer played cell {}", index + 1);
            println!("{}", render_board(session.state().board()));
            continue;
        }

        print!(
            "{} to move (1-9, hint, reset, quit): ",
            session.state().current_mark()
        );
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match line.trim() {
            "" => {}
            "quit" | "q" => break,
            "reset" => {
                session.reset();
                println!("{}", render_board(session.state().board()));
            }
            "hint" => match session.hint() {
                Some(index) => println!("Best move: {}", index + 1),
                None => println!("No hint available."),
            },
            input => match input.parse::<usize>() {
                Ok(cell) if (1..=9).contains(&cell) => {
                    match session.play_human_move(cell - 1) {
                        Ok(()) => println!("{}", render_board(session.state().board())),
                        Err(error) => println!("{}", error),
                    }
                }
                _ => println!("Enter a cell number 1-9, or hint, reset, quit."),
            },
        }
    }

    Ok(())
}

fn run_selfplay() -> Result<(), Box<dyn std::error::Error>> {
    let mut state = GameState::new();

    while !state.is_terminal() {
        let mark = state.current_mark();
        let Some(index) = calculate_minimax_move(state.board(), mark) else {
            break;
        };
        state.apply_move(index, mark)?;
        crate::log!("{} played cell {}", mark, index + 1);
    }

    println!("{}", render_board(state.board()));
    announce_result(&state);
    Ok(())
}

fn announce_result(state: &GameState) {
    match state.winner() {
        Some(mark) => {
            let cells: Vec<String> = state
                .winning_line()
                .map(|(_, line)| line.iter().map(|&index| (index + 1).to_string()).collect())
                .unwrap_or_default();
            println!("{} wins on cells {}!", mark, cells.join("-"));
        }
        None => println!("Draw!"),
    }
}

/// Empty cells show their 1-based number so the prompt and the board
/// use the same addressing.
fn render_board(board: &Board) -> String {
    let cell = |index: usize| match board.cells()[index] {
        Mark::Empty => (index + 1).to_string(),
        mark => mark.to_string(),
    };

    let mut out = String::new();
    for row in 0..3 {
        let base = row * 3;
        out.push_str(&format!(
            " {} | {} | {}\n",
            cell(base),
            cell(base + 1),
            cell(base + 2)
        ));
        if row < 2 {
            out.push_str("---+---+---\n");
        }
    }
    out
}
