use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use crossterm::style::Stylize;
use log::LevelFilter;
use rand::{rngs::StdRng, thread_rng, SeedableRng};

use sliding_puzzle::{Board, Move, Solver, SolverConfig};

#[derive(Parser, Debug)]
#[command(name = "slider-puzzle")]
#[command(version, about = "Optimal sliding-tile puzzle solver", long_about = None)]
struct Args {
    /// Board file (dimension line, then rows); reads standard input when omitted
    board_file: Option<PathBuf>,

    /// Solve a random solvable N×N board instead of reading one
    #[arg(long, value_name = "N", conflicts_with = "board_file")]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Give up after expanding this many boards
    #[arg(long, value_name = "COUNT")]
    max_expansions: Option<usize>,

    /// Print the blank's direction above each step
    #[arg(long)]
    moves: bool,

    /// Highlight the blank and the tile that just moved
    #[arg(long)]
    color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn read_board(args: &Args) -> Result<Board> {
    if let Some(size) = args.random {
        Board::check_dimension(size).context("invalid --random dimension")?;
        let board = match args.seed {
            Some(seed) => Board::random_solvable(size, &mut StdRng::seed_from_u64(seed)),
            None => Board::random_solvable(size, &mut thread_rng()),
        };
        return Ok(board);
    }

    match &args.board_file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            Board::load(file).with_context(|| format!("invalid board in {}", path.display()))
        }
        None => Board::load(io::stdin().lock()).context("invalid board on standard input"),
    }
}

fn render_colored(board: &Board, step: Option<Move>) -> String {
    let (blank_row, blank_col) = board.blank();
    let moved = step.map(|step| {
        let (dr, dc) = step.opposite().as_offset();
        (
            (blank_row as isize + dr) as usize,
            (blank_col as isize + dc) as usize,
        )
    });

    let mut text = board.dimension().to_string();
    for (row, values) in board.rows().enumerate() {
        let cells: Vec<String> = values
            .iter()
            .enumerate()
            .map(|(col, &value)| {
                let cell = format!("{:2}", value);
                if (row, col) == (blank_row, blank_col) {
                    cell.dark_grey().to_string()
                } else if moved == Some((row, col)) {
                    cell.bold().yellow().to_string()
                } else {
                    cell
                }
            })
            .collect();
        text.push('\n');
        text.push_str(&cells.join(" "));
    }
    text
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let initial = read_board(&args)?;
    log::info!("solving:\n{}", initial);

    let mut config = SolverConfig::new();
    if let Some(limit) = args.max_expansions {
        config = config.with_max_expansions(limit);
    }
    let solver = Solver::with_config(initial, config).context("failed to solve board")?;

    let stdout = io::stdout();
    write_solution(&mut stdout.lock(), &solver, args.moves, args.color)?;
    Ok(())
}

/// Prints the move count and every board of the solution, each followed by a
/// blank line, or a single line when the board is unsolvable.
fn write_solution<W: Write>(
    out: &mut W,
    solver: &Solver,
    show_moves: bool,
    color: bool,
) -> io::Result<()> {
    let Some(moves) = solver.moves() else {
        return writeln!(out, "no solution possible");
    };

    writeln!(out, "minimum number of moves = {}", moves)?;
    let steps = solver.steps();
    for (i, board) in solver.solution().iter().enumerate() {
        let step = i.checked_sub(1).map(|prev| steps[prev]);
        if show_moves {
            if let Some(step) = step {
                writeln!(out, "{}", step)?;
            }
        }
        if color {
            writeln!(out, "{}", render_colored(board, step))?;
        } else {
            writeln!(out, "{}", board)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
