//! Dual-engine solver.
//!
//! A board and its twin always have opposite solvability, so one A* engine is
//! run on each in lockstep. Whichever reaches a goal first decides the
//! outcome; the original board's engine also yields the optimal path.

use log::{info, warn};

use crate::config::SolverConfig;
use crate::error::{Error, Result};
use crate::puzzle::{Board, Move};
use crate::search::{SearchEngine, Step};

#[derive(Debug, Clone)]
pub struct Solver {
    moves: Option<usize>,
    solution: Vec<Board>,
    expanded: usize,
}

impl Solver {
    /// Solves `initial` without a search limit.
    ///
    /// Fails only if `initial` is smaller than 2x2, where no twin exists.
    pub fn new(initial: Board) -> Result<Self> {
        Self::with_config(initial, SolverConfig::default())
    }

    pub fn with_config(initial: Board, config: SolverConfig) -> Result<Self> {
        let twin = initial.twin()?;
        let mut original = SearchEngine::new(initial);
        let mut mirror = SearchEngine::new(twin);

        loop {
            let expanded = original.expanded() + mirror.expanded();
            if let Some(limit) = config.max_expansions {
                if expanded > limit {
                    warn!("giving up after {} expansions (limit {})", expanded, limit);
                    return Err(Error::SearchLimit {
                        expansions: expanded,
                    });
                }
            }

            if original.is_exhausted() {
                info!("board exhausted without a goal after {} expansions", expanded);
                return Ok(Self::unsolvable(expanded));
            }
            if let Step::Goal { moves, node } = original.step() {
                let expanded = original.expanded() + mirror.expanded();
                info!("solved in {} moves after {} expansions", moves, expanded);
                return Ok(Self {
                    moves: Some(moves),
                    solution: original.path(node),
                    expanded,
                });
            }

            // An exhausted twin proves the board solvable; keep stepping it alone.
            if mirror.is_exhausted() {
                continue;
            }
            if let Step::Goal { .. } = mirror.step() {
                let expanded = original.expanded() + mirror.expanded();
                info!("twin solved first; board is unsolvable ({} expansions)", expanded);
                return Ok(Self::unsolvable(expanded));
            }
        }
    }

    fn unsolvable(expanded: usize) -> Self {
        Self {
            moves: None,
            solution: Vec::new(),
            expanded,
        }
    }

    pub fn is_solvable(&self) -> bool {
        self.moves.is_some()
    }

    /// Minimum number of slides, or `None` if the board is unsolvable.
    pub fn moves(&self) -> Option<usize> {
        self.moves
    }

    /// Boards from the initial configuration to the goal, inclusive.
    /// Empty when unsolvable.
    pub fn solution(&self) -> &[Board] {
        &self.solution
    }

    /// Direction of the blank for each slide of [`Solver::solution`].
    pub fn steps(&self) -> Vec<Move> {
        self.solution
            .windows(2)
            .filter_map(|pair| pair[0].move_to(&pair[1]))
            .collect()
    }

    /// Boards expanded by both engines together.
    pub fn expanded(&self) -> usize {
        self.expanded
    }
}
