//! # Sliding Puzzle Library
//!
//! Optimal solver for the classical N×N sliding-tile puzzle.
//!
//! Solvability is decided without counting inversions: the solver runs one
//! A* search on the board and one on its *twin* (the same board with two
//! adjacent tiles swapped). Exactly one of the two can reach the goal, so
//! whichever search finishes first settles the question.
//!
//! ## Modules
//! - `puzzle`: the immutable `Board`, its heuristics, neighbors, twin and text format.
//! - `queue`: a min-priority queue with first-in-first-out tie-breaking.
//! - `search`: a single step-wise A* engine.
//! - `solver`: the dual-engine `Solver`.
//! - `config`: solver settings.
//! - `error`: the crate's error type.

pub mod config;
pub mod error;
pub mod puzzle;
pub mod queue;
pub mod search;
pub mod solver;

pub use config::SolverConfig;
pub use error::{Error, Result};
pub use puzzle::{Board, Move};
pub use solver::Solver;
