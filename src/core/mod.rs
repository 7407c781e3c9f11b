//! Core module - pure game logic with no external dependencies
//!
//! This module contains the deck, grid, pattern engine, and session state.
//! It has zero dependencies on UI, terminal, or I/O, making it:
//!
//! - **Deterministic**: the same seed produces an identical game
//! - **Testable**: every rule is covered by unit tests
//! - **Portable**: can run in any environment (terminal, headless)
//!
//! # Module Structure
//!
//! - [`rng`]: seeded hash/sin generator behind reproducible shuffles
//! - [`deck`]: standard 52-card deck construction and shuffling
//! - [`grid`]: the 3x3 placement grid and the 8 pattern triples
//! - [`patterns`]: pattern classification, combo scoring, clear sets
//! - [`session`]: the `GameSession` value and its placement cycle

pub mod deck;
pub mod grid;
pub mod patterns;
pub mod rng;
pub mod session;

// Re-export commonly used types
pub use deck::{create_deck, shuffled_deck};
pub use grid::{CellSet, Grid, TRIPLES};
pub use patterns::{classify, combo_multiplier, evaluate, Evaluation, Match, PatternKind};
pub use rng::{random_seed, seed_hash, SeededRng};
pub use session::{ClearEvent, GameSession, PlacementReport};
