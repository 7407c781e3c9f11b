//! TUI Triad - a terminal card-placement puzzle.
//!
//! A 3x3 grid is filled one card at a time from a shuffled 52-card deck.
//! Placing a card can complete a 3-card pattern along a row, column, or
//! diagonal; completed patterns score points and their cells are cleared.
//!
//! # Game Rules
//!
//! - **Patterns**: straight flush (200), straight (100), three of a kind
//!   (100), flush (50). {A,Q,K} and {A,2,3} count as straights.
//! - **Combos**: 2 simultaneous patterns double the total, 3 quadruple it,
//!   4 or more multiply it by eight.
//! - **Clearing**: matched cells empty in one pass; cleared cards are out of
//!   the game for good.
//! - **Game over**: the grid is full with no pattern left, or the deck and
//!   the hand are both empty.
//!
//! # Determinism
//!
//! Deck order is a pure function of the seed string, so a game can be shared
//! and replayed from its seed alone.
//!
//! # Example
//!
//! ```
//! use tui_triad::core::GameSession;
//!
//! // Create and start a game
//! let mut game = GameSession::new("test1");
//! game.start();
//! assert!(game.current_card().is_some());
//!
//! // Place the held card in the center cell
//! game.place_card(4);
//! assert_eq!(game.grid().occupied_count(), 1);
//! ```

pub mod core;
pub mod input;
pub mod term;
pub mod types;
