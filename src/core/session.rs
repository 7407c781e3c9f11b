//! Session module - manages the complete game session
//!
//! Ties together deck, grid, current card, scoring, and the clear log.
//! The session is an explicit value owned by the presentation layer: every
//! operation mutates it in place and nothing lives in ambient state.
//!
//! Lifecycle: Setup (deck built and shuffled, first card drawn on `start`)
//! -> Playing (placement/evaluate/draw cycles) -> GameOver (terminal; only
//! restart with the same seed or a new session leave it).

use crate::core::deck::shuffled_deck;
use crate::core::grid::Grid;
use crate::core::patterns::{evaluate, Evaluation, PatternKind};
use crate::core::rng::random_seed;
use crate::types::Card;

/// One matched pattern recorded for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearEvent {
    /// Placement ordinal (1-based) at which the pattern resolved
    pub placement: u32,
    pub kind: PatternKind,
    /// Grid indices of the matched triple
    pub cells: [usize; 3],
    /// Displayed point share for this pattern
    pub points: u32,
}

/// Outcome of a successful placement, for the presentation layer
#[derive(Debug, Clone)]
pub struct PlacementReport {
    pub cell: usize,
    pub card: Card,
    pub evaluation: Evaluation,
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameSession {
    seed: String,
    /// Shuffled deck, consumed from the back via pop
    deck: Vec<Card>,
    grid: Grid,
    /// Card in hand, waiting for a placement
    current: Option<Card>,
    score: u32,
    game_over: bool,
    started: bool,
    /// Monotonic episode id (increments on restart)
    episode_id: u32,
    /// Successful placements within the current episode
    placements: u32,
    /// Ordered record of every cleared pattern
    log: Vec<ClearEvent>,
}

impl GameSession {
    /// Create a session for the given seed (deck built and shuffled)
    pub fn new(seed: impl Into<String>) -> Self {
        let seed = seed.into();
        let deck = shuffled_deck(&seed);
        Self::from_parts(seed, deck)
    }

    /// Create a session with a fresh random seed
    pub fn with_random_seed() -> Self {
        Self::new(random_seed())
    }

    /// Create a session over an explicit deck.
    ///
    /// Cards are drawn from the back of `deck`. Intended for reproducible
    /// scenarios and tests; regular games go through `new`.
    pub fn with_deck(seed: impl Into<String>, deck: Vec<Card>) -> Self {
        Self::from_parts(seed.into(), deck)
    }

    fn from_parts(seed: String, deck: Vec<Card>) -> Self {
        Self {
            seed,
            deck,
            grid: Grid::new(),
            current: None,
            score: 0,
            game_over: false,
            started: false,
            episode_id: 0,
            placements: 0,
            log: Vec::new(),
        }
    }

    /// Start the game and draw the first card
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.current = self.deck.pop();
        if self.current.is_none() {
            // Empty deck handed in; nothing to play.
            self.game_over = true;
        }
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn placements(&self) -> u32 {
        self.placements
    }

    pub fn current_card(&self) -> Option<Card> {
        self.current
    }

    /// Undealt cards left in the deck (the card in hand is not counted)
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn log(&self) -> &[ClearEvent] {
        &self.log
    }

    /// Place the current card at `cell`.
    ///
    /// Silent no-op (returns `None`) when the cell is occupied or out of
    /// range, no card is held, the session has not started, or the game is
    /// over. On success runs the full cycle: place, evaluate all triples,
    /// score and clear matches, draw the next card, check for game over.
    pub fn place_card(&mut self, cell: usize) -> Option<PlacementReport> {
        if !self.started || self.game_over {
            return None;
        }
        let card = self.current?;
        if !self.grid.is_free(cell) {
            return None;
        }

        self.grid.set(cell, Some(card));
        self.current = None;
        self.placements = self.placements.wrapping_add(1);

        let evaluation = evaluate(&self.grid);
        if !evaluation.matches.is_empty() {
            self.score += evaluation.total_points;
            self.grid.clear_cells(&evaluation.cells_to_clear);
            for m in &evaluation.matches {
                self.log.push(ClearEvent {
                    placement: self.placements,
                    kind: m.kind,
                    cells: m.cells,
                    points: m.points,
                });
            }
        }

        self.current = self.deck.pop();

        // Terminal when the grid is saturated with no pattern left, or the
        // deck ran dry with nothing in hand.
        let grid_dead = self.grid.is_full() && evaluate(&self.grid).matches.is_empty();
        let exhausted = self.deck.is_empty() && self.current.is_none();
        if grid_dead || exhausted {
            self.game_over = true;
        }

        Some(PlacementReport {
            cell,
            card,
            evaluation,
        })
    }

    /// Restart with the same seed: same deck order, fresh grid and score
    pub fn restart(&mut self) {
        let seed = std::mem::take(&mut self.seed);
        let next_episode = self.episode_id.wrapping_add(1);
        *self = Self::new(seed);
        self.episode_id = next_episode;
        self.start();
    }

    /// Human-readable share payload: seed plus score
    pub fn share_text(&self) -> String {
        format!("triad seed \"{}\" scored {} pts", self.seed, self.score)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new("1")
    }
}
