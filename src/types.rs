//! Core types shared across the application
//! This module contains pure data types with no external dependencies

use core::fmt;

/// Grid dimensions
pub const GRID_WIDTH: usize = 3;
pub const GRID_CELLS: usize = GRID_WIDTH * GRID_WIDTH;

/// Number of cards in a standard deck
pub const DECK_SIZE: usize = 52;

/// Base points per pattern type
pub const FLUSH_POINTS: u32 = 50;
pub const STRAIGHT_POINTS: u32 = 100;
pub const THREE_OF_A_KIND_POINTS: u32 = 100;
pub const STRAIGHT_FLUSH_POINTS: u32 = 200;

/// Combo multipliers indexed by simultaneous pattern count (1-based, capped at 4)
pub const COMBO_MULTIPLIERS: [u32; 4] = [1, 2, 4, 8];

/// Transient message lifetime in the terminal UI (milliseconds)
pub const MESSAGE_TIMEOUT_MS: u64 = 2500;

/// The four suits in a standard deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Hearts,
    Diamonds,
    Spades,
    Clubs,
}

impl Suit {
    /// All suits in a fixed, reproducible order
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs];

    /// Single-character glyph for terminal display
    pub fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Spades => '♠',
            Suit::Clubs => '♣',
        }
    }

    /// Hearts and diamonds render red, spades and clubs white
    pub fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}

/// The thirteen ranks, Ace low
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks in a fixed, reproducible order (Ace..King)
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric value 1..=13 (Ace=1, King=13)
    pub fn value(self) -> u8 {
        self as u8 + 1
    }

    /// Display label ("A", "2", ..., "10", "J", "Q", "K")
    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// A playing card: immutable suit/rank pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

/// Cell on the grid (None = empty, Some = occupied by a card)
pub type Cell = Option<Card>;

/// Game actions produced by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    /// Place the current card at the cursor cell
    Place,
    /// Place the current card at an explicit cell index (digit keys)
    PlaceAt(u8),
    /// Restart with the same seed
    Restart,
    /// Start a new game with a fresh random seed
    NewGame,
    /// Show the share payload for the current session
    Share,
}
