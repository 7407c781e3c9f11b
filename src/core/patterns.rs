//! Pattern module - detection and scoring of completed 3-card patterns
//!
//! After every placement the 8 fixed triples are checked. A triple is a
//! candidate only when all 3 of its cells are occupied; candidates are
//! classified by priority (straight flush, flush, straight, three of a
//! kind), scored with a combo multiplier, and their cells cleared as a set.

use arrayvec::ArrayVec;

use crate::core::grid::{CellSet, Grid, TRIPLES};
use crate::types::{
    Card, COMBO_MULTIPLIERS, FLUSH_POINTS, STRAIGHT_FLUSH_POINTS, STRAIGHT_POINTS,
    THREE_OF_A_KIND_POINTS,
};

/// Pattern classification for a full triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    Flush,
    Straight,
    ThreeOfAKind,
    StraightFlush,
}

impl PatternKind {
    /// Base points before the combo multiplier
    pub fn base_points(self) -> u32 {
        match self {
            PatternKind::Flush => FLUSH_POINTS,
            PatternKind::Straight => STRAIGHT_POINTS,
            PatternKind::ThreeOfAKind => THREE_OF_A_KIND_POINTS,
            PatternKind::StraightFlush => STRAIGHT_FLUSH_POINTS,
        }
    }

    /// Display label for the clear log
    pub fn label(self) -> &'static str {
        match self {
            PatternKind::Flush => "FLUSH",
            PatternKind::Straight => "STRAIGHT",
            PatternKind::ThreeOfAKind => "THREE OF A KIND",
            PatternKind::StraightFlush => "STRAIGHT FLUSH",
        }
    }
}

/// One matched triple in an evaluation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Grid indices of the matched triple
    pub cells: [usize; 3],
    pub kind: PatternKind,
    /// Displayed share of the pass total, distributed by base-point ratio.
    /// Shares are rounded per pattern and need not sum exactly to the total.
    pub points: u32,
}

/// Result of evaluating the grid after a placement
#[derive(Debug, Clone, Default)]
pub struct Evaluation {
    pub matches: ArrayVec<Match, 8>,
    /// Sum of matched base points times the combo multiplier
    pub total_points: u32,
    /// Union of all matched cells; overlapping cells appear once
    pub cells_to_clear: CellSet,
}

impl Evaluation {
    /// Number of simultaneously matched patterns in this pass
    pub fn combo(&self) -> usize {
        self.matches.len()
    }
}

/// Check three rank values (1..=13) for a straight.
///
/// Sorted ascending they must be consecutive, with {A,Q,K} and {A,2,3}
/// accepted as wrap straights.
fn is_straight(mut values: [u8; 3]) -> bool {
    values.sort_unstable();
    if values == [1, 12, 13] {
        return true;
    }
    values[1] == values[0] + 1 && values[2] == values[1] + 1
}

/// Classify a full triple. Priority order, first match wins.
pub fn classify(cards: [Card; 3]) -> Option<PatternKind> {
    let same_suit = cards[0].suit == cards[1].suit && cards[1].suit == cards[2].suit;
    let straight = is_straight([
        cards[0].rank.value(),
        cards[1].rank.value(),
        cards[2].rank.value(),
    ]);

    if same_suit && straight {
        return Some(PatternKind::StraightFlush);
    }
    if same_suit {
        return Some(PatternKind::Flush);
    }
    if straight {
        return Some(PatternKind::Straight);
    }
    if cards[0].rank == cards[1].rank && cards[1].rank == cards[2].rank {
        return Some(PatternKind::ThreeOfAKind);
    }
    None
}

/// Combo multiplier for N simultaneous patterns (capped at 4 for the lookup)
pub fn combo_multiplier(pattern_count: usize) -> u32 {
    COMBO_MULTIPLIERS[pattern_count.clamp(1, COMBO_MULTIPLIERS.len()) - 1]
}

/// Evaluate all 8 triples against the current grid.
///
/// Triples with any empty cell are skipped. The pass allocates nothing.
pub fn evaluate(grid: &Grid) -> Evaluation {
    let mut found: ArrayVec<([usize; 3], PatternKind), 8> = ArrayVec::new();

    for triple in TRIPLES.iter() {
        let cards = [
            grid.get(triple[0]).flatten(),
            grid.get(triple[1]).flatten(),
            grid.get(triple[2]).flatten(),
        ];
        let (Some(a), Some(b), Some(c)) = (cards[0], cards[1], cards[2]) else {
            continue;
        };
        if let Some(kind) = classify([a, b, c]) {
            found.push((*triple, kind));
        }
    }

    if found.is_empty() {
        return Evaluation::default();
    }

    let base_sum: u32 = found.iter().map(|(_, kind)| kind.base_points()).sum();
    let total_points = base_sum * combo_multiplier(found.len());

    let mut matches = ArrayVec::new();
    let mut cells_to_clear = CellSet::new();
    for (cells, kind) in found {
        let share = (f64::from(total_points) * f64::from(kind.base_points())
            / f64::from(base_sum))
        .round() as u32;
        matches.push(Match {
            cells,
            kind,
            points: share,
        });
        for idx in cells {
            cells_to_clear.insert(idx);
        }
    }

    Evaluation {
        matches,
        total_points,
        cells_to_clear,
    }
}
