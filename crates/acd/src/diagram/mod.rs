//! Annotated chord diagrams and their reduction moves.
//!
//! Purpose
//! - A diagram is a double-occurrence word whose positions carry affine
//!   weights (segment lengths). Two local moves shrink it and charge a cost:
//!   side elimination (remove the outermost letter and its partner) and turn
//!   elimination (remove two adjacent equal letters).
//! - The running sum of charged costs is the diagram's `total_increaser`.
//!
//! Representations
//! - `Acd` (`cyclic`): no distinguished basepoint, a linear representative of
//!   a cyclic word; both ends are reachable.
//! - `PreAcd` (`split`): the word is cut at a basepoint curve into a left and
//!   a right side; no wraparound, letters without a partner are allowed.
//!
//! Both implement `ChordDiagram`; callers are generic over it so the hot
//! recursive search is monomorphised per representation.

mod cyclic;
mod split;

pub use cyclic::Acd;
pub use split::{PreAcd, SplitTurn};

use std::fmt;

use crate::affine::AffineFn;
use crate::regime::Regime;

/// Chord label as it appears in a word.
pub type Label = u8;

/// End of the linear representative a side elimination works on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];
}

/// Which representation a word is read as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Split at a basepoint (pre-diagram).
    PreAcd,
    /// Cyclic, no basepoint (annotated chord diagram).
    Acd,
}

impl Variant {
    /// Order in which reports list the variants.
    pub const ALL: [Variant; 2] = [Variant::PreAcd, Variant::Acd];

    /// Display name used in reports.
    pub fn name(self) -> &'static str {
        match self {
            Variant::PreAcd => "preACD",
            Variant::Acd => "ACD",
        }
    }

    /// Lower-case identifier used in file names.
    pub fn slug(self) -> &'static str {
        match self {
            Variant::PreAcd => "pre_acd",
            Variant::Acd => "acd",
        }
    }

    /// Number of variables (including the constant slot) for a word of `len` letters.
    pub fn arity(self, len: usize) -> usize {
        match self {
            Variant::PreAcd => len + 1,
            Variant::Acd => len + 2,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reduction state machine shared by both representations.
///
/// Invariants
/// - `total_increaser` only grows (all weights have nonnegative coefficients).
/// - Every successful move increments `eliminations_done` by exactly one and
///   removes at least one labelled position; a failed move mutates nothing.
pub trait ChordDiagram: Clone + fmt::Display {
    /// Identifies one adjacent-pair elimination.
    type Turn: Copy + fmt::Debug + PartialEq;

    const VARIANT: Variant;

    /// Build the initial diagram from a word of labels.
    fn from_word(word: &[Label]) -> Self;

    /// Remove the outermost letter on `side` together with its partner.
    /// Returns false (and does nothing) if that side is empty.
    fn eliminate_from_side(&mut self, side: Side, regime: Regime) -> bool;

    /// Remove an adjacent equal pair. Returns false (and does nothing) if
    /// `turn` does not name such a pair.
    fn eliminate_turn(&mut self, turn: Self::Turn) -> bool;

    /// Every turn currently applicable, without mutation.
    fn possible_turns(&self) -> Vec<Self::Turn>;

    /// Sum of all costs charged so far.
    fn total_increaser(&self) -> &AffineFn;

    fn eliminations_done(&self) -> usize;

    /// Number of labelled positions left.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Accumulated cost plus move counter; both only ever grow.
#[derive(Clone, Copy, Debug)]
pub(crate) struct CostLedger {
    total: AffineFn,
    done: usize,
}

impl CostLedger {
    pub(crate) fn new(arity: usize) -> Self {
        Self {
            total: AffineFn::zero(arity),
            done: 0,
        }
    }

    #[inline]
    pub(crate) fn charge(&mut self, cost: &AffineFn) {
        self.total += cost;
        self.done += 1;
    }

    #[inline]
    pub(crate) fn total(&self) -> &AffineFn {
        &self.total
    }

    #[inline]
    pub(crate) fn done(&self) -> usize {
        self.done
    }
}
