//! Split form: letters on both sides of a basepoint curve.
//!
//! Layout
//! - A word of length `2h` is cut in half: `left = word[0..h]`,
//!   `right = reverse(word[h..2h])`. On both sides the letter nearest the
//!   basepoint is the last element.
//! - Each letter carries the weight of the segment between it and the next
//!   letter towards the basepoint. Ids `1..=h` go left, `h+1..=2h` right, and
//!   the initial weight of a letter is `x_id`.
//! - A label may occur once; such a letter has no partner and leaves alone.

use std::fmt;

use super::{ChordDiagram, CostLedger, Label, Side, Variant};
use crate::affine::{AffineFn, MAX_CHORDS};
use crate::regime::Regime;

#[derive(Clone, Debug)]
struct Letter {
    label: Label,
    weight: AffineFn,
}

/// Adjacent pair `(index - 1, index)` on one side; `index >= 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SplitTurn {
    pub side: Side,
    pub index: usize,
}

/// Pre-diagram: chord diagram with a distinguished basepoint.
#[derive(Clone, Debug)]
pub struct PreAcd {
    left: Vec<Letter>,
    right: Vec<Letter>,
    ledger: CostLedger,
}

impl PreAcd {
    /// Labels on `side`, outermost first.
    pub fn labels(&self, side: Side) -> Vec<Label> {
        self.side(side).iter().map(|l| l.label).collect()
    }

    /// Weights on `side`, outermost first.
    pub fn weights(&self, side: Side) -> Vec<AffineFn> {
        self.side(side).iter().map(|l| l.weight).collect()
    }

    fn side(&self, side: Side) -> &[Letter] {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

impl ChordDiagram for PreAcd {
    type Turn = SplitTurn;

    const VARIANT: Variant = Variant::PreAcd;

    fn from_word(word: &[Label]) -> Self {
        assert!(
            word.len() <= 2 * MAX_CHORDS,
            "word of length {} exceeds {} chords",
            word.len(),
            MAX_CHORDS
        );
        debug_assert!(word.len() % 2 == 0, "split form needs an even word");
        let half = word.len() / 2;
        let arity = Self::VARIANT.arity(word.len());
        let letter = |label: Label, id: usize| Letter {
            label,
            weight: AffineFn::unit(id, 1, arity),
        };
        let left = (0..half).map(|i| letter(word[i], 1 + i)).collect();
        let right = (0..half)
            .map(|i| letter(word[2 * half - 1 - i], 1 + half + i))
            .collect();
        Self {
            left,
            right,
            ledger: CostLedger::new(arity),
        }
    }

    fn eliminate_from_side(&mut self, side: Side, regime: Regime) -> bool {
        let inc = regime.unit_increment();
        let (near, other) = match side {
            Side::Left => (&mut self.left, &mut self.right),
            Side::Right => (&mut self.right, &mut self.left),
        };
        let Some(q) = near.pop() else {
            return false;
        };
        self.ledger.charge(&(2 * q.weight + inc));
        if let Some(next) = near.last_mut() {
            next.weight += &q.weight;
        }

        let partner = match near.iter().position(|l| l.label == q.label) {
            Some(i) => Some((near, i)),
            None => other
                .iter()
                .position(|l| l.label == q.label)
                .map(|i| (other, i)),
        };
        if let Some((letters, i)) = partner {
            let removed = letters.remove(i);
            if i > 0 {
                letters[i - 1].weight += removed.weight + 2 * q.weight + inc;
            }
        }
        true
    }

    fn eliminate_turn(&mut self, turn: SplitTurn) -> bool {
        let letters = match turn.side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        let i = turn.index;
        if i == 0 || i >= letters.len() || letters[i - 1].label != letters[i].label {
            return false;
        }
        let far = letters.remove(i - 1);
        let near = letters.remove(i - 1);
        if i >= 2 {
            letters[i - 2].weight += far.weight + near.weight;
        }
        self.ledger.charge(&far.weight);
        true
    }

    fn possible_turns(&self) -> Vec<SplitTurn> {
        let mut turns = Vec::new();
        for side in Side::BOTH {
            let letters = self.side(side);
            for index in (1..letters.len()).rev() {
                if letters[index].label == letters[index - 1].label {
                    turns.push(SplitTurn { side, index });
                }
            }
        }
        turns
    }

    fn total_increaser(&self) -> &AffineFn {
        self.ledger.total()
    }

    fn eliminations_done(&self) -> usize {
        self.ledger.done()
    }

    fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }
}

/// Prints `left | right` in word order, e.g. `1 2 | 2 1`.
impl fmt::Display for PreAcd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for l in &self.left {
            write!(f, "{} ", l.label)?;
        }
        write!(f, "|")?;
        for l in self.right.iter().rev() {
            write!(f, " {}", l.label)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_splits_and_reverses() {
        let d = PreAcd::from_word(&[1, 2, 3, 1]);
        assert_eq!(d.labels(Side::Left), vec![1, 2]);
        assert_eq!(d.labels(Side::Right), vec![1, 3]);
        assert_eq!(d.weights(Side::Right)[0], AffineFn::unit(3, 1, 5));
        assert_eq!(d.to_string(), "1 2 | 3 1");
    }

    #[test]
    fn side_elimination_updates_partner_neighbour() {
        // left [1(x1), 2(x2)], right [1(x3), 2(x4)]
        let mut d = PreAcd::from_word(&[1, 2, 2, 1]);
        assert!(d.eliminate_from_side(Side::Left, Regime::Finite));
        assert_eq!(d.total_increaser().coeffs(), &[1, 0, 2, 0, 0]);
        assert_eq!(d.labels(Side::Left), vec![1]);
        assert_eq!(d.weights(Side::Left)[0].coeffs(), &[0, 1, 1, 0, 0]);
        // partner was the nearest right letter; the one outside it absorbs
        assert_eq!(d.labels(Side::Right), vec![1]);
        assert_eq!(d.weights(Side::Right)[0].coeffs(), &[1, 0, 2, 1, 1]);
    }

    #[test]
    fn unpaired_letter_leaves_alone() {
        let mut d = PreAcd::from_word(&[1, 2]);
        assert!(d.eliminate_from_side(Side::Right, Regime::Limit));
        assert_eq!(d.total_increaser().coeffs(), &[0, 0, 2]);
        assert_eq!(d.len(), 1);
        assert!(!d.eliminate_from_side(Side::Right, Regime::Limit));
        assert_eq!(d.eliminations_done(), 1);
    }

    #[test]
    fn turns_are_interior_pairs_per_side() {
        // left [3, 1, 1], right [2, 2, 3]
        let d = PreAcd::from_word(&[3, 1, 1, 3, 2, 2]);
        assert_eq!(
            d.possible_turns(),
            vec![
                SplitTurn {
                    side: Side::Left,
                    index: 2
                },
                SplitTurn {
                    side: Side::Right,
                    index: 1
                },
            ]
        );
        let mut e = d.clone();
        assert!(e.eliminate_turn(SplitTurn {
            side: Side::Left,
            index: 2
        }));
        assert_eq!(e.labels(Side::Left), vec![3]);
        assert_eq!(e.total_increaser().coeffs(), &[0, 0, 1, 0, 0, 0, 0]);
        assert_eq!(e.weights(Side::Left)[0].coeffs(), &[0, 1, 1, 1, 0, 0, 0]);
        assert!(!e.eliminate_turn(SplitTurn {
            side: Side::Left,
            index: 1
        }));
        assert!(!e.eliminate_turn(SplitTurn {
            side: Side::Right,
            index: 0
        }));
        assert_eq!(e.eliminations_done(), 1);
    }

    #[test]
    fn straddling_pair_is_not_a_turn() {
        let d = PreAcd::from_word(&[1, 2, 2, 1]);
        assert!(d.possible_turns().is_empty());
    }
}
