//! Cyclic form: word plus one weight per gap.
//!
//! Layout
//! - `labels[i]` is the i-th letter of the linear representative.
//! - `weights[i]` is the segment before `labels[i]`; `weights[len]` is the
//!   segment after the last letter. Initially `weights[j] = x_{j+1}`.

use std::fmt;

use super::{ChordDiagram, CostLedger, Label, Side, Variant};
use crate::affine::{AffineFn, MAX_CHORDS};
use crate::regime::Regime;

/// Annotated chord diagram without a basepoint.
#[derive(Clone, Debug)]
pub struct Acd {
    labels: Vec<Label>,
    weights: Vec<AffineFn>,
    ledger: CostLedger,
}

impl Acd {
    /// Remaining letters, left to right.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Remaining gap weights (one more than `labels`).
    pub fn weights(&self) -> &[AffineFn] {
        &self.weights
    }
}

impl ChordDiagram for Acd {
    type Turn = Label;

    const VARIANT: Variant = Variant::Acd;

    fn from_word(word: &[Label]) -> Self {
        assert!(
            word.len() <= 2 * MAX_CHORDS,
            "word of length {} exceeds {} chords",
            word.len(),
            MAX_CHORDS
        );
        let arity = Self::VARIANT.arity(word.len());
        let weights = (1..=word.len() + 1)
            .map(|j| AffineFn::unit(j, 1, arity))
            .collect();
        Self {
            labels: word.to_vec(),
            weights,
            ledger: CostLedger::new(arity),
        }
    }

    fn eliminate_from_side(&mut self, side: Side, regime: Regime) -> bool {
        if self.labels.is_empty() {
            return false;
        }
        let inc = regime.unit_increment();
        let p = match side {
            Side::Left => {
                let p = self.weights.remove(0);
                let label = self.labels.remove(0);
                self.weights[0] += &p;
                if let Some(j) = self.labels.iter().position(|&l| l == label) {
                    let after = self.weights.remove(j + 1);
                    self.weights[j] += 2 * p + after + inc;
                    self.labels.remove(j);
                }
                p
            }
            Side::Right => {
                let last = self.weights.len() - 1;
                let p = self.weights.remove(last);
                let label = self.labels.remove(last - 1);
                self.weights[last - 1] += &p;
                if let Some(j) = self.labels.iter().rposition(|&l| l == label) {
                    let before = self.weights.remove(j);
                    self.weights[j] += 2 * p + before + inc;
                    self.labels.remove(j);
                }
                p
            }
        };
        self.ledger.charge(&(2 * p + inc));
        true
    }

    fn eliminate_turn(&mut self, label: Label) -> bool {
        let Some(i) = self.labels.iter().position(|&l| l == label) else {
            return false;
        };
        if self.labels.get(i + 1) != Some(&label) {
            return false;
        }
        let inner = self.weights.remove(i + 1);
        let after = self.weights.remove(i + 1);
        self.weights[i] += inner + after;
        self.labels.drain(i..i + 2);
        self.ledger.charge(&inner);
        true
    }

    fn possible_turns(&self) -> Vec<Label> {
        self.labels
            .windows(2)
            .filter(|w| w[0] == w[1])
            .map(|w| w[1])
            .collect()
    }

    fn total_increaser(&self) -> &AffineFn {
        self.ledger.total()
    }

    fn eliminations_done(&self) -> usize {
        self.ledger.done()
    }

    fn len(&self) -> usize {
        self.labels.len()
    }
}

impl fmt::Display for Acd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, l) in self.labels.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{l}")?;
        }
        Ok(())
    }
}
