//! Exhaustive search over reduction orders.
//!
//! From a diagram, every sequence of moves is explored depth-first until the
//! target number of eliminations is reached; the accumulated cost of each
//! leaf is collected into a set. The set (not the visiting order) is the
//! result, so exploration order only matters for speed.

use std::collections::BTreeSet;

use crate::affine::AffineFn;
use crate::diagram::{ChordDiagram, Side};
use crate::regime::Regime;

/// All distinct total costs reachable after exactly `target` eliminations.
pub fn collect_reachable_costs<D: ChordDiagram>(
    diagram: &D,
    target: usize,
    regime: Regime,
) -> BTreeSet<AffineFn> {
    let mut runner = ReachRunner {
        target,
        regime,
        found: BTreeSet::new(),
    };
    runner.recur(diagram.clone());
    runner.found
}

struct ReachRunner {
    target: usize,
    regime: Regime,
    found: BTreeSet<AffineFn>,
}

impl ReachRunner {
    fn recur<D: ChordDiagram>(&mut self, mut state: D) {
        if state.eliminations_done() == self.target {
            self.found.insert(*state.total_increaser());
            return;
        }
        for turn in state.possible_turns() {
            let mut next = state.clone();
            if next.eliminate_turn(turn) {
                self.recur(next);
            }
        }
        let mut left = state.clone();
        if left.eliminate_from_side(Side::Left, self.regime) {
            self.recur(left);
        }
        // Last branch reuses the current state instead of cloning it.
        if state.eliminate_from_side(Side::Right, self.regime) {
            self.recur(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::{Acd, Label, PreAcd};

    fn coeff_rows(set: &BTreeSet<AffineFn>) -> Vec<Vec<i32>> {
        set.iter().map(|f| f.coeffs().to_vec()).collect()
    }

    /// Same exploration with sides first and turns reversed.
    fn collect_sides_first<D: ChordDiagram>(
        d: D,
        target: usize,
        regime: Regime,
        out: &mut BTreeSet<AffineFn>,
    ) {
        if d.eliminations_done() == target {
            out.insert(*d.total_increaser());
            return;
        }
        for side in [Side::Right, Side::Left] {
            let mut next = d.clone();
            if next.eliminate_from_side(side, regime) {
                collect_sides_first(next, target, regime, out);
            }
        }
        for turn in d.possible_turns().into_iter().rev() {
            let mut next = d.clone();
            if next.eliminate_turn(turn) {
                collect_sides_first(next, target, regime, out);
            }
        }
    }

    const WORDS: &[&[Label]] = &[
        &[1, 1],
        &[1, 2, 1, 2],
        &[1, 1, 2, 2],
        &[1, 2, 2, 1],
        &[1, 2, 3, 1, 2, 3],
        &[1, 2, 3, 2, 1, 3],
        &[1, 2, 3, 4, 2, 1, 4, 3],
    ];

    #[test]
    fn acd_single_chord() {
        let d = Acd::from_word(&[1, 1]);
        let fin = collect_reachable_costs(&d, 1, Regime::Finite);
        assert_eq!(
            coeff_rows(&fin),
            vec![vec![0, 0, 1, 0], vec![1, 0, 0, 2], vec![1, 2, 0, 0]]
        );
        let lim = collect_reachable_costs(&d, 1, Regime::Limit);
        assert_eq!(
            coeff_rows(&lim),
            vec![vec![0, 0, 0, 2], vec![0, 0, 1, 0], vec![0, 2, 0, 0]]
        );
    }

    #[test]
    fn acd_crossing_pair() {
        let d = Acd::from_word(&[1, 2, 1, 2]);
        let fin = collect_reachable_costs(&d, 2, Regime::Finite);
        assert_eq!(
            coeff_rows(&fin),
            vec![
                vec![2, 0, 0, 0, 2, 4],
                vec![2, 0, 1, 1, 0, 4],
                vec![2, 2, 0, 0, 0, 2],
                vec![2, 4, 0, 1, 1, 0],
                vec![2, 4, 2, 0, 0, 0],
            ]
        );
    }

    #[test]
    fn pre_acd_nested_pair() {
        let d = PreAcd::from_word(&[1, 2, 2, 1]);
        let fin = collect_reachable_costs(&d, 2, Regime::Finite);
        assert_eq!(
            coeff_rows(&fin),
            vec![
                vec![2, 0, 0, 2, 4],
                vec![2, 2, 4, 0, 0],
                vec![4, 0, 6, 2, 2],
                vec![4, 2, 2, 0, 6],
            ]
        );
    }

    #[test]
    fn target_zero_yields_zero_cost() {
        let d = PreAcd::from_word(&[1, 2, 1, 2]);
        let set = collect_reachable_costs(&d, 0, Regime::Finite);
        assert_eq!(set.len(), 1);
        assert_eq!(set.first(), Some(&AffineFn::zero(5)));
    }

    #[test]
    fn exploration_order_does_not_change_result() {
        for word in WORDS {
            let k = word.len() / 2;
            for regime in Regime::ALL {
                let a = collect_reachable_costs(&Acd::from_word(word), k, regime);
                let mut b = BTreeSet::new();
                collect_sides_first(Acd::from_word(word), k, regime, &mut b);
                assert_eq!(a, b, "cyclic {word:?}");

                let a = collect_reachable_costs(&PreAcd::from_word(word), k, regime);
                let mut b = BTreeSet::new();
                collect_sides_first(PreAcd::from_word(word), k, regime, &mut b);
                assert_eq!(a, b, "split {word:?}");
            }
        }
    }

    #[test]
    fn reversed_word_gives_relabelled_costs() {
        for word in WORDS {
            let n = word.len();
            let half = n / 2;
            let rev: Vec<Label> = word.iter().rev().copied().collect();
            for regime in Regime::ALL {
                let a = collect_reachable_costs(&Acd::from_word(word), half, regime);
                let b: BTreeSet<_> = collect_reachable_costs(&Acd::from_word(&rev), half, regime)
                    .into_iter()
                    .map(|f| f.relabel(|i| if i == 0 { 0 } else { n + 2 - i }))
                    .collect();
                assert_eq!(a, b, "cyclic {word:?}");

                let a = collect_reachable_costs(&PreAcd::from_word(word), half, regime);
                let b: BTreeSet<_> =
                    collect_reachable_costs(&PreAcd::from_word(&rev), half, regime)
                        .into_iter()
                        .map(|f| {
                            f.relabel(|i| match i {
                                0 => 0,
                                i if i <= half => i + half,
                                i => i - half,
                            })
                        })
                        .collect();
                assert_eq!(a, b, "split {word:?}");
            }
        }
    }
}
