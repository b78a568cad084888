//! Splitting the word tree into independent seeds.
//!
//! Two schedules:
//! - Hand-tuned: eleven fixed seeds that balance well for sizes 6 and up.
//!   They rely on the short-chord pruning (so `[.., 5, 5]` never needs a
//!   seed) and on label 6 being available, hence the size floor.
//! - Frontier: every non-pruned prefix of a given length becomes a seed.
//!   Works for any size; more seeds give the thread pool more to steal.

use std::convert::Infallible;

use super::walk::{Seed, WordWalker};
use super::{EnumCfg, Schedule};
use crate::diagram::{Label, Variant};

/// Smallest size the hand-tuned seeds are valid for.
pub(crate) const HAND_TUNED_MIN_SIZE: usize = 6;

/// Frontier depth used when the hand-tuned seeds do not apply.
pub(crate) const DEFAULT_FRONTIER_DEPTH: usize = 4;

const HAND_TUNED: [(&[Label], Label); 11] = [
    (&[1, 2, 3, 4, 5], 6),
    (&[1, 2, 3, 4, 5], 4),
    (&[1, 2, 3, 4, 5], 3),
    (&[1, 2, 3, 4, 5], 2),
    (&[1, 2, 3, 4, 5], 1),
    (&[1, 2, 3, 4], 3),
    (&[1, 2, 3, 4], 2),
    (&[1, 2, 3, 4], 1),
    (&[1, 2, 3], 2),
    (&[1, 2, 3], 1),
    (&[1, 2], 1),
];

pub(crate) fn hand_tuned_seeds() -> Vec<Seed> {
    HAND_TUNED
        .iter()
        .map(|&(prefix, next)| Seed {
            prefix: prefix.to_vec(),
            next,
        })
        .collect()
}

/// One seed per surviving word prefix of length `depth`.
pub(crate) fn frontier_seeds(variant: Variant, size: usize, depth: usize) -> Vec<Seed> {
    let mut seeds = Vec::new();
    WordWalker::stopping_at(variant, size, depth.max(1))
        .run(&Seed::root(), &mut |w: &[Label]| {
            if let Some((&next, prefix)) = w.split_last() {
                seeds.push(Seed {
                    prefix: prefix.to_vec(),
                    next,
                });
            }
            Ok::<(), Infallible>(())
        })
        .unwrap_or_else(|never| match never {});
    seeds
}

/// Seeds for one run; a single root seed means "run sequentially".
pub(crate) fn plan(variant: Variant, size: usize, cfg: &EnumCfg) -> Vec<Seed> {
    if size < cfg.parallel_from || cfg.threads <= 1 {
        return vec![Seed::root()];
    }
    match cfg.schedule {
        Schedule::HandTuned if size >= HAND_TUNED_MIN_SIZE => hand_tuned_seeds(),
        Schedule::HandTuned => frontier_seeds(variant, size, DEFAULT_FRONTIER_DEPTH),
        Schedule::Frontier { depth } => frontier_seeds(variant, size, depth),
    }
}
