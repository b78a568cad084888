//! Candidate labels and the "not interesting" filter.

use crate::diagram::{Label, Variant};

/// Smallest size at which pruning kicks in.
const PRUNE_FROM: usize = 4;
/// Smallest size at which the distinct-window rule applies.
const WINDOW_FROM: usize = 6;

/// True if no completion of `word` can be extremal.
///
/// - A chord of length one (two adjacent equal labels) reduces trivially. In
///   the split form the pair straddling the basepoint (`i == size`) is not
///   adjacent on the curve and stays.
/// - If the last `size` labels are pairwise distinct, the rest can be
///   eliminated without revisiting an eliminated chord.
pub(crate) fn is_prunable(word: &[Label], size: usize, variant: Variant) -> bool {
    if size < PRUNE_FROM {
        return false;
    }
    let basepoint = match variant {
        Variant::PreAcd => Some(size),
        Variant::Acd => None,
    };
    let short_chord = word
        .windows(2)
        .enumerate()
        .any(|(i, w)| w[0] == w[1] && basepoint != Some(i + 1));
    if short_chord {
        return true;
    }
    if size >= WINDOW_FROM && word.len() >= size {
        let window = &word[word.len() - size..];
        let seen = window.iter().fold(0u64, |acc, &l| acc | 1u64 << l);
        return seen.count_ones() as usize == size;
    }
    false
}

/// Labels that may follow `word`, ascending: every label seen an odd number
/// of times, then a fresh one. The cyclic form stops handing out fresh labels
/// at `size`; the split form may leave labels unpaired and never stops.
pub(crate) fn next_labels(word: &[Label], size: usize, variant: Variant) -> Vec<Label> {
    let mut open = 0u64;
    let mut max: Label = 0;
    for &l in word {
        open ^= 1u64 << l;
        max = max.max(l);
    }
    let mut out: Vec<Label> = (1..=max).filter(|&l| open & (1u64 << l) != 0).collect();
    if usize::from(max) < size || variant == Variant::PreAcd {
        out.push(max + 1);
    }
    out
}
