//! Depth-first word builder.

use super::prune::{is_prunable, next_labels};
use crate::diagram::{Label, Variant};

/// Starting point of a walk: `prefix` is taken as given, `next` is appended
/// (and filtered) first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Seed {
    pub prefix: Vec<Label>,
    pub next: Label,
}

impl Seed {
    /// Whole search tree.
    pub(crate) fn root() -> Self {
        Self {
            prefix: Vec::new(),
            next: 1,
        }
    }
}

/// Builds words label by label, skipping pruned branches, and hands every
/// word of length `stop_at` to the visitor. The visitor's error aborts the walk.
pub(crate) struct WordWalker {
    variant: Variant,
    size: usize,
    stop_at: usize,
    word: Vec<Label>,
}

impl WordWalker {
    /// Walker emitting complete words (`2 * size` letters).
    pub(crate) fn new(variant: Variant, size: usize) -> Self {
        Self::stopping_at(variant, size, 2 * size)
    }

    /// Walker emitting words of `stop_at` letters (clamped to a complete word).
    pub(crate) fn stopping_at(variant: Variant, size: usize, stop_at: usize) -> Self {
        Self {
            variant,
            size,
            stop_at: stop_at.min(2 * size),
            word: Vec::with_capacity(2 * size),
        }
    }

    pub(crate) fn run<E, F>(&mut self, seed: &Seed, visit: &mut F) -> Result<(), E>
    where
        F: FnMut(&[Label]) -> Result<(), E>,
    {
        self.word.clear();
        self.word.extend_from_slice(&seed.prefix);
        self.descend(seed.next, visit)
    }

    fn descend<E, F>(&mut self, next: Label, visit: &mut F) -> Result<(), E>
    where
        F: FnMut(&[Label]) -> Result<(), E>,
    {
        self.word.push(next);
        let res = self.expand(visit);
        self.word.pop();
        res
    }

    fn expand<E, F>(&mut self, visit: &mut F) -> Result<(), E>
    where
        F: FnMut(&[Label]) -> Result<(), E>,
    {
        if is_prunable(&self.word, self.size, self.variant) {
            return Ok(());
        }
        if self.word.len() == self.stop_at {
            return visit(&self.word);
        }
        for label in next_labels(&self.word, self.size, self.variant) {
            self.descend(label, visit)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    fn words(variant: Variant, size: usize) -> Vec<Vec<Label>> {
        let mut out = Vec::new();
        WordWalker::new(variant, size)
            .run(&Seed::root(), &mut |w: &[Label]| {
                out.push(w.to_vec());
                Ok::<(), Infallible>(())
            })
            .unwrap();
        out
    }

    #[test]
    fn size_one_and_two_words() {
        assert_eq!(words(Variant::Acd, 1), vec![vec![1, 1]]);
        assert_eq!(words(Variant::PreAcd, 1), vec![vec![1, 1], vec![1, 2]]);
        assert_eq!(
            words(Variant::Acd, 2),
            vec![vec![1, 1, 2, 2], vec![1, 2, 1, 2], vec![1, 2, 2, 1]]
        );
        assert_eq!(words(Variant::PreAcd, 2).len(), 10);
    }

    #[test]
    fn visitor_error_stops_walk() {
        let mut seen = 0;
        let res = WordWalker::new(Variant::PreAcd, 3).run(&Seed::root(), &mut |_: &[Label]| {
            seen += 1;
            if seen == 5 {
                Err("stop")
            } else {
                Ok(())
            }
        });
        assert_eq!(res, Err("stop"));
        assert_eq!(seen, 5);
    }

    #[test]
    fn partial_walk_stops_at_depth() {
        let mut prefixes = Vec::new();
        WordWalker::stopping_at(Variant::Acd, 3, 2)
            .run(&Seed::root(), &mut |w: &[Label]| {
                prefixes.push(w.to_vec());
                Ok::<(), Infallible>(())
            })
            .unwrap();
        assert_eq!(prefixes, vec![vec![1, 1], vec![1, 2]]);
    }
}
