//! Worst-case estimates over all interesting diagrams of one size.
//!
//! Purpose
//! - Generate every word of `2 * size` labels (up to relabelling) that the
//!   pruning rules keep, read it as a diagram, collect its reachable costs
//!   for both regimes and bound them with the worst-case program.
//! - Report the number of diagrams and the maximum bound per regime.
//!
//! Concurrency
//! - Small sizes run on the calling thread. From `parallel_from` on, the word
//!   tree is cut into seeds (see `schedule`) and the seeds run on a dedicated
//!   rayon pool. Each seed owns its word buffer and tally; tallies are merged
//!   after all seeds finish, so results do not depend on thread timing.

mod prune;
mod schedule;
mod walk;

use std::convert::Infallible;
use std::fmt;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::affine::MAX_CHORDS;
use crate::bound::{solve_bound, BoundError, SolverCfg};
use crate::diagram::{Acd, ChordDiagram, Label, PreAcd, Variant};
use crate::regime::Regime;
use crate::search::collect_reachable_costs;
use walk::{Seed, WordWalker};

/// How the word tree is split across workers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Schedule {
    /// Eleven fixed seeds for sizes >= 6; frontier seeds below that.
    HandTuned,
    /// One seed per non-pruned prefix of `depth` labels.
    Frontier { depth: usize },
}

/// Enumerator configuration.
#[derive(Clone, Copy, Debug)]
pub struct EnumCfg {
    /// Worker threads in the dedicated pool.
    pub threads: usize,
    /// Sizes below this run sequentially.
    pub parallel_from: usize,
    pub schedule: Schedule,
    pub solver: SolverCfg,
}

impl Default for EnumCfg {
    fn default() -> Self {
        Self {
            threads: 11,
            parallel_from: 6,
            schedule: Schedule::HandTuned,
            solver: SolverCfg::default(),
        }
    }
}

/// Result for one (variant, size) pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Estimates {
    pub variant: Variant,
    pub size: usize,
    /// Number of diagrams examined.
    pub diagrams: u64,
    /// Maximum bound with `m = 8`; `-inf` if no diagram survived pruning.
    pub finite: f64,
    /// Maximum bound in the limit regime, if requested.
    pub limit: Option<f64>,
}

impl Estimates {
    /// `finite / 8 + 1`, the published form.
    pub fn finite_ratio(&self) -> f64 {
        Regime::Finite.normalise(self.finite)
    }

    /// `limit + 1`, the published form.
    pub fn limit_ratio(&self) -> Option<f64> {
        self.limit.map(|v| Regime::Limit.normalise(v))
    }
}

#[derive(Debug)]
pub enum EstimateError {
    SizeOutOfRange { size: usize, max: usize },
    ThreadPool(String),
    Bound(BoundError),
}

impl fmt::Display for EstimateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeOutOfRange { size, max } => {
                write!(f, "diagram size {size} outside supported range 1..={max}")
            }
            Self::ThreadPool(reason) => write!(f, "cannot start worker pool: {reason}"),
            Self::Bound(e) => write!(f, "bound solver failed: {e}"),
        }
    }
}

impl std::error::Error for EstimateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bound(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BoundError> for EstimateError {
    fn from(e: BoundError) -> Self {
        Self::Bound(e)
    }
}

/// Diagram count and worst-case bounds for all diagrams of `size` chords.
pub fn compute_worst_case_estimates(
    variant: Variant,
    size: usize,
    include_limit: bool,
) -> Result<Estimates, EstimateError> {
    compute_worst_case_estimates_with(variant, size, include_limit, &EnumCfg::default())
}

/// As `compute_worst_case_estimates`, with explicit configuration.
pub fn compute_worst_case_estimates_with(
    variant: Variant,
    size: usize,
    include_limit: bool,
    cfg: &EnumCfg,
) -> Result<Estimates, EstimateError> {
    if size == 0 || size > MAX_CHORDS {
        return Err(EstimateError::SizeOutOfRange {
            size,
            max: MAX_CHORDS,
        });
    }
    match variant {
        Variant::PreAcd => estimate::<PreAcd>(size, include_limit, cfg),
        Variant::Acd => estimate::<Acd>(size, include_limit, cfg),
    }
}

/// Visit every word the enumerator would score, in search order.
pub fn for_each_word(variant: Variant, size: usize, mut f: impl FnMut(&[Label])) {
    WordWalker::new(variant, size)
        .run(&Seed::root(), &mut |w: &[Label]| {
            f(w);
            Ok::<(), Infallible>(())
        })
        .unwrap_or_else(|never| match never {});
}

#[derive(Clone, Copy, Debug)]
struct Tally {
    diagrams: u64,
    finite: f64,
    limit: f64,
}

impl Tally {
    const EMPTY: Tally = Tally {
        diagrams: 0,
        finite: f64::NEG_INFINITY,
        limit: f64::NEG_INFINITY,
    };

    fn merge(self, other: Tally) -> Tally {
        Tally {
            diagrams: self.diagrams + other.diagrams,
            finite: self.finite.max(other.finite),
            limit: self.limit.max(other.limit),
        }
    }
}

fn estimate<D: ChordDiagram>(
    size: usize,
    include_limit: bool,
    cfg: &EnumCfg,
) -> Result<Estimates, EstimateError> {
    let seeds = schedule::plan(D::VARIANT, size, cfg);
    let tally = if seeds.len() == 1 {
        debug!(variant = %D::VARIANT, size, "sequential enumeration");
        run_seed::<D>(&seeds[0], size, include_limit, cfg.solver)?
    } else {
        debug!(
            variant = %D::VARIANT,
            size,
            seeds = seeds.len(),
            threads = cfg.threads,
            "parallel enumeration"
        );
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(cfg.threads)
            .build()
            .map_err(|e| EstimateError::ThreadPool(e.to_string()))?;
        let solver = cfg.solver;
        let parts = pool.install(|| {
            seeds
                .par_iter()
                .map(|seed| run_seed::<D>(seed, size, include_limit, solver))
                .collect::<Result<Vec<_>, _>>()
        })?;
        parts.into_iter().fold(Tally::EMPTY, Tally::merge)
    };
    Ok(Estimates {
        variant: D::VARIANT,
        size,
        diagrams: tally.diagrams,
        finite: tally.finite,
        limit: include_limit.then_some(tally.limit),
    })
}

fn run_seed<D: ChordDiagram>(
    seed: &Seed,
    size: usize,
    include_limit: bool,
    solver: SolverCfg,
) -> Result<Tally, BoundError> {
    let mut tally = Tally::EMPTY;
    WordWalker::new(D::VARIANT, size).run(seed, &mut |word: &[Label]| {
        let diagram = D::from_word(word);
        tally.diagrams += 1;
        let finite = collect_reachable_costs(&diagram, size, Regime::Finite);
        tally.finite = tally
            .finite
            .max(solve_bound(&finite, Regime::Finite, solver)?.value);
        if include_limit {
            let limit = collect_reachable_costs(&diagram, size, Regime::Limit);
            tally.limit = tally
                .limit
                .max(solve_bound(&limit, Regime::Limit, solver)?.value);
        }
        Ok::<(), BoundError>(())
    })?;
    trace!(prefix = ?seed.prefix, next = seed.next, diagrams = tally.diagrams, "seed done");
    Ok(tally)
}
