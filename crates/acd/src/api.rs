//! Curated internal API (UNSTABLE).
//!
//! Not a public API. A convenience surface for the CLI, benches and probes;
//! breaking changes are allowed.

// Cost functions and regimes
pub use crate::affine::{AffineFn, MAX_ARITY, MAX_CHORDS};
pub use crate::regime::Regime;
// Diagrams and moves
pub use crate::diagram::{Acd, ChordDiagram, Label, PreAcd, Side, SplitTurn, Variant};
// Search and bound
pub use crate::bound::{solve_bound, worst_case_bound, BoundError, BoundSolution, SolverCfg};
pub use crate::search::collect_reachable_costs;
// Enumeration
pub use crate::enumerate::{
    compute_worst_case_estimates, compute_worst_case_estimates_with, for_each_word, EnumCfg,
    EstimateError, Estimates, Schedule,
};
