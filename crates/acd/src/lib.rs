//! Worst-case reduction costs of annotated chord diagrams.
//!
//! Pipeline
//! - `enumerate` generates every interesting double-occurrence word of a
//!   given size and reads it as a diagram (`diagram`).
//! - `search` explores all complete reduction orders and collects the affine
//!   cost each order pays (`affine`).
//! - `bound` solves the worst-case linear program over those costs, once per
//!   `regime`.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API; `api`
//!   collects the entry points callers are expected to use.

pub mod affine;
pub mod api;
pub mod bound;
pub mod diagram;
pub mod enumerate;
pub mod regime;
pub mod search;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use affine::{AffineFn, MAX_CHORDS};
pub use diagram::{Acd, ChordDiagram, PreAcd, Variant};
pub use enumerate::{compute_worst_case_estimates, Estimates};
pub use regime::Regime;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::affine::AffineFn;
    pub use crate::bound::{solve_bound, worst_case_bound, SolverCfg};
    pub use crate::diagram::{Acd, ChordDiagram, Label, PreAcd, Side, Variant};
    pub use crate::regime::Regime;
    pub use crate::search::collect_reachable_costs;
}
