//! Solver configuration, result and error types.

use std::collections::BTreeSet;
use std::fmt;

use crate::affine::AffineFn;

/// Simplex tolerances and limits.
#[derive(Clone, Copy, Debug)]
pub struct SolverCfg {
    /// Reduced costs and pivot candidates within this of zero count as zero.
    pub eps_pivot: f64,
    /// Allowed constraint violation when checking the final point.
    pub eps_feas: f64,
    /// Hard cap on pivots; Bland's rule terminates long before this.
    pub max_pivots: usize,
}

impl Default for SolverCfg {
    fn default() -> Self {
        Self {
            eps_pivot: 1e-9,
            eps_feas: 1e-7,
            max_pivots: 10_000,
        }
    }
}

/// Optimum of the worst-case program for one set of cost functions.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundSolution {
    /// Optimal auxiliary variable: the largest value all costs can be pushed to.
    pub value: f64,
    /// `(x_0 = 1, x_1, .., x_n, x_{n+1} = value)`.
    pub point: Vec<f64>,
}

impl BoundSolution {
    /// Segment lengths `x_1..x_n` at the optimum.
    pub fn segments(&self) -> &[f64] {
        &self.point[1..self.point.len() - 1]
    }

    /// Cost functions that attain the optimum (within `tol`) at `point`.
    pub fn tight<'a>(&self, funcs: &'a BTreeSet<AffineFn>, tol: f64) -> Vec<&'a AffineFn> {
        funcs
            .iter()
            .filter(|f| f.eval(&self.point) - self.value <= tol)
            .collect()
    }
}

/// Failures of the bound solver. With well-formed input none of these occur;
/// they are surfaced rather than swallowed.
#[derive(Clone, Debug, PartialEq)]
pub enum BoundError {
    /// The constraint set was empty, so the program is unbounded by construction.
    NoConstraints,
    /// A right-hand side was negative; the all-slack basis is not feasible.
    InfeasibleStart,
    /// An entering column had no positive entry.
    Unbounded,
    /// Pivot budget exhausted.
    IterationLimit { pivots: usize },
    /// The optimum violates a constraint by more than the tolerance.
    Inconsistent { residual: f64 },
}

impl fmt::Display for BoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoConstraints => write!(f, "no cost functions to bound"),
            Self::InfeasibleStart => write!(f, "initial basis infeasible (negative right-hand side)"),
            Self::Unbounded => write!(f, "linear program is unbounded"),
            Self::IterationLimit { pivots } => write!(f, "simplex did not converge in {pivots} pivots"),
            Self::Inconsistent { residual } => {
                write!(f, "optimum violates a constraint by {residual:e}")
            }
        }
    }
}

impl std::error::Error for BoundError {}
