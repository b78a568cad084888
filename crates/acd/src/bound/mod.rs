//! Worst-case linear program over a set of cost functions.
//!
//! Program (x_0 = 1 is the constant slot):
//!
//! ```text
//! maximize   x_{n+1}
//! subject to 0 <= x_i <= m                 (i = 1..n)
//!            x_1 + .. + x_n <= m
//!            f_j(x) >= x_{n+1}             (every collected f_j)
//! ```
//!
//! `m` is the regime's box bound. The optimum is the largest value every
//! reduction order is forced to pay for some admissible choice of segment
//! lengths.
//!
//! Reformulation for the solver
//! - The constant terms move to the right-hand side.
//! - The free variable is shifted, `x_{n+1} = s - T` with
//!   `T = max(0, -min_j f_j(0))`, so `s >= 0` loses nothing (the origin is
//!   feasible with `x_{n+1} = min_j f_j(0)`) and every right-hand side is
//!   nonnegative. The all-slack basis is then feasible and no phase one runs.

mod simplex;
mod types;

pub use types::{BoundError, BoundSolution, SolverCfg};

use std::collections::BTreeSet;

use nalgebra::{DMatrix, DVector};

use crate::affine::AffineFn;
use crate::regime::Regime;

/// Solve the worst-case program and return the optimum with its point.
pub fn solve_bound(
    funcs: &BTreeSet<AffineFn>,
    regime: Regime,
    cfg: SolverCfg,
) -> Result<BoundSolution, BoundError> {
    let first = funcs.first().ok_or(BoundError::NoConstraints)?;
    let arity = first.arity();
    let n = arity - 1;
    let m_box = regime.box_bound();
    let min_const = funcs.iter().map(AffineFn::constant_term).min().unwrap_or(0);
    let shift = f64::from((-min_const).max(0));

    let rows = funcs.len() + n + 1;
    let mut a = DMatrix::<f64>::zeros(rows, n + 1);
    let mut b = DVector::<f64>::zeros(rows);
    for (r, f) in funcs.iter().enumerate() {
        assert_eq!(f.arity(), arity, "cost functions of different arity");
        for i in 1..arity {
            a[(r, i - 1)] = -f64::from(f.coeff(i));
        }
        a[(r, n)] = 1.0;
        b[r] = f64::from(f.constant_term()) + shift;
    }
    let box_row = funcs.len();
    for i in 0..n {
        a[(box_row + i, i)] = 1.0;
        b[box_row + i] = m_box;
    }
    let sum_row = rows - 1;
    for i in 0..n {
        a[(sum_row, i)] = 1.0;
    }
    b[sum_row] = m_box;

    let mut c = DVector::<f64>::zeros(n + 1);
    c[n] = 1.0;

    let opt = simplex::maximize(&c, &a, &b, cfg)?;
    let value = opt.value - shift;
    let mut point = Vec::with_capacity(arity + 1);
    point.push(1.0);
    point.extend(opt.y.iter().take(n).copied());
    point.push(value);
    Ok(BoundSolution { value, point })
}

/// Optimal value of the worst-case program with default tolerances.
pub fn worst_case_bound(funcs: &BTreeSet<AffineFn>, regime: Regime) -> Result<f64, BoundError> {
    solve_bound(funcs, regime, SolverCfg::default()).map(|s| s.value)
}
