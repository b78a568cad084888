//! Dense primal simplex for `max c·y  s.t.  A y <= b, y >= 0` with `b >= 0`.
//!
//! - Tableau `[A | I | b]` plus an objective row, stored in one `DMatrix`.
//! - Bland's rule (lowest index enters, lowest basic index breaks ratio ties)
//!   so the degenerate starting vertex cannot make it cycle.
//! - Sizes here are tiny (tens of rows, < 20 columns); no sparsity tricks.

use nalgebra::{DMatrix, DVector};

use super::types::{BoundError, SolverCfg};

/// Optimal value and primal point of a solved program.
#[derive(Clone, Debug)]
pub(crate) struct LpOptimum {
    pub value: f64,
    pub y: DVector<f64>,
}

pub(crate) fn maximize(
    c: &DVector<f64>,
    a: &DMatrix<f64>,
    b: &DVector<f64>,
    cfg: SolverCfg,
) -> Result<LpOptimum, BoundError> {
    let (m, nv) = a.shape();
    debug_assert_eq!(c.len(), nv);
    debug_assert_eq!(b.len(), m);
    if b.iter().any(|&v| v < -cfg.eps_feas) {
        return Err(BoundError::InfeasibleStart);
    }

    let rhs = nv + m;
    let mut t = DMatrix::<f64>::zeros(m + 1, rhs + 1);
    t.view_mut((0, 0), (m, nv)).copy_from(a);
    for i in 0..m {
        t[(i, nv + i)] = 1.0;
        t[(i, rhs)] = b[i].max(0.0);
    }
    for j in 0..nv {
        t[(m, j)] = -c[j];
    }
    let mut basis: Vec<usize> = (nv..nv + m).collect();

    for _ in 0..cfg.max_pivots {
        let Some(e) = (0..rhs).find(|&j| t[(m, j)] < -cfg.eps_pivot) else {
            let mut y = DVector::zeros(nv);
            for (i, &var) in basis.iter().enumerate() {
                if var < nv {
                    y[var] = t[(i, rhs)];
                }
            }
            let residual = (a * &y - b).max();
            if residual > cfg.eps_feas {
                return Err(BoundError::Inconsistent { residual });
            }
            return Ok(LpOptimum {
                value: t[(m, rhs)],
                y,
            });
        };

        let mut leave: Option<(usize, f64)> = None;
        for i in 0..m {
            let aie = t[(i, e)];
            if aie <= cfg.eps_pivot {
                continue;
            }
            let ratio = t[(i, rhs)] / aie;
            leave = match leave {
                Some((r, best))
                    if ratio > best + cfg.eps_pivot
                        || (ratio >= best - cfg.eps_pivot && basis[r] < basis[i]) =>
                {
                    Some((r, best))
                }
                _ => Some((i, ratio)),
            };
        }
        let Some((r, _)) = leave else {
            return Err(BoundError::Unbounded);
        };
        pivot(&mut t, r, e);
        basis[r] = e;
    }
    Err(BoundError::IterationLimit {
        pivots: cfg.max_pivots,
    })
}

/// Make column `e` the unit vector at row `r` (rank-one update).
fn pivot(t: &mut DMatrix<f64>, r: usize, e: usize) {
    let p = t[(r, e)];
    {
        let mut row = t.row_mut(r);
        row /= p;
    }
    let pivot_row = t.row(r).into_owned();
    let mut col = t.column(e).into_owned();
    col[r] = 0.0;
    *t -= col * pivot_row;
    for i in 0..t.nrows() {
        t[(i, e)] = if i == r { 1.0 } else { 0.0 };
    }
}
