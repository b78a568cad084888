//! Finite-parameter vs. limit regime.
//!
//! The same flag drives two things: whether a side elimination pays the unit
//! increment for the new crossing, and the box bound `m` of the linear program.

/// Which asymptotic regime a computation runs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Regime {
    /// Fixed number of crossings of the starting curve (`m = 8`).
    Finite,
    /// `m -> inf`: unit increments are negligible and the box is normalised to 1.
    Limit,
}

impl Regime {
    pub const ALL: [Regime; 2] = [Regime::Finite, Regime::Limit];

    /// Constant added by a side elimination.
    #[inline]
    pub fn unit_increment(self) -> i32 {
        match self {
            Regime::Finite => 1,
            Regime::Limit => 0,
        }
    }

    /// Upper bound `m` on each segment length and on their sum.
    #[inline]
    pub fn box_bound(self) -> f64 {
        match self {
            Regime::Finite => 8.0,
            Regime::Limit => 1.0,
        }
    }

    /// Ratio reported for a worst-case value in this regime.
    ///
    /// Finite values are divided by the 8 starting crossings; both are shifted
    /// by the crossing of the starting curve itself.
    pub fn normalise(self, value: f64) -> f64 {
        match self {
            Regime::Finite => value / self.box_bound() + 1.0,
            Regime::Limit => value + 1.0,
        }
    }
}
