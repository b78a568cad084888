//! Integer affine functions of a fixed, small number of variables.
//!
//! Purpose
//! - Cost domain of the reduction moves: every weight in a diagram and the
//!   accumulated total are affine in the segment lengths `x_1..x_n`.
//! - Variable `0` is the constant term.
//!
//! Conventions
//! - Coefficients live in an inline array of capacity `MAX_ARITY`; the active
//!   prefix has length `arity`, the tail is always zero.
//! - Combining two functions of different arity is a caller bug and panics.
//! - `Ord` is lexicographic over the active coefficients. It exists to
//!   deduplicate functions in a `BTreeSet` and says nothing about magnitude.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign};

/// Largest diagram size (number of chords) the crate supports.
pub const MAX_CHORDS: usize = 6;

/// Inline coefficient capacity; covers the cyclic form (`2k + 2`) with room to spare.
pub const MAX_ARITY: usize = 2 * MAX_CHORDS + 3;

/// Affine function `c_0 + c_1 x_1 + ... + c_{n-1} x_{n-1}` with integer coefficients.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AffineFn {
    coef: [i32; MAX_ARITY],
    arity: u8,
}

impl AffineFn {
    /// The zero function of the given arity.
    pub fn zero(arity: usize) -> Self {
        assert!(
            arity >= 1 && arity <= MAX_ARITY,
            "arity {arity} outside 1..={MAX_ARITY}"
        );
        Self {
            coef: [0; MAX_ARITY],
            arity: arity as u8,
        }
    }

    /// Function with a single nonzero coefficient `value` at `var`.
    pub fn unit(var: usize, value: i32, arity: usize) -> Self {
        let mut f = Self::zero(arity);
        assert!(var < arity, "variable {var} out of range for arity {arity}");
        f.coef[var] = value;
        f
    }

    /// Constant function `c`.
    pub fn constant(c: i32, arity: usize) -> Self {
        Self::unit(0, c, arity)
    }

    /// Build from an explicit coefficient slice; its length is the arity.
    pub fn from_coeffs(coeffs: &[i32]) -> Self {
        let mut f = Self::zero(coeffs.len());
        f.coef[..coeffs.len()].copy_from_slice(coeffs);
        f
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.arity as usize
    }

    #[inline]
    pub fn coeff(&self, var: usize) -> i32 {
        self.coeffs()[var]
    }

    /// Active coefficients, constant term first.
    #[inline]
    pub fn coeffs(&self) -> &[i32] {
        &self.coef[..self.arity as usize]
    }

    #[inline]
    pub fn constant_term(&self) -> i32 {
        self.coef[0]
    }

    /// `self *= k` for every coefficient.
    #[inline]
    pub fn scale(&self, k: i32) -> Self {
        let mut out = *self;
        out *= k;
        out
    }

    /// Adds `c` to the constant term.
    #[inline]
    pub fn add_constant(&mut self, c: i32) {
        self.coef[0] += c;
    }

    /// Evaluate at `x`, where `x[0]` is taken as 1 regardless of its value.
    pub fn eval(&self, x: &[f64]) -> f64 {
        debug_assert!(x.len() >= self.arity(), "point shorter than arity");
        self.coeffs()
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, &c)| c as f64 * x[i])
            .fold(self.coef[0] as f64, |acc, v| acc + v)
    }

    /// True if every coefficient of `self` is at least the matching one in `other`.
    #[cfg(test)]
    pub fn dominates(&self, other: &Self) -> bool {
        self.check_arity(other);
        self.coeffs()
            .iter()
            .zip(other.coeffs())
            .all(|(a, b)| a >= b)
    }

    /// Rename variables: coefficient of `x_i` moves to `x_{map(i)}`.
    /// `map` must be a permutation of `0..arity` fixing 0.
    #[cfg(test)]
    pub fn relabel(&self, map: impl Fn(usize) -> usize) -> Self {
        let mut out = Self::zero(self.arity());
        for (i, &c) in self.coeffs().iter().enumerate() {
            let j = map(i);
            assert!(j < self.arity(), "relabel target {j} out of range");
            out.coef[j] += c;
        }
        out
    }

    #[inline]
    fn check_arity(&self, other: &Self) {
        assert_eq!(
            self.arity, other.arity,
            "affine functions of different arity combined"
        );
    }
}

impl AddAssign<&AffineFn> for AffineFn {
    #[inline]
    fn add_assign(&mut self, rhs: &AffineFn) {
        self.check_arity(rhs);
        for (a, b) in self.coef.iter_mut().zip(rhs.coef.iter()) {
            *a += *b;
        }
    }
}

impl AddAssign for AffineFn {
    #[inline]
    fn add_assign(&mut self, rhs: AffineFn) {
        *self += &rhs;
    }
}

impl AddAssign<i32> for AffineFn {
    #[inline]
    fn add_assign(&mut self, rhs: i32) {
        self.add_constant(rhs);
    }
}

impl Add for AffineFn {
    type Output = AffineFn;
    #[inline]
    fn add(mut self, rhs: AffineFn) -> Self::Output {
        self += &rhs;
        self
    }
}

impl Add<i32> for AffineFn {
    type Output = AffineFn;
    #[inline]
    fn add(mut self, rhs: i32) -> Self::Output {
        self.add_constant(rhs);
        self
    }
}

impl MulAssign<i32> for AffineFn {
    #[inline]
    fn mul_assign(&mut self, rhs: i32) {
        for c in self.coef.iter_mut() {
            *c *= rhs;
        }
    }
}

impl Mul<AffineFn> for i32 {
    type Output = AffineFn;
    #[inline]
    fn mul(self, mut rhs: AffineFn) -> Self::Output {
        rhs *= self;
        rhs
    }
}

impl Ord for AffineFn {
    fn cmp(&self, other: &Self) -> Ordering {
        self.check_arity(other);
        self.coeffs().cmp(other.coeffs())
    }
}

impl PartialOrd for AffineFn {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Formats as `1+2x[1]+x[3]`; the zero function prints as `0`.
impl fmt::Display for AffineFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (i, &c) in self.coeffs().iter().enumerate() {
            if c == 0 {
                continue;
            }
            if c > 0 && !first {
                write!(f, "+")?;
            }
            if i == 0 {
                write!(f, "{c}")?;
            } else {
                match c {
                    1 => {}
                    -1 => write!(f, "-")?,
                    _ => write!(f, "{c}")?,
                }
                write!(f, "x[{i}]")?;
            }
            first = false;
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}
