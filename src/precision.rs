//! Tolerances for floating-point geometric comparisons.
//!
//! Geometric derivations accumulate rounding error, so almost every predicate
//! in the crate compares through a [`Tolerance`] rather than with `==`.
//! Two values are close when
//!
//! ```text
//! |a - b| <= max(rel * max(|a|, |b|), abs)
//! ```
//!
//! The absolute part matters whenever a value is compared against zero
//! (distances, dot products); the relative part scales with magnitude.

/// Default absolute tolerance.
/// Value: 1.0e-9
pub const ABSOLUTE: f64 = 1.0e-9;

/// Default relative tolerance.
/// Value: 1.0e-9
pub const RELATIVE: f64 = 1.0e-9;

/// Absolute + relative tolerance pair, passed by value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    /// Absolute tolerance, used when comparing against zero.
    pub abs: f64,
    /// Relative tolerance, scaled by the larger magnitude.
    pub rel: f64,
}

impl Tolerance {
    /// `abs = 1e-9`, `rel = 1e-9`.
    pub const DEFAULT: Tolerance = Tolerance {
        abs: ABSOLUTE,
        rel: RELATIVE,
    };

    /// Creates a tolerance from explicit absolute and relative parts.
    #[inline]
    pub const fn new(abs: f64, rel: f64) -> Self {
        Self { abs, rel }
    }

    /// Creates a tolerance with the given absolute part and the default relative part.
    #[inline]
    pub const fn absolute(abs: f64) -> Self {
        Self { abs, rel: RELATIVE }
    }

    /// Returns true if `a` and `b` are close.
    #[inline]
    pub fn is_close(&self, a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        let diff = (a - b).abs();
        diff <= (self.rel * a.abs().max(b.abs())).max(self.abs)
    }

    /// Returns true if `value` is close to zero.
    #[inline]
    pub fn is_zero(&self, value: f64) -> bool {
        self.is_close(value, 0.0)
    }

    /// Returns true if `value` vanishes next to a quantity of size `scale`.
    ///
    /// Used for residuals (a gap, a determinant) whose magnitude only means
    /// something relative to the coordinates that produced them.
    #[inline]
    pub fn is_negligible(&self, value: f64, scale: f64) -> bool {
        value.abs() <= (self.rel * scale.abs()).max(self.abs)
    }

    /// Element-wise closeness reduced with logical AND.
    /// Slices of different length are never close.
    pub fn all_close(&self, a: &[f64], b: &[f64]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| self.is_close(*x, *y))
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
