//! Validated coordinate buffer.
//!
//! Every primitive stores its numbers in a [`Coords`]: non-empty, all values
//! finite, one dimension per entry. Points and vectors share it through the
//! [`Array1d`] trait, which supplies dimension promotion, tolerance comparison
//! and rounding.

use std::fmt;
use std::ops::Index;

use crate::foundation::round_to;
use crate::precision::Tolerance;
use crate::{Result, SpatialError};

/// Non-empty buffer of finite coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Coords {
    values: Vec<f64>,
}

impl Coords {
    /// Validates and wraps `values`.
    ///
    /// # Errors
    /// * `Empty` if there are no values
    /// * `NonFinite` if any value is NaN or infinite
    pub fn new(values: impl Into<Vec<f64>>) -> Result<Self> {
        let values = values.into();
        if values.is_empty() {
            return Err(SpatialError::Empty);
        }
        if !values.iter().all(|v| v.is_finite()) {
            return Err(SpatialError::NonFinite);
        }
        Ok(Self { values })
    }

    /// Wraps values computed from already-validated coordinates.
    #[inline]
    pub(crate) fn from_raw(values: Vec<f64>) -> Self {
        debug_assert!(!values.is_empty());
        Self { values }
    }

    /// All-zero coordinates of dimension `dim` (at least 1).
    #[inline]
    pub(crate) fn zeros(dim: usize) -> Self {
        Self {
            values: vec![0.0; dim.max(1)],
        }
    }

    /// Number of coordinates.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }

    /// Pads with trailing zeros up to `dim`.
    ///
    /// # Errors
    /// `ReduceDimension` if `dim` is smaller than the current dimension.
    pub fn padded(&self, dim: usize) -> Result<Coords> {
        if dim < self.len() {
            return Err(SpatialError::ReduceDimension {
                current: self.len(),
                requested: dim,
            });
        }
        Ok(self.promoted(dim))
    }

    /// Pads to `dim` when `dim` is larger; otherwise returns a copy.
    pub(crate) fn promoted(&self, dim: usize) -> Coords {
        let mut values = self.values.clone();
        if dim > values.len() {
            values.resize(dim, 0.0);
        }
        Coords { values }
    }

    /// Component-wise combination; the shorter operand is padded with zeros.
    pub(crate) fn zip_map(&self, other: &Coords, f: impl Fn(f64, f64) -> f64) -> Coords {
        let dim = self.len().max(other.len());
        let at = |c: &Coords, i: usize| c.values.get(i).copied().unwrap_or(0.0);
        Coords {
            values: (0..dim).map(|i| f(at(self, i), at(other, i))).collect(),
        }
    }

    pub(crate) fn map(&self, f: impl Fn(f64) -> f64) -> Coords {
        Coords {
            values: self.values.iter().map(|v| f(*v)).collect(),
        }
    }

    /// Dot product; missing trailing components count as zero.
    #[inline]
    pub fn dot(&self, other: &Coords) -> f64 {
        self.values
            .iter()
            .zip(&other.values)
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Euclidean norm.
    #[inline]
    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Returns the coordinates rounded to `decimals` places.
    pub fn rounded(&self, decimals: u32) -> Coords {
        // -0.0 after rounding is normalised so that text output stays stable.
        self.map(|v| round_to(v, decimals) + 0.0)
    }
}

impl Index<usize> for Coords {
    type Output = f64;
    #[inline]
    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}

impl AsRef<[f64]> for Coords {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.values)
    }
}

/// Behaviour shared by one-dimensional coordinate arrays (points and vectors).
pub trait Array1d: Sized {
    fn coords(&self) -> &Coords;

    fn from_coords(coords: Coords) -> Self;

    /// Number of coordinates.
    #[inline]
    fn dimension(&self) -> usize {
        self.coords().len()
    }

    #[inline]
    fn as_slice(&self) -> &[f64] {
        self.coords().as_slice()
    }

    fn to_vec(&self) -> Vec<f64> {
        self.as_slice().to_vec()
    }

    /// Pads with trailing zeros up to `dim`.
    ///
    /// # Errors
    /// `ReduceDimension` if `dim` is below the current dimension.
    fn set_dimension(&self, dim: usize) -> Result<Self> {
        Ok(Self::from_coords(self.coords().padded(dim)?))
    }

    /// Element-wise closeness; arrays of different dimension are never close.
    fn is_close(&self, other: impl AsRef<[f64]>, tol: Tolerance) -> bool {
        tol.all_close(self.as_slice(), other.as_ref())
    }

    /// Exact element-wise equality.
    fn is_equal(&self, other: impl AsRef<[f64]>) -> bool {
        self.as_slice() == other.as_ref()
    }

    /// Rounds every coordinate to `decimals` places.
    fn round(&self, decimals: u32) -> Self {
        Self::from_coords(self.coords().rounded(decimals))
    }
}

/// Implements a binary operator for every owned/borrowed combination
/// by forwarding to the `&T op &U` implementation.
macro_rules! forward_ref_binop {
    (impl $imp:ident, $method:ident for $t:ty, $u:ty => $out:ty) => {
        impl std::ops::$imp<$u> for $t {
            type Output = $out;
            #[inline]
            fn $method(self, other: $u) -> $out {
                std::ops::$imp::$method(&self, &other)
            }
        }

        impl std::ops::$imp<&$u> for $t {
            type Output = $out;
            #[inline]
            fn $method(self, other: &$u) -> $out {
                std::ops::$imp::$method(&self, other)
            }
        }

        impl std::ops::$imp<$u> for &$t {
            type Output = $out;
            #[inline]
            fn $method(self, other: $u) -> $out {
                std::ops::$imp::$method(self, &other)
            }
        }
    };
}

pub(crate) use forward_ref_binop;
