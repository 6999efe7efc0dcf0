//! Vector of arbitrary dimension.
//!
//! Vectors carry magnitude and direction; points carry position. The two
//! share the same validated buffer but are distinct types.

use std::fmt;
use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use super::coords::forward_ref_binop;
use super::{Array1d, Coords, Point};
use crate::foundation::{det2, sign};
use crate::precision::Tolerance;
use crate::{Result, SpatialError};

/// A vector in n-dimensional space (n ≥ 1).
#[derive(Clone, Debug, PartialEq)]
pub struct Vector {
    coords: Coords,
}

impl Array1d for Vector {
    #[inline]
    fn coords(&self) -> &Coords {
        &self.coords
    }

    #[inline]
    fn from_coords(coords: Coords) -> Self {
        Self { coords }
    }
}

impl Vector {
    /// Creates a vector, validating the values.
    ///
    /// # Errors
    /// `Empty` or `NonFinite`.
    pub fn new(values: impl Into<Vec<f64>>) -> Result<Self> {
        Ok(Self {
            coords: Coords::new(values)?,
        })
    }

    /// The zero vector of dimension `dim`.
    pub fn zeros(dim: usize) -> Result<Self> {
        if dim == 0 {
            return Err(SpatialError::Empty);
        }
        Ok(Self {
            coords: Coords::zeros(dim),
        })
    }

    /// Unit basis vector `e_index` of dimension `dim`.
    pub(crate) fn basis(dim: usize, index: usize) -> Self {
        let mut values = vec![0.0; dim.max(index + 1)];
        values[index] = 1.0;
        Self {
            coords: Coords::from_raw(values),
        }
    }

    /// Vector from point `a` to point `b`.
    #[inline]
    pub fn from_points(a: &Point, b: &Point) -> Vector {
        b - a
    }

    /// Euclidean norm (magnitude).
    #[inline]
    pub fn norm(&self) -> f64 {
        self.coords.norm()
    }

    /// Returns the vector scaled to magnitude 1.
    ///
    /// # Errors
    /// `Degenerate` if the magnitude is zero.
    pub fn unit(&self) -> Result<Vector> {
        let magnitude = self.norm();
        if magnitude == 0.0 {
            return Err(SpatialError::degenerate("The magnitude must not be zero."));
        }
        Ok(self / magnitude)
    }

    /// Returns true if the magnitude is close to zero.
    #[inline]
    pub fn is_zero(&self, tol: Tolerance) -> bool {
        tol.is_zero(self.norm())
    }

    #[inline]
    pub fn dot(&self, other: &Vector) -> f64 {
        self.coords.dot(&other.coords)
    }

    /// Cross product. Both operands are promoted to 3-D first, so the cross
    /// product of 2-D vectors is a 3-D vector along z.
    ///
    /// # Errors
    /// `ReduceDimension` if either vector has more than three dimensions.
    pub fn cross(&self, other: &Vector) -> Result<Vector> {
        let a = self.coords.padded(3)?;
        let b = other.coords.padded(3)?;
        Ok(Self {
            coords: Coords::from_raw(vec![
                a[1] * b[2] - a[2] * b[1],
                a[2] * b[0] - a[0] * b[2],
                a[0] * b[1] - a[1] * b[0],
            ]),
        })
    }

    /// Cosine of the angle between the vectors, clipped to `[-1, 1]`.
    ///
    /// # Errors
    /// `Degenerate` if either vector has zero magnitude.
    pub fn cosine_similarity(&self, other: &Vector) -> Result<f64> {
        let denom = self.norm() * other.norm();
        if denom == 0.0 {
            return Err(SpatialError::degenerate(
                "The vectors must have non-zero magnitudes.",
            ));
        }
        Ok((self.dot(other) / denom).clamp(-1.0, 1.0))
    }

    /// Unsigned angle in `[0, π]`.
    pub fn angle_between(&self, other: &Vector) -> Result<f64> {
        Ok(self.cosine_similarity(other)?.acos())
    }

    /// Signed angle from `self` to `other` in `(-π, π]`, counterclockwise positive.
    ///
    /// # Errors
    /// `Dimension` unless both vectors are 2-D.
    pub fn angle_signed(&self, other: &Vector) -> Result<f64> {
        let (a, b) = self.planar_pair(other)?;
        Ok(det2(a, b).atan2(self.dot(other)))
    }

    /// Signed angle between 3-D vectors, positive when `self × other` points
    /// along `direction_positive`.
    ///
    /// # Errors
    /// * `Dimension` unless all three vectors are 3-D
    /// * `Degenerate` if `direction_positive` is not normal to the plane of the two vectors
    pub fn angle_signed_3d(
        &self,
        other: &Vector,
        direction_positive: &Vector,
        tol: Tolerance,
    ) -> Result<f64> {
        if self.dimension() != 3 || other.dimension() != 3 || direction_positive.dimension() != 3 {
            return Err(SpatialError::dimension("The vectors must be 3D."));
        }
        let cross = self.cross(other)?;
        if !cross.is_parallel(direction_positive, tol) {
            return Err(SpatialError::degenerate(
                "The positive direction vector must be perpendicular to the plane formed by the two main input vectors.",
            ));
        }
        let direction_positive = direction_positive.unit()?;
        Ok(cross.dot(&direction_positive).atan2(self.dot(other)))
    }

    /// Returns true if the dot product is close to zero.
    /// The zero vector is perpendicular to every vector.
    #[inline]
    pub fn is_perpendicular(&self, other: &Vector, tol: Tolerance) -> bool {
        tol.is_zero(self.dot(other))
    }

    /// Returns true if the absolute cosine similarity is close to one.
    /// The zero vector is parallel to every vector.
    pub fn is_parallel(&self, other: &Vector, tol: Tolerance) -> bool {
        if self.is_zero(tol) || other.is_zero(tol) {
            return true;
        }
        match self.cosine_similarity(other) {
            Ok(similarity) => tol.is_close(similarity.abs(), 1.0),
            Err(_) => true,
        }
    }

    /// Side of `self` on which `other` lies (2-D only).
    ///
    /// Returns 1 if `other` is directed to the right (clockwise), -1 if to
    /// the left, 0 if the vectors are parallel.
    pub fn side_vector(&self, other: &Vector) -> Result<i8> {
        let (a, b) = self.planar_pair(other)?;
        // Sign of the 2-D cross product other × self.
        Ok(sign(det2(b, a)))
    }

    /// Length of the projection of `other` onto the direction of `self`.
    pub fn scalar_projection(&self, other: &Vector) -> Result<f64> {
        Ok(self.unit()?.dot(other))
    }

    /// Projection of `other` onto `self`.
    ///
    /// # Errors
    /// `Degenerate` if `self` is the zero vector.
    pub fn project_vector(&self, other: &Vector) -> Result<Vector> {
        let denom = self.dot(self);
        if denom == 0.0 {
            return Err(SpatialError::degenerate(
                "Cannot project onto the zero vector.",
            ));
        }
        Ok(self * (self.dot(other) / denom))
    }

    /// A unit basis vector not parallel to `self`.
    ///
    /// Tries `e₀` first and falls back to `e₁`. A 1-D vector yields the
    /// opposite unit vector.
    ///
    /// # Errors
    /// `ZeroVector` if `self` is close to zero.
    pub fn different_direction(&self, tol: Tolerance) -> Result<Vector> {
        if self.is_zero(tol) {
            return Err(SpatialError::ZeroVector);
        }
        let dim = self.dimension();
        if dim == 1 {
            let flipped = -f64::from(sign(self.coords[0]));
            return Ok(Self {
                coords: Coords::from_raw(vec![flipped]),
            });
        }
        let candidate = Vector::basis(dim, 0);
        if self.is_parallel(&candidate, tol) {
            return Ok(Vector::basis(dim, 1));
        }
        Ok(candidate)
    }

    /// Translates `point` by this vector.
    #[inline]
    pub fn add_to(&self, point: &Point) -> Point {
        point + self
    }

    fn planar_pair(&self, other: &Vector) -> Result<([f64; 2], [f64; 2])> {
        if self.dimension() != 2 || other.dimension() != 2 {
            return Err(SpatialError::dimension("The vectors must be 2D."));
        }
        Ok((
            [self.coords[0], self.coords[1]],
            [other.coords[0], other.coords[1]],
        ))
    }
}

impl Index<usize> for Vector {
    type Output = f64;
    #[inline]
    fn index(&self, index: usize) -> &f64 {
        &self.coords[index]
    }
}

impl AsRef<[f64]> for Vector {
    fn as_ref(&self) -> &[f64] {
        self.coords.as_slice()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector({})", self.coords)
    }
}

// Arithmetic promotes the shorter operand with trailing zeros.

impl Add<&Vector> for &Vector {
    type Output = Vector;
    fn add(self, other: &Vector) -> Vector {
        Vector::from_coords(self.coords.zip_map(&other.coords, |a, b| a + b))
    }
}

impl Sub<&Vector> for &Vector {
    type Output = Vector;
    fn sub(self, other: &Vector) -> Vector {
        Vector::from_coords(self.coords.zip_map(&other.coords, |a, b| a - b))
    }
}

forward_ref_binop!(impl Add, add for Vector, Vector => Vector);
forward_ref_binop!(impl Sub, sub for Vector, Vector => Vector);

impl Mul<f64> for &Vector {
    type Output = Vector;
    fn mul(self, scalar: f64) -> Vector {
        Vector::from_coords(self.coords.map(|v| v * scalar))
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, scalar: f64) -> Vector {
        &self * scalar
    }
}

impl Mul<&Vector> for f64 {
    type Output = Vector;
    fn mul(self, vector: &Vector) -> Vector {
        vector * self
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;
    fn mul(self, vector: Vector) -> Vector {
        &vector * self
    }
}

impl Div<f64> for &Vector {
    type Output = Vector;
    fn div(self, scalar: f64) -> Vector {
        Vector::from_coords(self.coords.map(|v| v / scalar))
    }
}

impl Div<f64> for Vector {
    type Output = Vector;
    fn div(self, scalar: f64) -> Vector {
        &self / scalar
    }
}

impl Neg for &Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        Vector::from_coords(self.coords.map(|v| -v))
    }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        -&self
    }
}
