//! Point of arbitrary dimension.

use std::fmt;
use std::ops::{Add, Index, Sub};

use super::coords::forward_ref_binop;
use super::{Array1d, Coords, Vector};
use crate::{Result, SpatialError};

/// A position in n-dimensional space (n ≥ 1).
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    coords: Coords,
}

impl Array1d for Point {
    #[inline]
    fn coords(&self) -> &Coords {
        &self.coords
    }

    #[inline]
    fn from_coords(coords: Coords) -> Self {
        Self { coords }
    }
}

impl Point {
    /// Creates a point, validating the values.
    ///
    /// # Errors
    /// `Empty` or `NonFinite`.
    pub fn new(values: impl Into<Vec<f64>>) -> Result<Self> {
        Ok(Self {
            coords: Coords::new(values)?,
        })
    }

    /// The origin of dimension `dim`.
    pub fn origin(dim: usize) -> Result<Self> {
        if dim == 0 {
            return Err(SpatialError::Empty);
        }
        Ok(Self {
            coords: Coords::zeros(dim),
        })
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance_point(&self, other: &Point) -> f64 {
        (other - self).norm()
    }

    /// Vector from the origin to this point.
    #[inline]
    pub fn to_vector(&self) -> Vector {
        Vector::from_coords(self.coords.clone())
    }
}

impl Index<usize> for Point {
    type Output = f64;
    #[inline]
    fn index(&self, index: usize) -> &f64 {
        &self.coords[index]
    }
}

impl AsRef<[f64]> for Point {
    fn as_ref(&self) -> &[f64] {
        self.coords.as_slice()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({})", self.coords)
    }
}

// Point - Point = Vector, Point ± Vector = Point.

impl Sub<&Point> for &Point {
    type Output = Vector;
    fn sub(self, other: &Point) -> Vector {
        Vector::from_coords(self.coords.zip_map(&other.coords, |a, b| a - b))
    }
}

impl Add<&Vector> for &Point {
    type Output = Point;
    fn add(self, vector: &Vector) -> Point {
        Point::from_coords(self.coords.zip_map(vector.coords(), |a, b| a + b))
    }
}

impl Sub<&Vector> for &Point {
    type Output = Point;
    fn sub(self, vector: &Vector) -> Point {
        Point::from_coords(self.coords.zip_map(vector.coords(), |a, b| a - b))
    }
}

forward_ref_binop!(impl Sub, sub for Point, Point => Vector);
forward_ref_binop!(impl Add, add for Point, Vector => Point);
forward_ref_binop!(impl Sub, sub for Point, Vector => Point);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tolerance;

    fn p(values: &[f64]) -> Point {
        Point::new(values).unwrap()
    }

    #[test]
    fn test_point_validation() {
        assert_eq!(Point::new(Vec::<f64>::new()), Err(SpatialError::Empty));
        assert_eq!(Point::new([f64::INFINITY]), Err(SpatialError::NonFinite));
        assert_eq!(Point::origin(2).unwrap().as_slice(), &[0.0, 0.0]);
    }

    #[test]
    fn test_distance_point() {
        assert_eq!(p(&[0.0, 0.0]).distance_point(&p(&[3.0, 4.0])), 5.0);
        assert_eq!(p(&[1.0, 1.0, 1.0]).distance_point(&p(&[1.0, 1.0, 1.0])), 0.0);
        // Mixed dimensions compare in the larger space.
        assert_eq!(p(&[1.0]).distance_point(&p(&[1.0, 2.0])), 2.0);
    }

    #[test]
    fn test_point_arithmetic() {
        let a = p(&[1.0, 2.0]);
        let b = p(&[4.0, 6.0]);
        let ab: Vector = &b - &a;
        assert_eq!(ab.as_slice(), &[3.0, 4.0]);
        assert_eq!((&a + &ab).as_slice(), b.as_slice());
        assert_eq!((b - ab).as_slice(), a.as_slice());
    }

    #[test]
    fn test_point_rounding_and_display() {
        let a = p(&[0.5773, -0.0001, 3.14159]).round(2);
        assert_eq!(a.to_string(), "Point([0.58, 0.0, 3.14])");
        assert!(a.is_close([0.58, 0.0, 3.14], Tolerance::DEFAULT));
        assert!(!a.is_close([0.58, 0.0], Tolerance::DEFAULT));
    }
}
