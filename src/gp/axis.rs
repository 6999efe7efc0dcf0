//! Point + vector base shared by lines and planes, and the [`Spatial`] trait.

use std::fmt;

use super::{Array1d, Point, Points, Vector};
use crate::precision::Tolerance;
use crate::{Result, SpatialError};

/// Queries common to every primitive that has a distance to a point.
pub trait Spatial {
    /// Dimension of the space the primitive lives in.
    fn dimension(&self) -> usize;

    /// Unsigned distance from `point` to the primitive.
    fn distance_point(&self, point: &Point) -> f64;

    /// Returns true if the distance to `point` is close to zero.
    fn contains_point(&self, point: &Point, tol: Tolerance) -> bool {
        tol.is_zero(self.distance_point(point))
    }

    /// Sum of squared distances from `points` to the primitive.
    fn sum_squares(&self, points: &Points) -> f64 {
        points
            .iter()
            .map(|p| self.distance_point(p).powi(2))
            .sum()
    }
}

/// A located vector: the direction of a line or the normal of a plane.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Axis {
    pub(crate) point: Point,
    pub(crate) vector: Vector,
}

impl Axis {
    /// # Errors
    /// * `Dimension` if point and vector dimensions differ
    /// * `ZeroVector` if the vector is exactly zero
    pub(crate) fn new(point: Point, vector: Vector) -> Result<Self> {
        if point.dimension() != vector.dimension() {
            return Err(SpatialError::dimension(
                "The point and vector must have the same dimension.",
            ));
        }
        if vector.norm() == 0.0 {
            return Err(SpatialError::ZeroVector);
        }
        Ok(Self { point, vector })
    }

    #[inline]
    pub(crate) fn dimension(&self) -> usize {
        self.point.dimension()
    }

    /// Projection of `v` onto the axis vector. Never divides by zero since
    /// the vector is non-zero.
    pub(crate) fn project_along(&self, v: &Vector) -> Vector {
        let d = &self.vector;
        d * (d.dot(v) / d.dot(d))
    }

    pub(crate) fn set_dimension(&self, dim: usize) -> Result<Axis> {
        Ok(Self {
            point: self.point.set_dimension(dim)?,
            vector: self.vector.set_dimension(dim)?,
        })
    }

    /// Writes `Name(point=Point([..]), label=Vector([..]))`.
    pub(crate) fn fmt_named(
        &self,
        f: &mut fmt::Formatter<'_>,
        name: &str,
        label: &str,
    ) -> fmt::Result {
        write!(f, "{name}(point={}, {label}={})", self.point, self.vector)
    }
}
