//! Line in n-dimensional space.
//!
//! A line is a point plus a direction vector. The direction is stored as
//! given, so `to_point(1.0)` lands one full direction away from the point.

use std::fmt;

use super::axis::Axis;
use super::{Array1d, Point, Points, Spatial, Vector};
use crate::precision::Tolerance;
use crate::transform::transform_coordinates;
use crate::Result;

/// A line through `point` along `direction`.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pos: Axis,
}

impl Line {
    /// Creates a line from a point and a direction.
    ///
    /// # Errors
    /// * `Dimension` if point and direction dimensions differ
    /// * `ZeroVector` if the direction is zero
    pub fn new(point: Point, direction: Vector) -> Result<Self> {
        Ok(Self {
            pos: Axis::new(point, direction)?,
        })
    }

    /// Wraps a point and a direction already known to be compatible and non-zero.
    pub(crate) fn from_axis(point: Point, direction: Vector) -> Self {
        debug_assert_eq!(point.dimension(), direction.dimension());
        Self {
            pos: Axis { point, vector: direction },
        }
    }

    /// Line through `a` directed towards `b`.
    pub fn from_points(a: &Point, b: &Point) -> Result<Self> {
        Self::new(a.clone(), Vector::from_points(a, b))
    }

    /// 2-D line `y = slope·x + y_intercept`.
    pub fn from_slope(slope: f64, y_intercept: f64) -> Result<Self> {
        Self::new(
            Point::new([0.0, y_intercept])?,
            Vector::new([1.0, slope])?,
        )
    }

    #[inline]
    pub fn point(&self) -> &Point {
        &self.pos.point
    }

    #[inline]
    pub fn direction(&self) -> &Vector {
        &self.pos.vector
    }

    /// Same as [`Line::direction`].
    #[inline]
    pub fn vector(&self) -> &Vector {
        &self.pos.vector
    }

    /// Point at `point + t·direction`.
    pub fn to_point(&self, t: f64) -> Point {
        self.point() + &(self.direction() * t)
    }

    /// Orthogonal projection of `point` onto the line.
    pub fn project_point(&self, point: &Point) -> Point {
        let to_point = Vector::from_points(self.point(), point);
        self.point() + &self.pos.project_along(&to_point)
    }

    /// Projection of `vector` onto the line direction.
    pub fn project_vector(&self, vector: &Vector) -> Vector {
        self.pos.project_along(vector)
    }

    /// Side of the line on which `point` lies (2-D only).
    ///
    /// Returns 1 to the right of the direction, -1 to the left, 0 on the line.
    pub fn side_point(&self, point: &Point) -> Result<i8> {
        let to_point = Vector::from_points(self.point(), point);
        self.direction().side_vector(&to_point)
    }

    /// Shortest distance to `other`.
    ///
    /// Parallel lines (under `tol`) use the point distance. Otherwise the
    /// offset along the common normal is returned, and an offset negligible
    /// next to the separation of the base points counts as zero.
    ///
    /// # Errors
    /// `ReduceDimension` for skew lines above three dimensions.
    pub fn distance_line(&self, other: &Line, tol: Tolerance) -> Result<f64> {
        if self.direction().is_parallel(other.direction(), tol) {
            return Ok(self.distance_point(other.point()));
        }
        let perpendicular = match self.direction().cross(other.direction()) {
            Ok(perpendicular) => perpendicular,
            // No common normal above three dimensions.
            Err(_) if self.is_coplanar(other, None) => return Ok(0.0),
            Err(err) => return Err(err),
        };
        let ab = Vector::from_points(self.point(), other.point());
        let gap = ab.dot(&perpendicular).abs() / perpendicular.norm();
        if tol.is_negligible(gap, ab.norm()) {
            return Ok(0.0);
        }
        Ok(gap)
    }

    /// Returns true if both lines lie in a common plane.
    ///
    /// Two points from each line must have affine rank at most 2; `tol` is
    /// the singular value threshold of that rank.
    pub fn is_coplanar(&self, other: &Line, tol: Option<f64>) -> bool {
        let dim = self.dimension().max(other.dimension());
        let corners = [
            self.point().clone(),
            self.to_point(1.0),
            other.point().clone(),
            other.to_point(1.0),
        ]
        .into_iter()
        .map(|p| p.coords().promoted(dim))
        .map(Point::from_coords)
        .collect();
        match Points::from_points(corners) {
            Ok(points) => points.are_coplanar(tol),
            Err(_) => false,
        }
    }

    /// Returns true if `other` passes through this line's points with a
    /// parallel direction.
    pub fn is_close(&self, other: &Line, tol: Tolerance) -> bool {
        self.contains_point(other.point(), tol)
            && self.direction().is_parallel(other.direction(), tol)
    }

    /// One-dimensional coordinates of `points` along the line, with the
    /// line point as origin and the unit direction as basis.
    pub fn transform_points(&self, points: &Points) -> Result<Vec<f64>> {
        let basis = [self.direction().unit()?];
        Ok(transform_coordinates(points, self.point(), &basis)?
            .into_iter()
            .flatten()
            .collect())
    }

    /// Pads point and direction with trailing zeros up to `dim`.
    pub fn set_dimension(&self, dim: usize) -> Result<Line> {
        Ok(Self {
            pos: self.pos.set_dimension(dim)?,
        })
    }
}

impl Spatial for Line {
    #[inline]
    fn dimension(&self) -> usize {
        self.pos.dimension()
    }

    /// Distance from `point` to its projection on the line.
    fn distance_point(&self, point: &Point) -> f64 {
        self.project_point(point).distance_point(point)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.pos.fmt_named(f, "Line", "direction")
    }
}
