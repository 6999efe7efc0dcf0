//! Line segment between two endpoints.

use std::fmt;

use super::{Point, Vector};
use crate::precision::Tolerance;

/// The closed segment from `point_a` to `point_b`.
#[derive(Clone, Debug, PartialEq)]
pub struct LineSegment {
    point_a: Point,
    point_b: Point,
}

impl LineSegment {
    pub fn new(point_a: Point, point_b: Point) -> Self {
        Self { point_a, point_b }
    }

    #[inline]
    pub fn point_a(&self) -> &Point {
        &self.point_a
    }

    #[inline]
    pub fn point_b(&self) -> &Point {
        &self.point_b
    }

    /// Returns true if `point` is an endpoint or lies strictly between them,
    /// i.e. the vectors from `point` to the two endpoints are antiparallel.
    pub fn contains_point(&self, point: &Point, tol: Tolerance) -> bool {
        let to_a = Vector::from_points(point, &self.point_a);
        let to_b = Vector::from_points(point, &self.point_b);
        if to_a.is_zero(tol) || to_b.is_zero(tol) {
            return true;
        }
        match to_a.cosine_similarity(&to_b) {
            Ok(similarity) => tol.is_close(similarity, -1.0),
            Err(_) => true,
        }
    }
}

impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineSegment(point_a={}, point_b={})", self.point_a, self.point_b)
    }
}
