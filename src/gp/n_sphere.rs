//! Center + radius base shared by circles and spheres.

use std::fmt;

use super::{Array1d, Point, Vector};
use crate::{Result, SpatialError};

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct NSphere {
    pub(crate) point: Point,
    pub(crate) radius: f64,
}

impl NSphere {
    /// # Errors
    /// * `NonPositiveRadius` if the radius is not strictly positive
    /// * `Dimension` if the center is not of dimension `dim`
    pub(crate) fn new(point: Point, radius: f64, dim: usize) -> Result<Self> {
        if !radius.is_finite() {
            return Err(SpatialError::NonFinite);
        }
        if radius <= 0.0 {
            return Err(SpatialError::NonPositiveRadius(radius));
        }
        if point.dimension() != dim {
            return Err(SpatialError::dimension(format!("The point must be {dim}D.")));
        }
        Ok(Self { point, radius })
    }

    /// `|‖point − center‖ − radius|`.
    pub(crate) fn distance_point(&self, point: &Point) -> f64 {
        (self.point.distance_point(point) - self.radius).abs()
    }

    /// Nearest point on the surface.
    ///
    /// # Errors
    /// `Degenerate` if `point` is the center.
    pub(crate) fn project_point(&self, point: &Point) -> Result<Point> {
        if self.point.is_equal(point.coords().promoted(self.point.dimension())) {
            return Err(SpatialError::degenerate(
                "The point must not be the center of the circle or sphere.",
            ));
        }
        let to_point = Vector::from_points(&self.point, point);
        Ok(&self.point + &(to_point.unit()? * self.radius))
    }

    pub(crate) fn fmt_named(&self, f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
        write!(f, "{name}(point={}, radius={})", self.point, self.radius)
    }
}
