//! Circle in the plane.

use std::f64::consts::PI;
use std::fmt;

use super::n_sphere::NSphere;
use super::{Array1d, Point, Points, Spatial};
use crate::foundation::det3;
use crate::{Result, SpatialError};

/// A 2-D circle given by its center and radius.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    base: NSphere,
}

impl Circle {
    /// Creates a circle.
    ///
    /// # Errors
    /// * `Dimension` if the center is not 2-D
    /// * `NonPositiveRadius` if the radius is not positive
    pub fn new(point: Point, radius: f64) -> Result<Self> {
        Ok(Self {
            base: NSphere::new(point, radius, 2)?,
        })
    }

    /// Circle through three 2-D points (the circumscribed circle).
    ///
    /// # Errors
    /// * `Dimension` if any point is not 2-D
    /// * `Degenerate` if the points are collinear
    pub fn from_points(a: &Point, b: &Point, c: &Point) -> Result<Self> {
        if [a, b, c].iter().any(|p| p.dimension() != 2) {
            return Err(SpatialError::dimension("The points must be 2D."));
        }
        let points = Points::from_points(vec![a.clone(), b.clone(), c.clone()])?;
        if points.are_collinear(None) {
            return Err(SpatialError::degenerate("The points must not be collinear."));
        }

        // Cofactor expansion of the circle determinant
        // | x²+y²  x  y  1 | over the three points.
        let row = |p: &Point| (p[0] * p[0] + p[1] * p[1], p[0], p[1]);
        let rows = [row(a), row(b), row(c)];
        let minor = |f: &dyn Fn((f64, f64, f64)) -> [f64; 3]| {
            det3([f(rows[0]), f(rows[1]), f(rows[2])])
        };
        let m00 = minor(&|(_, x, y): (f64, f64, f64)| [x, y, 1.0]);
        let m01 = minor(&|(s, _, y): (f64, f64, f64)| [s, y, 1.0]);
        let m02 = minor(&|(s, x, _): (f64, f64, f64)| [s, x, 1.0]);
        let m03 = minor(&|(s, x, y): (f64, f64, f64)| [s, x, y]);

        let x = 0.5 * m01 / m00;
        let y = -0.5 * m02 / m00;
        let radius = (x * x + y * y + m03 / m00).sqrt();
        Self::new(Point::new([x, y])?, radius)
    }

    #[inline]
    pub fn point(&self) -> &Point {
        &self.base.point
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.base.radius
    }

    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius()
    }

    pub fn area(&self) -> f64 {
        PI * self.radius().powi(2)
    }

    /// Nearest point on the circle.
    ///
    /// # Errors
    /// `Degenerate` if `point` is the center.
    pub fn project_point(&self, point: &Point) -> Result<Point> {
        self.base.project_point(point)
    }
}

impl Spatial for Circle {
    #[inline]
    fn dimension(&self) -> usize {
        2
    }

    fn distance_point(&self, point: &Point) -> f64 {
        self.base.distance_point(point)
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.base.fmt_named(f, "Circle")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tolerance;
    use approx::assert_abs_diff_eq;

    const TOL: Tolerance = Tolerance::DEFAULT;

    fn p(values: &[f64]) -> Point {
        Point::new(values).unwrap()
    }

    #[test]
    fn test_circle_validation() {
        assert!(matches!(
            Circle::new(p(&[0.0, 0.0, 0.0]), 1.0),
            Err(SpatialError::Dimension(_))
        ));
        assert_eq!(
            Circle::new(p(&[0.0, 0.0]), 0.0),
            Err(SpatialError::NonPositiveRadius(0.0))
        );
    }

    #[test]
    fn test_measures() {
        let c = Circle::new(p(&[0.0, 0.0]), 2.0).unwrap();
        assert_abs_diff_eq!(c.circumference(), 4.0 * PI);
        assert_abs_diff_eq!(c.area(), 4.0 * PI);
    }

    #[test]
    fn test_from_points() {
        let c = Circle::from_points(&p(&[-1.0, 0.0]), &p(&[0.0, 1.0]), &p(&[1.0, 0.0])).unwrap();
        assert!(c.point().is_close([0.0, 0.0], TOL));
        assert_abs_diff_eq!(c.radius(), 1.0, epsilon = 1e-12);

        let c = Circle::from_points(&p(&[3.0, 1.0]), &p(&[1.0, 3.0]), &p(&[-1.0, 1.0])).unwrap();
        assert!(c.point().is_close([1.0, 1.0], TOL));
        assert_abs_diff_eq!(c.radius(), 2.0, epsilon = 1e-12);

        assert!(matches!(
            Circle::from_points(&p(&[0.0, 0.0]), &p(&[1.0, 1.0]), &p(&[2.0, 2.0])),
            Err(SpatialError::Degenerate(_))
        ));
        assert!(matches!(
            Circle::from_points(&p(&[0.0, 0.0, 0.0]), &p(&[1.0, 1.0]), &p(&[2.0, 2.0])),
            Err(SpatialError::Dimension(_))
        ));
    }

    #[test]
    fn test_contains_and_project() {
        let c = Circle::new(p(&[0.0, 0.0]), 1.0).unwrap();
        assert!(c.contains_point(&p(&[1.0, 0.0]), TOL));
        assert!(c.contains_point(&p(&[0.5f64.sqrt(), 0.5f64.sqrt()]), TOL));
        assert!(!c.contains_point(&p(&[1.0, 1.0]), TOL));
        assert_abs_diff_eq!(c.distance_point(&p(&[3.0, 4.0])), 4.0);

        let projected = c.project_point(&p(&[5.0, 0.0])).unwrap();
        assert!(projected.is_close([1.0, 0.0], TOL));
        assert!(c.project_point(&p(&[0.0, 0.0])).is_err());
    }

    #[test]
    fn test_display() {
        let c = Circle::new(p(&[0.0, 0.0]), 2.0).unwrap();
        assert_eq!(c.to_string(), "Circle(point=Point([0.0, 0.0]), radius=2)");
    }
}
