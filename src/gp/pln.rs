//! Plane (hyperplane) defined by a point and a normal vector.

use std::fmt;

use super::axis::Axis;
use super::{Array1d, Line, Point, Points, Spatial, Vector};
use crate::foundation::sign;
use crate::precision::Tolerance;
use crate::visualization::SurfaceGrid;
use crate::{Result, SpatialError};

/// A plane through `point` perpendicular to `normal`.
#[derive(Clone, Debug, PartialEq)]
pub struct Plane {
    pos: Axis,
}

impl Plane {
    /// Creates a plane from a point and a normal.
    ///
    /// # Errors
    /// * `Dimension` if point and normal dimensions differ
    /// * `ZeroVector` if the normal is zero
    pub fn new(point: Point, normal: Vector) -> Result<Self> {
        Ok(Self {
            pos: Axis::new(point, normal)?,
        })
    }

    /// Wraps a point and a normal already known to be compatible and non-zero.
    pub(crate) fn from_axis(point: Point, normal: Vector) -> Self {
        debug_assert_eq!(point.dimension(), normal.dimension());
        Self {
            pos: Axis { point, vector: normal },
        }
    }

    /// 3-D plane through `point` spanned by two vectors.
    ///
    /// # Errors
    /// `Degenerate` if the vectors are parallel.
    pub fn from_vectors(point: &Point, a: &Vector, b: &Vector, tol: Tolerance) -> Result<Self> {
        if a.is_parallel(b, tol) {
            return Err(SpatialError::degenerate("The vectors must not be parallel."));
        }
        let normal = a.cross(b)?;
        Self::new(point.set_dimension(3)?, normal)
    }

    /// 3-D plane through three points.
    ///
    /// # Errors
    /// `Degenerate` if `B − A` and `C − A` are parallel under `tol`, which
    /// covers collinear and coincident points.
    pub fn from_points(a: &Point, b: &Point, c: &Point, tol: Tolerance) -> Result<Self> {
        let ab = Vector::from_points(a, b);
        let ac = Vector::from_points(a, c);
        if ab.is_parallel(&ac, tol) {
            return Err(SpatialError::degenerate("The points must not be collinear."));
        }
        Self::from_vectors(a, &ab, &ac, tol)
    }

    #[inline]
    pub fn point(&self) -> &Point {
        &self.pos.point
    }

    #[inline]
    pub fn normal(&self) -> &Vector {
        &self.pos.vector
    }

    /// Same as [`Plane::normal`].
    #[inline]
    pub fn vector(&self) -> &Vector {
        &self.pos.vector
    }

    /// Coefficients `(a, b, c, d)` of `ax + by + cz + d = 0`.
    ///
    /// # Errors
    /// `Dimension` if the plane has more than three dimensions.
    pub fn cartesian(&self) -> Result<(f64, f64, f64, f64)> {
        if self.dimension() > 3 {
            return Err(SpatialError::dimension("The plane dimension must be <= 3."));
        }
        let n = self.normal().set_dimension(3)?;
        let d = -self.normal().dot(&self.point().to_vector());
        Ok((n[0], n[1], n[2], d))
    }

    /// Orthogonal projection of `point` onto the plane.
    pub fn project_point(&self, point: &Point) -> Point {
        let to_plane = Vector::from_points(point, self.point());
        point + &self.pos.project_along(&to_plane)
    }

    /// Projection of `vector` onto the plane.
    pub fn project_vector(&self, vector: &Vector) -> Vector {
        let tip = self.point() + vector;
        Vector::from_points(self.point(), &self.project_point(&tip))
    }

    /// Projection of `line` onto the plane.
    ///
    /// # Errors
    /// `Degenerate` if the line is perpendicular to the plane.
    pub fn project_line(&self, line: &Line, tol: Tolerance) -> Result<Line> {
        if self.normal().is_parallel(line.direction(), tol) {
            return Err(SpatialError::degenerate(
                "The line and plane must not be perpendicular.",
            ));
        }
        let point = self.project_point(line.point());
        if self.normal().is_perpendicular(line.direction(), tol) {
            return Line::new(point, line.direction().clone());
        }
        Line::new(point, self.project_vector(line.direction()))
    }

    /// Distance from the plane to `point`, positive on the side the normal
    /// points to.
    pub fn distance_point_signed(&self, point: &Point) -> f64 {
        let to_point = Vector::from_points(self.point(), point);
        self.normal().dot(&to_point) / self.normal().norm()
    }

    /// Sign of the signed distance: 1, -1 or 0 on the plane.
    pub fn side_point(&self, point: &Point) -> i8 {
        sign(self.distance_point_signed(point))
    }

    /// Returns true if `other` passes through this plane's point set with a
    /// parallel normal.
    pub fn is_close(&self, other: &Plane, tol: Tolerance) -> bool {
        self.contains_point(other.point(), tol) && self.normal().is_parallel(other.normal(), tol)
    }

    /// Pads point and normal with trailing zeros up to `dim`.
    pub fn set_dimension(&self, dim: usize) -> Result<Plane> {
        Ok(Self {
            pos: self.pos.set_dimension(dim)?,
        })
    }

    /// 2×2 grid of corner points spanning `lims_x` × `lims_y` around the
    /// plane point. The free coordinate is z when the plane is not vertical,
    /// otherwise y, otherwise x.
    ///
    /// # Errors
    /// `Dimension` unless the plane is 2-D or 3-D.
    pub fn to_mesh(&self, lims_x: (f64, f64), lims_y: (f64, f64)) -> Result<SurfaceGrid> {
        if self.dimension() < 2 {
            return Err(SpatialError::dimension("The plane dimension must be 2 or 3."));
        }
        let (a, b, c, d) = self.cartesian()?;
        let (x0, y0) = (self.point()[0], self.point()[1]);
        let xs = [x0 + lims_x.0, x0 + lims_x.1];
        let ys = [y0 + lims_y.0, y0 + lims_y.1];

        let grid = |f: &dyn Fn(f64, f64) -> f64| -> Vec<Vec<f64>> {
            ys.iter()
                .map(|&y| xs.iter().map(|&x| f(x, y)).collect())
                .collect()
        };
        let u = grid(&|x: f64, _: f64| x);
        let v = grid(&|_: f64, y: f64| y);

        let mesh = if c != 0.0 {
            let w = grid(&|x: f64, y: f64| -(a * x + b * y + d) / c);
            SurfaceGrid::new(u, v, w)
        } else if b != 0.0 {
            let w = grid(&|x: f64, y: f64| -(a * x + c * y + d) / b);
            SurfaceGrid::new(u, w, v)
        } else {
            let w = grid(&|x: f64, y: f64| -(b * x + c * y + d) / a);
            SurfaceGrid::new(w, u, v)
        };
        Ok(mesh)
    }

    /// The mesh corners as a point collection.
    pub fn to_points(&self, lims_x: (f64, f64), lims_y: (f64, f64)) -> Result<Points> {
        self.to_mesh(lims_x, lims_y)?.to_points()
    }
}

impl Spatial for Plane {
    #[inline]
    fn dimension(&self) -> usize {
        self.pos.dimension()
    }

    fn distance_point(&self, point: &Point) -> f64 {
        self.distance_point_signed(point).abs()
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.pos.fmt_named(f, "Plane", "normal")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: Tolerance = Tolerance::DEFAULT;

    fn p(values: &[f64]) -> Point {
        Point::new(values).unwrap()
    }

    fn v(values: &[f64]) -> Vector {
        Vector::new(values).unwrap()
    }

    fn plane(point: &[f64], normal: &[f64]) -> Plane {
        Plane::new(p(point), v(normal)).unwrap()
    }

    #[test]
    fn test_plane_validation() {
        assert!(matches!(
            Plane::new(p(&[0.0, 0.0]), v(&[1.0, 0.0, 0.0])),
            Err(SpatialError::Dimension(_))
        ));
        assert_eq!(
            Plane::new(p(&[0.0, 0.0, 0.0]), Vector::zeros(3).unwrap()),
            Err(SpatialError::ZeroVector)
        );
    }

    #[test]
    fn test_from_vectors() {
        let pl = Plane::from_vectors(&p(&[0.0, 0.0]), &v(&[1.0, 0.0]), &v(&[0.0, 1.0]), TOL)
            .unwrap();
        assert_eq!(pl.point().as_slice(), &[0.0, 0.0, 0.0]);
        assert_eq!(pl.normal().as_slice(), &[0.0, 0.0, 1.0]);
        assert!(Plane::from_vectors(&p(&[0.0, 0.0]), &v(&[1.0, 0.0]), &v(&[2.0, 0.0]), TOL)
            .is_err());
    }

    #[test]
    fn test_from_points() {
        let origin = p(&[0.0, 0.0, 0.0]);
        let pl = Plane::from_points(&origin, &p(&[1.0, 0.0, 0.0]), &p(&[0.0, 1.0, 0.0]), TOL)
            .unwrap();
        assert_eq!(pl.normal().as_slice(), &[0.0, 0.0, 1.0]);
        assert!(matches!(
            Plane::from_points(&origin, &p(&[1.0, 1.0, 1.0]), &p(&[2.0, 2.0, 2.0]), TOL),
            Err(SpatialError::Degenerate(_))
        ));
        assert!(matches!(
            Plane::from_points(&origin, &origin, &p(&[2.0, 2.0, 2.0]), TOL),
            Err(SpatialError::Degenerate(_))
        ));

        // Nearly collinear: a plane under the default tolerance, rejected
        // under a loose one.
        let b = p(&[1.0, 0.0, 0.0]);
        let c = p(&[2.0, 1e-3, 0.0]);
        let pl = Plane::from_points(&origin, &b, &c, TOL).unwrap();
        assert!(pl.normal().is_parallel(&v(&[0.0, 0.0, 1.0]), TOL));
        assert_eq!(
            Plane::from_points(&origin, &b, &c, Tolerance::absolute(1e-3)),
            Err(SpatialError::Degenerate("The points must not be collinear.".into()))
        );
    }

    #[test]
    fn test_cartesian() {
        let pl = plane(&[1.0, 2.0, 3.0], &[0.0, 0.0, 1.0]);
        assert_eq!(pl.cartesian().unwrap(), (0.0, 0.0, 1.0, -3.0));
        let pl = plane(&[1.0, 5.0], &[1.0, 0.0]);
        assert_eq!(pl.cartesian().unwrap(), (1.0, 0.0, 0.0, -1.0));
        assert!(plane(&[0.0; 4], &[0.0, 0.0, 0.0, 1.0]).cartesian().is_err());
    }

    #[test]
    fn test_project_point_and_distance() {
        let pl = plane(&[0.0, 0.0, 0.0], &[0.0, 0.0, 2.0]);
        let q = p(&[5.0, 9.0, -3.0]);
        assert!(pl.project_point(&q).is_close([5.0, 9.0, 0.0], TOL));
        assert_eq!(pl.distance_point_signed(&q), -3.0);
        assert_eq!(pl.distance_point(&q), 3.0);
        assert_eq!(pl.side_point(&q), -1);
        assert_eq!(pl.side_point(&p(&[1.0, 1.0, 0.0])), 0);
        assert_eq!(pl.side_point(&p(&[1.0, 1.0, 0.5])), 1);
    }

    #[test]
    fn test_project_vector() {
        let pl = plane(&[0.0, 0.0, 0.0], &[0.0, 0.0, 1.0]);
        let projected = pl.project_vector(&v(&[1.0, 1.0, 1.0]));
        assert!(projected.is_close([1.0, 1.0, 0.0], TOL));
    }

    #[test]
    fn test_project_line() {
        let pl = plane(&[0.0, 0.0, 0.0], &[0.0, 0.0, 1.0]);

        let slanted = Line::new(p(&[0.0, 0.0, 5.0]), v(&[1.0, 0.0, 1.0])).unwrap();
        let projected = pl.project_line(&slanted, TOL).unwrap();
        assert!(projected.point().is_close([0.0, 0.0, 0.0], TOL));
        assert!(projected.direction().is_close([1.0, 0.0, 0.0], TOL));

        let flat = Line::new(p(&[0.0, 0.0, 5.0]), v(&[0.0, 3.0, 0.0])).unwrap();
        let projected = pl.project_line(&flat, TOL).unwrap();
        assert_eq!(projected.direction().as_slice(), &[0.0, 3.0, 0.0]);

        let vertical = Line::new(p(&[0.0, 0.0, 5.0]), v(&[0.0, 0.0, 1.0])).unwrap();
        assert!(matches!(
            pl.project_line(&vertical, TOL),
            Err(SpatialError::Degenerate(_))
        ));
    }

    #[test]
    fn test_is_close() {
        let a = plane(&[0.0, 0.0, 0.0], &[0.0, 0.0, 1.0]);
        assert!(a.is_close(&plane(&[4.0, -2.0, 0.0], &[0.0, 0.0, -3.0]), TOL));
        assert!(!a.is_close(&plane(&[0.0, 0.0, 1.0], &[0.0, 0.0, 1.0]), TOL));
    }

    #[test]
    fn test_to_mesh_horizontal() {
        let pl = plane(&[0.0, 0.0, 2.0], &[0.0, 0.0, 1.0]);
        let mesh = pl.to_mesh((-1.0, 1.0), (-1.0, 1.0)).unwrap();
        assert_eq!(mesh.x, vec![vec![-1.0, 1.0], vec![-1.0, 1.0]]);
        assert_eq!(mesh.y, vec![vec![-1.0, -1.0], vec![1.0, 1.0]]);
        assert_eq!(mesh.z, vec![vec![2.0, 2.0], vec![2.0, 2.0]]);
        let corners = pl.to_points((-1.0, 1.0), (-1.0, 1.0)).unwrap();
        assert_eq!(corners.len(), 4);
        assert!(corners.iter().all(|q| pl.contains_point(q, TOL)));
    }

    #[test]
    fn test_to_mesh_vertical() {
        let pl = plane(&[1.0, 0.0, 0.0], &[1.0, 0.0, 0.0]);
        let corners = pl.to_points((-1.0, 1.0), (-1.0, 1.0)).unwrap();
        assert!(corners.iter().all(|q| pl.contains_point(q, TOL)));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            plane(&[0.0, 0.0, 0.0], &[0.0, 0.0, 1.0]).to_string(),
            "Plane(point=Point([0.0, 0.0, 0.0]), normal=Vector([0.0, 0.0, 1.0]))"
        );
    }
}
