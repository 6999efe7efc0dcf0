//! Best-fit regression of primitives to point sets.
//!
//! Lines and planes minimise the orthogonal sum of squared distances through
//! the singular value decomposition of the mean-centred points. Circles and
//! spheres use the algebraic (Kasa) fit `2·c·p + k = |p|²`, solved in the
//! least-squares sense, with radius `√(|c|² + k)`.

use nalgebra::{DMatrix, DVector};

use crate::foundation::{left_singular_vectors, lstsq, right_singular_vectors};
use crate::gp::{Circle, Line, Plane, Point, Points, Sphere, Vector};
use crate::{Result, SpatialError};

/// Singular vector `n` (zero-based, by decreasing singular value).
fn nth_singular_vector(vectors: Vec<Vec<f64>>, n: usize) -> Result<Vector> {
    let values = vectors
        .into_iter()
        .nth(n)
        .ok_or_else(|| SpatialError::degenerate("Not enough singular vectors."))?;
    Vector::new(values)
}

impl Line {
    /// Line of best fit through `points`.
    ///
    /// The line point is the centroid; the direction is the first right
    /// singular vector of the mean-centred points. `tol` is the rank
    /// threshold of the concurrency check.
    ///
    /// # Errors
    /// `Degenerate` if the points are concurrent.
    pub fn best_fit(points: &Points, tol: Option<f64>) -> Result<Line> {
        if points.are_concurrent(tol) {
            return Err(SpatialError::degenerate("The points must not be concurrent."));
        }
        let (centered, centroid) = points.mean_center_with_centroid();
        let direction = nth_singular_vector(right_singular_vectors(&centered.to_matrix())?, 0)?;
        log::trace!("best-fit line through {centroid} along {direction}");
        Line::new(centroid, direction)
    }
}

impl Plane {
    /// Plane of best fit through `points`.
    ///
    /// The plane point is the centroid; the normal is the direction of least
    /// variance (third left singular vector of the transposed mean-centred
    /// matrix). Points of lower dimension are padded into 3-D.
    ///
    /// # Errors
    /// * `Dimension` if the points have more than three dimensions
    /// * `Degenerate` if the points are collinear
    pub fn best_fit(points: &Points, tol: Option<f64>) -> Result<Plane> {
        if points.dimension() > 3 {
            return Err(SpatialError::dimension("The points must be 3D."));
        }
        if points.are_collinear(tol) {
            return Err(SpatialError::degenerate("The points must not be collinear."));
        }
        let points = points.set_dimension(3)?;
        let (centered, centroid) = points.mean_center_with_centroid();
        let vectors = left_singular_vectors(&centered.to_matrix().transpose())?;
        let normal = nth_singular_vector(vectors, 2)?;
        log::trace!("best-fit plane through {centroid} with normal {normal}");
        Plane::new(centroid, normal)
    }
}

/// Solves the algebraic circle / sphere system for `(center, radius)`.
fn fit_n_sphere(points: &Points) -> Result<(Point, f64)> {
    let dim = points.dimension();
    let a = DMatrix::from_fn(points.len(), dim + 1, |i, j| {
        if j < dim {
            2.0 * points.row(i)[j]
        } else {
            1.0
        }
    });
    let b = DVector::from_iterator(
        points.len(),
        points.iter().map(|p| p.to_vector().norm().powi(2)),
    );
    let solution = lstsq(&a, &b)?;

    let center: Vec<f64> = solution.iter().take(dim).copied().collect();
    let offset = solution[dim];
    let radius_squared = offset + center.iter().map(|c| c * c).sum::<f64>();
    log::trace!("algebraic fit center {center:?} offset {offset}");
    Ok((Point::new(center)?, radius_squared.sqrt()))
}

impl Circle {
    /// Circle of best fit through 2-D `points`.
    ///
    /// # Errors
    /// * `Dimension` if the points are not 2-D
    /// * `Shape` for fewer than three points
    /// * `Degenerate` if the points are collinear
    pub fn best_fit(points: &Points) -> Result<Circle> {
        if points.dimension() != 2 {
            return Err(SpatialError::dimension("The points must be 2D."));
        }
        if points.len() < 3 {
            return Err(SpatialError::Shape("There must be at least 3 points.".into()));
        }
        if points.affine_rank(None) != 2 {
            return Err(SpatialError::degenerate("The points must not be collinear."));
        }
        let (center, radius) = fit_n_sphere(points)?;
        Circle::new(center, radius)
    }
}

impl Sphere {
    /// Sphere of best fit through 3-D `points`.
    ///
    /// # Errors
    /// * `Dimension` if the points are not 3-D
    /// * `Shape` for fewer than four points
    /// * `Degenerate` if the points are coplanar
    pub fn best_fit(points: &Points) -> Result<Sphere> {
        if points.dimension() != 3 {
            return Err(SpatialError::dimension("The points must be 3D."));
        }
        if points.len() < 4 {
            return Err(SpatialError::Shape("There must be at least 4 points.".into()));
        }
        if points.affine_rank(None) != 3 {
            return Err(SpatialError::degenerate("The points must not be in a plane."));
        }
        let (center, radius) = fit_n_sphere(points)?;
        Sphere::new(center, radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gp::{Array1d, Spatial};
    use crate::precision::Tolerance;
    use approx::assert_abs_diff_eq;

    const TOL: Tolerance = Tolerance::DEFAULT;

    fn points(rows: &[&[f64]]) -> Points {
        Points::new(rows.iter().map(|r| r.to_vec())).unwrap()
    }

    #[test]
    fn test_line_best_fit() {
        let pts = points(&[&[0.0, 0.0], &[1.0, 1.0], &[2.0, 2.0]]);
        let line = Line::best_fit(&pts, None).unwrap();
        assert!(line.point().is_close([1.0, 1.0], TOL));
        assert!(line.direction().is_parallel(&Vector::new([1.0, 1.0]).unwrap(), TOL));
        assert_abs_diff_eq!(line.direction().norm(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(line.sum_squares(&pts), 0.0, epsilon = 1e-18);

        let pts = points(&[&[0.0, 0.0, 0.0], &[1.0, 0.0, 0.1], &[2.0, 0.0, -0.1], &[3.0, 0.0, 0.0]]);
        let line = Line::best_fit(&pts, None).unwrap();
        assert!(line.point().is_close([1.5, 0.0, 0.0], TOL));
        assert!(line.direction()[0].abs() > 0.99);
    }

    #[test]
    fn test_line_best_fit_concurrent() {
        let pts = points(&[&[1.0, 2.0], &[1.0, 2.0]]);
        assert_eq!(
            Line::best_fit(&pts, None),
            Err(SpatialError::Degenerate("The points must not be concurrent.".into()))
        );
    }

    #[test]
    fn test_plane_best_fit() {
        let pts = points(&[&[0.0, 0.0, 0.0], &[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0], &[1.0, 1.0, 0.0]]);
        let plane = Plane::best_fit(&pts, None).unwrap();
        assert!(plane.point().is_close([0.5, 0.5, 0.0], TOL));
        assert!(plane.normal().is_parallel(&Vector::new([0.0, 0.0, 1.0]).unwrap(), TOL));

        let pts = points(&[&[0.0, 0.0, 0.0], &[1.0, 0.0, 0.0], &[0.0, 1.0, 1.0]]);
        let plane = Plane::best_fit(&pts, None).unwrap();
        for p in pts.iter() {
            assert!(plane.contains_point(p, Tolerance::absolute(1e-9)));
        }
    }

    #[test]
    fn test_plane_best_fit_2d_points() {
        let pts = points(&[&[0.0, 0.0], &[1.0, 0.0], &[0.0, 1.0]]);
        let plane = Plane::best_fit(&pts, None).unwrap();
        assert_eq!(plane.dimension(), 3);
        assert!(plane.normal().is_parallel(&Vector::new([0.0, 0.0, 1.0]).unwrap(), TOL));
    }

    #[test]
    fn test_plane_best_fit_failures() {
        let collinear = points(&[&[0.0, 0.0, 0.0], &[1.0, 1.0, 1.0], &[2.0, 2.0, 2.0]]);
        assert!(matches!(
            Plane::best_fit(&collinear, None),
            Err(SpatialError::Degenerate(_))
        ));
        let four_d = points(&[&[0.0; 4], &[1.0, 0.0, 0.0, 0.0], &[0.0, 1.0, 0.0, 0.0]]);
        assert!(matches!(
            Plane::best_fit(&four_d, None),
            Err(SpatialError::Dimension(_))
        ));
    }

    #[test]
    fn test_circle_best_fit() {
        let pts = points(&[&[2.0, 0.0], &[-2.0, 0.0], &[0.0, 2.0]]);
        let circle = Circle::best_fit(&pts).unwrap();
        assert!(circle.point().is_close([0.0, 0.0], Tolerance::absolute(1e-9)));
        assert_abs_diff_eq!(circle.radius(), 2.0, epsilon = 1e-9);

        let pts = points(&[&[2.0, 1.0], &[0.0, 1.0], &[1.0, 2.0], &[1.0, 0.0]]);
        let circle = Circle::best_fit(&pts).unwrap();
        assert!(circle.point().is_close([1.0, 1.0], TOL));
        assert_abs_diff_eq!(circle.radius(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_circle_best_fit_failures() {
        assert!(matches!(
            Circle::best_fit(&points(&[&[0.0, 0.0, 0.0], &[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]])),
            Err(SpatialError::Dimension(_))
        ));
        assert!(matches!(
            Circle::best_fit(&points(&[&[0.0, 0.0], &[1.0, 0.0]])),
            Err(SpatialError::Shape(_))
        ));
        assert!(matches!(
            Circle::best_fit(&points(&[&[0.0, 0.0], &[1.0, 1.0], &[2.0, 2.0]])),
            Err(SpatialError::Degenerate(_))
        ));
    }

    #[test]
    fn test_sphere_best_fit() {
        let pts = points(&[&[1.0, 0.0, 1.0], &[0.0, 1.0, 1.0], &[1.0, 2.0, 1.0], &[1.0, 1.0, 2.0]]);
        let sphere = Sphere::best_fit(&pts).unwrap();
        assert!(sphere.point().is_close([1.0, 1.0, 1.0], TOL));
        assert_abs_diff_eq!(sphere.radius(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_sphere_best_fit_failures() {
        let planar = points(&[&[0.0, 0.0, 0.0], &[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0], &[1.0, 1.0, 0.0]]);
        assert_eq!(
            Sphere::best_fit(&planar),
            Err(SpatialError::Degenerate("The points must not be in a plane.".into()))
        );
        let few = points(&[&[0.0, 0.0, 0.0], &[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]]);
        assert!(matches!(Sphere::best_fit(&few), Err(SpatialError::Shape(_))));
    }
}
