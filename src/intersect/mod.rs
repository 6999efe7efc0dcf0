//! Intersection operators between primitives.
//!
//! Each operator is an inherent method on the primitive it is called on:
//! - `Line::intersect_line` - coplanar, non-parallel lines (dimension ≤ 3)
//! - `Plane::intersect_line` - line not parallel to the plane
//! - `Plane::intersect_plane` - non-parallel planes, constrained least-norm point
//! - `Circle::intersect_line`, `Circle::intersect_circle`
//! - `Sphere::intersect_line`
//! - `Cylinder::intersect_line` - infinite tube or capped solid
//! - `LineSegment::intersect_line_segment`
//!
//! Tangency is not an error: the two returned points coincide.

use nalgebra::{Matrix5, Vector5};

use crate::foundation::solve_quadratic;
use crate::gp::{
    Array1d, Circle, Cylinder, Line, LineSegment, Plane, Point, Spatial, Sphere, Vector,
};
use crate::precision::Tolerance;
use crate::{Result, SpatialError};

impl Line {
    /// Point where this line meets `other`.
    ///
    /// Solved as `A + t·dₐ` with `t = ((AB × d_b)·(dₐ × d_b)) / |dₐ × d_b|²`.
    ///
    /// # Errors
    /// * `Dimension` if the lines differ in dimension or exceed three dimensions
    /// * `Degenerate` if the lines are parallel, or if their offset along
    ///   the common normal is not negligible under `tol`
    pub fn intersect_line(&self, other: &Line, tol: Tolerance) -> Result<Point> {
        if self.dimension() != other.dimension() {
            return Err(SpatialError::dimension(
                "The lines must have the same dimension.",
            ));
        }
        if self.dimension() > 3 {
            return Err(SpatialError::dimension(
                "The line dimension cannot be greater than 3.",
            ));
        }
        if self.direction().is_parallel(other.direction(), tol) {
            return Err(SpatialError::degenerate("The lines must not be parallel."));
        }

        let ab = Vector::from_points(self.point(), other.point());
        let perpendicular = self.direction().cross(other.direction())?;
        // Offset between the lines along their common normal.
        let gap = ab.dot(&perpendicular) / perpendicular.norm();
        if !tol.is_negligible(gap, ab.norm()) {
            return Err(SpatialError::degenerate("The lines must be coplanar."));
        }
        let num = ab.cross(other.direction())?.dot(&perpendicular);
        let denom = perpendicular.norm().powi(2);
        Ok(self.to_point(num / denom))
    }
}

impl Plane {
    /// Point where `line` crosses the plane.
    ///
    /// # Errors
    /// `Degenerate` if the line is parallel to the plane.
    pub fn intersect_line(&self, line: &Line, tol: Tolerance) -> Result<Point> {
        if self.normal().is_perpendicular(line.direction(), tol) {
            return Err(SpatialError::degenerate(
                "The line and plane must not be parallel.",
            ));
        }
        let plane_to_line = Vector::from_points(self.point(), line.point());
        let num = -self.normal().dot(&plane_to_line);
        let denom = self.normal().dot(line.direction());
        Ok(line.to_point(num / denom))
    }

    /// Line shared by this plane and `other`, in 3-D.
    ///
    /// The direction is `nₐ × n_b`. The point is the solution of
    ///
    /// ```text
    /// | 2I   nₐᵀ n_bᵀ | | p  |   |   0   |
    /// | nₐ   0    0   | | λₐ | = | pₐ·nₐ |
    /// | n_b  0    0   | | λ_b|   | p_b·n_b |
    /// ```
    ///
    /// # Errors
    /// * `Dimension` if either plane exceeds three dimensions
    /// * `Degenerate` if the planes are parallel
    pub fn intersect_plane(&self, other: &Plane, tol: Tolerance) -> Result<Line> {
        if self.dimension() > 3 || other.dimension() > 3 {
            return Err(SpatialError::dimension(
                "The plane dimension cannot be greater than 3.",
            ));
        }
        if self.normal().is_parallel(other.normal(), tol) {
            return Err(SpatialError::degenerate("The planes must not be parallel."));
        }

        let na = self.normal().set_dimension(3)?;
        let nb = other.normal().set_dimension(3)?;
        let dot_a = self.point().to_vector().dot(self.normal());
        let dot_b = other.point().to_vector().dot(other.normal());

        #[rustfmt::skip]
        let system = Matrix5::new(
            2.0,   0.0,   0.0,   na[0], nb[0],
            0.0,   2.0,   0.0,   na[1], nb[1],
            0.0,   0.0,   2.0,   na[2], nb[2],
            na[0], na[1], na[2], 0.0,   0.0,
            nb[0], nb[1], nb[2], 0.0,   0.0,
        );
        let rhs = Vector5::new(0.0, 0.0, 0.0, dot_a, dot_b);
        let solution = system
            .lu()
            .solve(&rhs)
            .ok_or_else(|| SpatialError::degenerate("The plane system is singular."))?;
        log::trace!("plane-plane system solution {:?}", solution.as_slice());

        let point = Point::new([solution[0], solution[1], solution[2]])?;
        Line::new(point, na.cross(&nb)?)
    }
}

impl Circle {
    /// The two points where `line` crosses the circle.
    ///
    /// # Errors
    /// * `Dimension` if the line is not 2-D
    /// * `NoIntersection` if the line misses the circle
    pub fn intersect_line(&self, line: &Line) -> Result<(Point, Point)> {
        if line.dimension() != 2 {
            return Err(SpatialError::dimension("The line must be 2D."));
        }
        // Two points on the line, relative to the center.
        let p1 = line.point() - self.point();
        let p2 = &p1 + &line.direction().unit()?;
        let (x1, y1, x2, y2) = (p1[0], p1[1], p2[0], p2[1]);

        let dx = x2 - x1;
        let dy = y2 - y1;
        let dr2 = dx * dx + dy * dy;
        let det = x1 * y2 - x2 * y1;
        let discriminant = self.radius().powi(2) * dr2 - det * det;
        if discriminant < 0.0 {
            return Err(SpatialError::no_intersection(
                "The line does not intersect the circle.",
            ));
        }

        let root = discriminant.sqrt();
        let sgn = if dy < 0.0 { -1.0 } else { 1.0 };
        let at = |pm: f64| -> Result<Point> {
            let x = (det * dy + pm * sgn * dx * root) / dr2;
            let y = (-det * dx + pm * dy.abs() * root) / dr2;
            Ok(self.point() + &Vector::new([x, y])?)
        };
        Ok((at(-1.0)?, at(1.0)?))
    }

    /// The two points where the circles meet.
    ///
    /// # Errors
    /// * `Degenerate` if the centers coincide
    /// * `NoIntersection` if the circles are separate or one contains the other
    pub fn intersect_circle(&self, other: &Circle) -> Result<(Point, Point)> {
        let (r1, r2) = (self.radius(), other.radius());
        let d = self.point().distance_point(other.point());

        if d == 0.0 {
            return Err(SpatialError::degenerate(
                "The centres of the circles are coincident.",
            ));
        }
        if d > r1 + r2 {
            return Err(SpatialError::no_intersection(
                "The circles do not intersect. These circles are separate.",
            ));
        }
        if d < (r1 - r2).abs() {
            return Err(SpatialError::no_intersection(
                "The circles do not intersect. One circle is contained within the other.",
            ));
        }

        let a = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d);
        // Clamped so that exact tangency gives a coincident pair.
        let h = (r1 * r1 - a * a).max(0.0).sqrt();
        let (c1, c2) = (self.point(), other.point());
        let middle = c1 + &(Vector::from_points(c1, c2) * (a / d));

        let at = |pm: f64| {
            Point::new([
                middle[0] + pm * h * (c1[1] - c2[1]) / d,
                middle[1] - pm * h * (c1[0] - c2[0]) / d,
            ])
        };
        Ok((at(1.0)?, at(-1.0)?))
    }
}

impl Sphere {
    /// The two points where `line` crosses the sphere, nearest along the
    /// line direction first.
    ///
    /// # Errors
    /// `NoIntersection` if the line misses the sphere.
    pub fn intersect_line(&self, line: &Line) -> Result<(Point, Point)> {
        let to_line = Vector::from_points(self.point(), line.point());
        let unit = line.direction().unit()?;
        let dot = unit.dot(&to_line);
        let discriminant = dot * dot - (to_line.norm().powi(2) - self.radius().powi(2));
        if discriminant < 0.0 {
            return Err(SpatialError::no_intersection(
                "The line does not intersect the sphere.",
            ));
        }
        let root = discriminant.sqrt();
        let at = |t: f64| line.point() + &(&unit * t);
        Ok((at(-dot - root), at(-dot + root)))
    }
}

impl Cylinder {
    /// The two points where `line` meets the cylinder.
    ///
    /// With `infinite` the cylinder is an unbounded tube around its axis.
    /// Otherwise it is a capped solid: a line through both caps returns the
    /// cap points, and lateral points beyond a cap are replaced by the cap
    /// point that exists. `n_digits` rounds the quadratic coefficients to
    /// absorb noise near tangency.
    ///
    /// # Errors
    /// * `Dimension` if the line is not 3-D
    /// * `NoIntersection` if the line misses the cylinder
    pub fn intersect_line(
        &self,
        line: &Line,
        n_digits: Option<u32>,
        infinite: bool,
    ) -> Result<(Point, Point)> {
        if line.dimension() != 3 {
            return Err(SpatialError::dimension("The line must be 3D."));
        }
        if infinite {
            self.intersect_line_infinite(line, n_digits)
        } else {
            self.intersect_line_finite(line, n_digits)
        }
    }

    fn intersect_line_infinite(&self, line: &Line, n_digits: Option<u32>) -> Result<(Point, Point)> {
        let axis = self.vector().unit()?;
        let direction = line.direction().unit()?;
        let delta = Vector::from_points(self.point(), line.point());

        // Components perpendicular to the axis.
        let direction_perp = &direction - &(&axis * direction.dot(&axis));
        let delta_perp = &delta - &(&axis * delta.dot(&axis));

        let a = direction_perp.norm().powi(2);
        let b = 2.0 * direction_perp.dot(&delta_perp);
        let c = delta_perp.norm().powi(2) - self.radius().powi(2);

        let [t1, t2] = solve_quadratic(a, b, c, n_digits).map_err(|_| {
            SpatialError::no_intersection("The line does not intersect the cylinder.")
        })?;
        let at = |t: f64| line.point() + &(&direction * t);
        Ok((at(t1), at(t2)))
    }

    fn intersect_caps(&self, line: &Line) -> (Option<Point>, Option<Point>) {
        let cap = |plane: Plane| -> Option<Point> {
            let hit = plane.intersect_line(line, Tolerance::DEFAULT).ok()?;
            (hit.distance_point(plane.point()) <= self.radius()).then_some(hit)
        };
        (cap(self.base_plane()), cap(self.top_plane()))
    }

    fn intersect_line_finite(&self, line: &Line, n_digits: Option<u32>) -> Result<(Point, Point)> {
        let (base, top) = self.intersect_caps(line);
        if let (Some(base), Some(top)) = (&base, &top) {
            return Ok((base.clone(), top.clone()));
        }

        let (a, b) = self.intersect_line_infinite(line, n_digits)?;
        let cap = base.or(top);
        let clip = |p: Point| -> Result<Point> {
            if self.between_cap_planes(&p) {
                return Ok(p);
            }
            cap.clone().ok_or_else(|| {
                SpatialError::no_intersection("The line does not intersect the cylinder.")
            })
        };
        Ok((clip(a)?, clip(b)?))
    }
}

impl LineSegment {
    /// Point where the two segments cross.
    ///
    /// # Errors
    /// * any error of [`Line::intersect_line`] for the supporting lines
    /// * `NoIntersection` if the crossing lies outside either segment
    pub fn intersect_line_segment(&self, other: &LineSegment, tol: Tolerance) -> Result<Point> {
        let line_a = Line::from_points(self.point_a(), self.point_b())?;
        let line_b = Line::from_points(other.point_a(), other.point_b())?;
        let point = line_a.intersect_line(&line_b, tol)?;
        if !(self.contains_point(&point, tol) && other.contains_point(&point, tol)) {
            return Err(SpatialError::no_intersection(
                "The line segments do not intersect.",
            ));
        }
        Ok(point)
    }
}
