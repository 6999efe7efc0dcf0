//! Sphere in 3-D space.

use std::f64::consts::PI;
use std::fmt;

use super::n_sphere::NSphere;
use super::{Point, Points, Spatial};
use crate::foundation::linspace;
use crate::visualization::SurfaceGrid;
use crate::Result;

/// A 3-D sphere given by its center and radius.
#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    base: NSphere,
}

impl Sphere {
    /// Creates a sphere.
    ///
    /// # Errors
    /// * `Dimension` if the center is not 3-D
    /// * `NonPositiveRadius` if the radius is not positive
    pub fn new(point: Point, radius: f64) -> Result<Self> {
        Ok(Self {
            base: NSphere::new(point, radius, 3)?,
        })
    }

    #[inline]
    pub fn point(&self) -> &Point {
        &self.base.point
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.base.radius
    }

    pub fn surface_area(&self) -> f64 {
        4.0 * PI * self.radius().powi(2)
    }

    pub fn volume(&self) -> f64 {
        4.0 / 3.0 * PI * self.radius().powi(3)
    }

    /// Nearest point on the sphere.
    ///
    /// # Errors
    /// `Degenerate` if `point` is the center.
    pub fn project_point(&self, point: &Point) -> Result<Point> {
        self.base.project_point(point)
    }

    /// `n_angles × n_angles` grid over polar angle `[0, π]` (rows) and
    /// azimuth `[0, 2π]` (columns).
    pub fn to_mesh(&self, n_angles: usize) -> SurfaceGrid {
        let polar = linspace(0.0, PI, n_angles);
        let azimuth = linspace(0.0, 2.0 * PI, n_angles);
        let (c, r) = (self.point(), self.radius());

        let grid = |f: &dyn Fn(f64, f64) -> f64| -> Vec<Vec<f64>> {
            polar
                .iter()
                .map(|&a| azimuth.iter().map(|&b| f(a, b)).collect())
                .collect()
        };
        SurfaceGrid::new(
            grid(&|a: f64, b: f64| c[0] + r * a.sin() * b.sin()),
            grid(&|a: f64, b: f64| c[1] + r * a.sin() * b.cos()),
            grid(&|a: f64, _: f64| c[2] + r * a.cos()),
        )
    }

    /// Mesh vertices as a point collection.
    pub fn to_points(&self, n_angles: usize) -> Result<Points> {
        self.to_mesh(n_angles).to_points()
    }
}

impl Spatial for Sphere {
    #[inline]
    fn dimension(&self) -> usize {
        3
    }

    fn distance_point(&self, point: &Point) -> f64 {
        self.base.distance_point(point)
    }
}

impl fmt::Display for Sphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.base.fmt_named(f, "Sphere")
    }
}
