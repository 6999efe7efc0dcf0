//! Finite circular cylinder in 3-D space.
//!
//! The cylinder runs from `point` (base center) to `point + vector` (top
//! center). Line intersection may treat it as infinite; see the intersect
//! module.

use std::f64::consts::PI;
use std::fmt;

use super::{Array1d, Line, Plane, Point, Points, Spatial, Vector};
use crate::foundation::linspace;
use crate::precision::Tolerance;
use crate::visualization::SurfaceGrid;
use crate::{Result, SpatialError};

/// A cylinder with base center, axis vector and radius.
#[derive(Clone, Debug, PartialEq)]
pub struct Cylinder {
    point: Point,
    vector: Vector,
    radius: f64,
}

impl Cylinder {
    /// Creates a cylinder.
    ///
    /// # Errors
    /// * `Dimension` if the point or vector is not 3-D
    /// * `ZeroVector` if the axis vector is zero
    /// * `NonPositiveRadius` if the radius is not positive
    pub fn new(point: Point, vector: Vector, radius: f64) -> Result<Self> {
        if point.dimension() != 3 {
            return Err(SpatialError::dimension("The point must be 3D."));
        }
        if vector.dimension() != 3 {
            return Err(SpatialError::dimension("The vector must be 3D."));
        }
        if vector.norm() == 0.0 {
            return Err(SpatialError::ZeroVector);
        }
        if !radius.is_finite() {
            return Err(SpatialError::NonFinite);
        }
        if radius <= 0.0 {
            return Err(SpatialError::NonPositiveRadius(radius));
        }
        Ok(Self {
            point,
            vector,
            radius,
        })
    }

    /// Cylinder with base center `a` and top center `b`.
    pub fn from_points(a: &Point, b: &Point, radius: f64) -> Result<Self> {
        Self::new(a.clone(), Vector::from_points(a, b), radius)
    }

    #[inline]
    pub fn point(&self) -> &Point {
        &self.point
    }

    #[inline]
    pub fn vector(&self) -> &Vector {
        &self.vector
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        3
    }

    /// Distance between the two cap centers.
    #[inline]
    pub fn length(&self) -> f64 {
        self.vector.norm()
    }

    pub fn lateral_surface_area(&self) -> f64 {
        2.0 * PI * self.radius * self.length()
    }

    pub fn surface_area(&self) -> f64 {
        self.lateral_surface_area() + 2.0 * PI * self.radius.powi(2)
    }

    pub fn volume(&self) -> f64 {
        PI * self.radius.powi(2) * self.length()
    }

    /// The axis as a line from base to top.
    pub fn axis(&self) -> Line {
        Line::from_axis(self.point.clone(), self.vector.clone())
    }

    /// Plane of the base cap, normal along the axis.
    pub(crate) fn base_plane(&self) -> Plane {
        Plane::from_axis(self.point.clone(), self.vector.clone())
    }

    /// Plane of the top cap, normal along the axis.
    pub(crate) fn top_plane(&self) -> Plane {
        Plane::from_axis(&self.point + &self.vector, self.vector.clone())
    }

    /// Returns true if `point` lies between the two cap planes (inclusive).
    pub(crate) fn between_cap_planes(&self, point: &Point) -> bool {
        let height = self.base_plane().distance_point_signed(point);
        (0.0..=self.length()).contains(&height)
    }

    /// Returns true if `point` is inside the solid cylinder or on its boundary.
    pub fn is_point_within(&self, point: &Point) -> bool {
        self.axis().distance_point(point) <= self.radius && self.between_cap_planes(point)
    }

    /// Lateral surface grid: `n_angles` rows around the axis, `n_along_axis`
    /// columns from base to top.
    pub fn to_mesh(&self, n_along_axis: usize, n_angles: usize) -> Result<SurfaceGrid> {
        let axis = self.vector.unit()?;
        let other = axis.different_direction(Tolerance::DEFAULT)?;
        let u1 = axis.cross(&other)?.unit()?;
        let u2 = axis.cross(&u1)?.unit()?;

        let heights = linspace(0.0, self.length(), n_along_axis);
        let angles = linspace(0.0, 2.0 * PI, n_angles);
        let component = |i: usize| -> Vec<Vec<f64>> {
            angles
                .iter()
                .map(|theta| {
                    heights
                        .iter()
                        .map(|t| {
                            self.point[i]
                                + axis[i] * t
                                + self.radius * theta.sin() * u1[i]
                                + self.radius * theta.cos() * u2[i]
                        })
                        .collect()
                })
                .collect()
        };
        Ok(SurfaceGrid::new(component(0), component(1), component(2)))
    }

    /// Mesh vertices as a point collection.
    pub fn to_points(&self, n_along_axis: usize, n_angles: usize) -> Result<Points> {
        self.to_mesh(n_along_axis, n_angles)?.to_points()
    }
}

impl fmt::Display for Cylinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cylinder(point={}, vector={}, radius={})",
            self.point, self.vector, self.radius
        )
    }
}
