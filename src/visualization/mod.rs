//! Visualization module - rendering hooks for spatial primitives
//!
//! The library never draws anything itself. It describes each primitive in
//! terms of a few drawing calls on an external surface:
//! - [`Canvas2d`]: scatter, polyline, arrow and circle in the plane
//! - [`Canvas3d`]: scatter, polyline and surface grid in space
//!
//! [`Plot::plotter`] picks the 2-D or 3-D hook from the primitive's dimension,
//! and [`plot_2d`] / [`plot_3d`] draw a batch of plotters onto one surface.

use crate::gp::{
    Array1d, Circle, Cylinder, Line, LineSegment, Plane, Point, Points, Side, Spatial, Sphere,
    Triangle, Vector, Vertex,
};
use crate::{Result, SpatialError};

/// Which part of a triangle to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrianglePart {
    /// The three vertices
    Points,
    /// The three sides
    Lines,
}

/// Style forwarded to every drawing call
#[derive(Debug, Clone, PartialEq)]
pub struct PlotStyle {
    /// Color as [R, G, B] normalized to [0.0, 1.0]; `None` lets the canvas choose
    pub color: Option<[f64; 3]>,
    /// Opacity (0.0 = transparent, 1.0 = opaque)
    pub alpha: f64,
    /// Width of polylines and arrows
    pub line_width: f64,
    /// Size of scatter markers
    pub marker_size: f64,
    /// Legend label
    pub label: Option<String>,
}

impl Default for PlotStyle {
    fn default() -> Self {
        PlotStyle {
            color: None,
            alpha: 1.0,
            line_width: 1.0,
            marker_size: 6.0,
            label: None,
        }
    }
}

impl PlotStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, r: f64, g: f64, b: f64) -> Self {
        self.color = Some([r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0)]);
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width.max(0.1);
        self
    }

    pub fn with_marker_size(mut self, size: f64) -> Self {
        self.marker_size = size.max(0.1);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Style plus the per-primitive drawing parameters
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    pub style: PlotStyle,
    /// Line parameters of the two drawn endpoints, `to_point(t)`
    pub t_range: (f64, f64),
    /// Tail of a drawn vector; the origin when `None`
    pub vector_tail: Option<Point>,
    /// Scale applied to a drawn vector
    pub vector_scale: f64,
    /// Plane extent along x and y around the plane point
    pub lims_x: (f64, f64),
    pub lims_y: (f64, f64),
    /// Mesh resolution around spheres and cylinders
    pub n_angles: usize,
    /// Mesh resolution along a cylinder axis
    pub n_along_axis: usize,
    pub triangle_part: TrianglePart,
}

impl Default for PlotOptions {
    fn default() -> Self {
        PlotOptions {
            style: PlotStyle::default(),
            t_range: (0.0, 1.0),
            vector_tail: None,
            vector_scale: 1.0,
            lims_x: (-1.0, 1.0),
            lims_y: (-1.0, 1.0),
            n_angles: 30,
            n_along_axis: 100,
            triangle_part: TrianglePart::Points,
        }
    }
}

impl PlotOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: PlotStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_t_range(mut self, t_1: f64, t_2: f64) -> Self {
        self.t_range = (t_1, t_2);
        self
    }

    pub fn with_vector_tail(mut self, tail: Point) -> Self {
        self.vector_tail = Some(tail);
        self
    }

    pub fn with_vector_scale(mut self, scale: f64) -> Self {
        self.vector_scale = scale;
        self
    }

    pub fn with_lims(mut self, lims_x: (f64, f64), lims_y: (f64, f64)) -> Self {
        self.lims_x = lims_x;
        self.lims_y = lims_y;
        self
    }

    pub fn with_resolution(mut self, n_along_axis: usize, n_angles: usize) -> Self {
        self.n_along_axis = n_along_axis;
        self.n_angles = n_angles;
        self
    }

    pub fn with_triangle_part(mut self, part: TrianglePart) -> Self {
        self.triangle_part = part;
        self
    }
}

/// Surface mesh as three coordinate grids of equal shape
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceGrid {
    pub x: Vec<Vec<f64>>,
    pub y: Vec<Vec<f64>>,
    pub z: Vec<Vec<f64>>,
}

impl SurfaceGrid {
    pub fn new(x: Vec<Vec<f64>>, y: Vec<Vec<f64>>, z: Vec<Vec<f64>>) -> Self {
        Self { x, y, z }
    }

    /// `(rows, columns)` of the grids.
    pub fn shape(&self) -> (usize, usize) {
        (self.x.len(), self.x.first().map_or(0, Vec::len))
    }

    /// Grid vertices in row-major order.
    ///
    /// # Errors
    /// `Empty` for an empty grid.
    pub fn to_points(&self) -> Result<Points> {
        let xs = self.x.iter().flatten();
        let ys = self.y.iter().flatten();
        let zs = self.z.iter().flatten();
        Points::new(xs.zip(ys).zip(zs).map(|((&x, &y), &z)| [x, y, z]))
    }
}

/// Drawing surface in the plane
pub trait Canvas2d {
    fn scatter(&mut self, points: &[[f64; 2]], style: &PlotStyle);
    fn polyline(&mut self, points: &[[f64; 2]], style: &PlotStyle);
    /// Arrow from `tail` to `tail + delta`.
    fn arrow(&mut self, tail: [f64; 2], delta: [f64; 2], style: &PlotStyle);
    fn circle(&mut self, center: [f64; 2], radius: f64, style: &PlotStyle);
}

/// Drawing surface in space
pub trait Canvas3d {
    fn scatter(&mut self, points: &[[f64; 3]], style: &PlotStyle);
    fn polyline(&mut self, points: &[[f64; 3]], style: &PlotStyle);
    fn surface(&mut self, grid: &SurfaceGrid, style: &PlotStyle);
}

/// Deferred drawing call on a 2-D canvas
pub type Draw2d<'a> = Box<dyn Fn(&mut dyn Canvas2d) -> Result<()> + 'a>;

/// Deferred drawing call on a 3-D canvas
pub type Draw3d<'a> = Box<dyn Fn(&mut dyn Canvas3d) -> Result<()> + 'a>;

/// A primitive bound to its drawing hook
pub enum Plotter<'a> {
    /// Draws on a 2-D canvas
    Flat(Draw2d<'a>),
    /// Draws on a 3-D canvas
    Spatial(Draw3d<'a>),
}

impl Plotter<'_> {
    pub fn dimension(&self) -> usize {
        match self {
            Plotter::Flat(_) => 2,
            Plotter::Spatial(_) => 3,
        }
    }

    pub fn draw_2d(&self, canvas: &mut dyn Canvas2d) -> Result<()> {
        match self {
            Plotter::Flat(draw) => draw(canvas),
            Plotter::Spatial(_) => Err(SpatialError::NotPlottable(
                "The plotter draws in 3D.".into(),
            )),
        }
    }

    pub fn draw_3d(&self, canvas: &mut dyn Canvas3d) -> Result<()> {
        match self {
            Plotter::Spatial(draw) => draw(canvas),
            Plotter::Flat(_) => Err(SpatialError::NotPlottable(
                "The plotter draws in 2D.".into(),
            )),
        }
    }
}

/// Draws every plotter onto one 2-D canvas.
pub fn plot_2d(canvas: &mut dyn Canvas2d, plotters: &[Plotter<'_>]) -> Result<()> {
    plotters.iter().try_for_each(|plotter| plotter.draw_2d(canvas))
}

/// Draws every plotter onto one 3-D canvas.
pub fn plot_3d(canvas: &mut dyn Canvas3d, plotters: &[Plotter<'_>]) -> Result<()> {
    plotters.iter().try_for_each(|plotter| plotter.draw_3d(canvas))
}

fn not_plottable(dim: usize) -> SpatialError {
    let err = SpatialError::NotPlottable(format!("The object cannot be plotted in {dim}D."));
    log::debug!("{err}");
    err
}

/// Drawing hooks of a primitive.
///
/// Primitives override the hooks they support; the others report
/// `NotPlottable`.
pub trait Plot {
    /// Dimension used to choose between the 2-D and 3-D hook.
    fn plot_dimension(&self) -> usize;

    fn supports_2d(&self) -> bool {
        false
    }

    fn supports_3d(&self) -> bool {
        false
    }

    fn plot_2d(&self, _canvas: &mut dyn Canvas2d, _options: &PlotOptions) -> Result<()> {
        Err(not_plottable(2))
    }

    fn plot_3d(&self, _canvas: &mut dyn Canvas3d, _options: &PlotOptions) -> Result<()> {
        Err(not_plottable(3))
    }

    /// Binds the hook matching the primitive's dimension.
    ///
    /// # Errors
    /// `NotPlottable` if the dimension is neither 2 nor 3, or the primitive
    /// has no hook for it.
    fn plotter(&self, options: PlotOptions) -> Result<Plotter<'_>>
    where
        Self: Sized,
    {
        match self.plot_dimension() {
            2 if self.supports_2d() => Ok(Plotter::Flat(Box::new(
                move |canvas: &mut dyn Canvas2d| self.plot_2d(canvas, &options),
            ))),
            3 if self.supports_3d() => Ok(Plotter::Spatial(Box::new(
                move |canvas: &mut dyn Canvas3d| self.plot_3d(canvas, &options),
            ))),
            dim @ (2 | 3) => Err(not_plottable(dim)),
            _ => Err(SpatialError::NotPlottable(
                "The dimension must be 2 or 3.".into(),
            )),
        }
    }
}

/// Coordinates padded with zeros to exactly `N` components.
fn fixed<const N: usize>(values: &[f64]) -> Result<[f64; N]> {
    if values.len() > N {
        return Err(not_plottable(N));
    }
    let mut out = [0.0; N];
    out[..values.len()].copy_from_slice(values);
    Ok(out)
}

fn fixed_all<const N: usize>(points: &[&Point]) -> Result<Vec<[f64; N]>> {
    points.iter().map(|p| fixed(p.as_slice())).collect()
}

impl Plot for Point {
    fn plot_dimension(&self) -> usize {
        self.dimension()
    }

    fn supports_2d(&self) -> bool {
        true
    }

    fn supports_3d(&self) -> bool {
        true
    }

    fn plot_2d(&self, canvas: &mut dyn Canvas2d, options: &PlotOptions) -> Result<()> {
        canvas.scatter(&[fixed(self.as_slice())?], &options.style);
        Ok(())
    }

    fn plot_3d(&self, canvas: &mut dyn Canvas3d, options: &PlotOptions) -> Result<()> {
        canvas.scatter(&[fixed(self.as_slice())?], &options.style);
        Ok(())
    }
}

impl Plot for Points {
    fn plot_dimension(&self) -> usize {
        self.dimension()
    }

    fn supports_2d(&self) -> bool {
        true
    }

    fn supports_3d(&self) -> bool {
        true
    }

    fn plot_2d(&self, canvas: &mut dyn Canvas2d, options: &PlotOptions) -> Result<()> {
        let rows: Vec<&Point> = self.iter().collect();
        canvas.scatter(&fixed_all(&rows)?, &options.style);
        Ok(())
    }

    fn plot_3d(&self, canvas: &mut dyn Canvas3d, options: &PlotOptions) -> Result<()> {
        let rows: Vec<&Point> = self.iter().collect();
        canvas.scatter(&fixed_all(&rows)?, &options.style);
        Ok(())
    }
}

impl Vector {
    fn tail_and_head(&self, options: &PlotOptions) -> Result<(Point, Vector)> {
        let tail = match &options.vector_tail {
            Some(tail) => tail.clone(),
            None => Point::origin(self.dimension())?,
        };
        Ok((tail, self * options.vector_scale))
    }
}

impl Plot for Vector {
    fn plot_dimension(&self) -> usize {
        self.dimension()
    }

    fn supports_2d(&self) -> bool {
        true
    }

    fn supports_3d(&self) -> bool {
        true
    }

    /// Arrow from the tail.
    fn plot_2d(&self, canvas: &mut dyn Canvas2d, options: &PlotOptions) -> Result<()> {
        let (tail, delta) = self.tail_and_head(options)?;
        canvas.arrow(fixed(tail.as_slice())?, fixed(delta.as_slice())?, &options.style);
        Ok(())
    }

    /// Segment from the tail to the head.
    fn plot_3d(&self, canvas: &mut dyn Canvas3d, options: &PlotOptions) -> Result<()> {
        let (tail, delta) = self.tail_and_head(options)?;
        let head = &tail + &delta;
        canvas.polyline(&fixed_all(&[&tail, &head])?, &options.style);
        Ok(())
    }
}

impl Line {
    fn plot_endpoints(&self, options: &PlotOptions) -> (Point, Point) {
        let (t_1, t_2) = options.t_range;
        (self.to_point(t_1), self.to_point(t_2))
    }
}

impl Plot for Line {
    fn plot_dimension(&self) -> usize {
        self.dimension()
    }

    fn supports_2d(&self) -> bool {
        true
    }

    fn supports_3d(&self) -> bool {
        true
    }

    fn plot_2d(&self, canvas: &mut dyn Canvas2d, options: &PlotOptions) -> Result<()> {
        let (a, b) = self.plot_endpoints(options);
        canvas.polyline(&fixed_all(&[&a, &b])?, &options.style);
        Ok(())
    }

    fn plot_3d(&self, canvas: &mut dyn Canvas3d, options: &PlotOptions) -> Result<()> {
        let (a, b) = self.plot_endpoints(options);
        canvas.polyline(&fixed_all(&[&a, &b])?, &options.style);
        Ok(())
    }
}

impl Plot for LineSegment {
    fn plot_dimension(&self) -> usize {
        self.point_a().dimension()
    }

    fn supports_2d(&self) -> bool {
        true
    }

    fn supports_3d(&self) -> bool {
        true
    }

    fn plot_2d(&self, canvas: &mut dyn Canvas2d, options: &PlotOptions) -> Result<()> {
        canvas.polyline(&fixed_all(&[self.point_a(), self.point_b()])?, &options.style);
        Ok(())
    }

    fn plot_3d(&self, canvas: &mut dyn Canvas3d, options: &PlotOptions) -> Result<()> {
        canvas.polyline(&fixed_all(&[self.point_a(), self.point_b()])?, &options.style);
        Ok(())
    }
}

impl Plot for Plane {
    fn plot_dimension(&self) -> usize {
        self.dimension()
    }

    fn supports_3d(&self) -> bool {
        true
    }

    fn plot_3d(&self, canvas: &mut dyn Canvas3d, options: &PlotOptions) -> Result<()> {
        let mesh = self.to_mesh(options.lims_x, options.lims_y)?;
        canvas.surface(&mesh, &options.style);
        Ok(())
    }
}

impl Plot for Circle {
    fn plot_dimension(&self) -> usize {
        self.dimension()
    }

    fn supports_2d(&self) -> bool {
        true
    }

    fn plot_2d(&self, canvas: &mut dyn Canvas2d, options: &PlotOptions) -> Result<()> {
        canvas.circle(fixed(self.point().as_slice())?, self.radius(), &options.style);
        Ok(())
    }
}

impl Plot for Sphere {
    fn plot_dimension(&self) -> usize {
        self.dimension()
    }

    fn supports_3d(&self) -> bool {
        true
    }

    fn plot_3d(&self, canvas: &mut dyn Canvas3d, options: &PlotOptions) -> Result<()> {
        canvas.surface(&self.to_mesh(options.n_angles), &options.style);
        Ok(())
    }
}

impl Plot for Cylinder {
    fn plot_dimension(&self) -> usize {
        self.dimension()
    }

    fn supports_3d(&self) -> bool {
        true
    }

    fn plot_3d(&self, canvas: &mut dyn Canvas3d, options: &PlotOptions) -> Result<()> {
        let mesh = self.to_mesh(options.n_along_axis, options.n_angles)?;
        canvas.surface(&mesh, &options.style);
        Ok(())
    }
}

impl Plot for Triangle {
    fn plot_dimension(&self) -> usize {
        self.dimension()
    }

    fn supports_2d(&self) -> bool {
        true
    }

    fn supports_3d(&self) -> bool {
        true
    }

    fn plot_2d(&self, canvas: &mut dyn Canvas2d, options: &PlotOptions) -> Result<()> {
        match options.triangle_part {
            TrianglePart::Points => self.vertices().iter().try_for_each(|p| p.plot_2d(canvas, options)),
            TrianglePart::Lines => self.sides().iter().try_for_each(|l| l.plot_2d(canvas, options)),
        }
    }

    fn plot_3d(&self, canvas: &mut dyn Canvas3d, options: &PlotOptions) -> Result<()> {
        match options.triangle_part {
            TrianglePart::Points => self.vertices().iter().try_for_each(|p| p.plot_3d(canvas, options)),
            TrianglePart::Lines => self.sides().iter().try_for_each(|l| l.plot_3d(canvas, options)),
        }
    }
}

impl Triangle {
    fn vertices(&self) -> [&Point; 3] {
        Vertex::ALL.map(|vertex| self.point(vertex))
    }

    fn sides(&self) -> [Line; 3] {
        Side::ALL.map(|side| self.line(side))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl Canvas2d for Recorder {
        fn scatter(&mut self, points: &[[f64; 2]], _style: &PlotStyle) {
            self.calls.push(format!("scatter {points:?}"));
        }

        fn polyline(&mut self, points: &[[f64; 2]], _style: &PlotStyle) {
            self.calls.push(format!("polyline {points:?}"));
        }

        fn arrow(&mut self, tail: [f64; 2], delta: [f64; 2], _style: &PlotStyle) {
            self.calls.push(format!("arrow {tail:?} {delta:?}"));
        }

        fn circle(&mut self, center: [f64; 2], radius: f64, _style: &PlotStyle) {
            self.calls.push(format!("circle {center:?} {radius}"));
        }
    }

    impl Canvas3d for Recorder {
        fn scatter(&mut self, points: &[[f64; 3]], _style: &PlotStyle) {
            self.calls.push(format!("scatter {points:?}"));
        }

        fn polyline(&mut self, points: &[[f64; 3]], _style: &PlotStyle) {
            self.calls.push(format!("polyline {points:?}"));
        }

        fn surface(&mut self, grid: &SurfaceGrid, _style: &PlotStyle) {
            self.calls.push(format!("surface {:?}", grid.shape()));
        }
    }

    fn p(values: &[f64]) -> Point {
        Point::new(values).unwrap()
    }

    fn v(values: &[f64]) -> Vector {
        Vector::new(values).unwrap()
    }

    #[test]
    fn test_plot_style_builder() {
        let style = PlotStyle::new()
            .with_color(1.5, -0.5, 0.5)
            .with_alpha(2.0)
            .with_line_width(0.0)
            .with_label("fit");
        assert_eq!(style.color, Some([1.0, 0.0, 0.5]));
        assert_eq!(style.alpha, 1.0);
        assert_eq!(style.line_width, 0.1);
        assert_eq!(style.label.as_deref(), Some("fit"));
        assert_eq!(PlotStyle::default().color, None);
    }

    #[test]
    fn test_plotter_dispatch() {
        let line_2d = Line::new(p(&[0.0, 0.0]), v(&[1.0, 1.0])).unwrap();
        assert_eq!(line_2d.plotter(PlotOptions::new()).unwrap().dimension(), 2);

        let sphere = Sphere::new(p(&[0.0, 0.0, 0.0]), 1.0).unwrap();
        assert_eq!(sphere.plotter(PlotOptions::new()).unwrap().dimension(), 3);

        let point_4d = p(&[0.0, 0.0, 0.0, 0.0]);
        assert_eq!(
            point_4d.plotter(PlotOptions::new()).err(),
            Some(SpatialError::NotPlottable("The dimension must be 2 or 3.".into()))
        );

        let plane_2d = Plane::new(p(&[0.0, 0.0]), v(&[0.0, 1.0])).unwrap();
        assert!(matches!(
            plane_2d.plotter(PlotOptions::new()),
            Err(SpatialError::NotPlottable(_))
        ));
    }

    #[test]
    fn test_draw_2d() {
        let mut canvas = Recorder::default();
        let circle = Circle::new(p(&[1.0, 2.0]), 3.0).unwrap();
        let vector = v(&[1.0, 1.0]);
        let line = Line::new(p(&[0.0, 0.0]), v(&[1.0, 0.0])).unwrap();

        let plotters = [
            circle.plotter(PlotOptions::new()).unwrap(),
            vector
                .plotter(PlotOptions::new().with_vector_tail(p(&[1.0, 0.0])).with_vector_scale(2.0))
                .unwrap(),
            line.plotter(PlotOptions::new().with_t_range(-1.0, 2.0)).unwrap(),
        ];
        plot_2d(&mut canvas, &plotters).unwrap();
        assert_eq!(
            canvas.calls,
            vec![
                "circle [1.0, 2.0] 3",
                "arrow [1.0, 0.0] [2.0, 2.0]",
                "polyline [[-1.0, 0.0], [2.0, 0.0]]",
            ]
        );
    }

    #[test]
    fn test_draw_3d() {
        let mut canvas = Recorder::default();
        let plane = Plane::new(p(&[0.0, 0.0, 0.0]), v(&[0.0, 0.0, 1.0])).unwrap();
        let cylinder = Cylinder::new(p(&[0.0, 0.0, 0.0]), v(&[0.0, 0.0, 2.0]), 1.0).unwrap();
        let vector = v(&[0.0, 0.0, 1.0]);

        let plotters = [
            plane.plotter(PlotOptions::new()).unwrap(),
            cylinder.plotter(PlotOptions::new().with_resolution(5, 8)).unwrap(),
            vector.plotter(PlotOptions::new()).unwrap(),
        ];
        plot_3d(&mut canvas, &plotters).unwrap();
        assert_eq!(
            canvas.calls,
            vec![
                "surface (2, 2)",
                "surface (8, 5)",
                "polyline [[0.0, 0.0, 0.0], [0.0, 0.0, 1.0]]",
            ]
        );
    }

    #[test]
    fn test_draw_wrong_canvas() {
        let mut canvas = Recorder::default();
        let sphere = Sphere::new(p(&[0.0, 0.0, 0.0]), 1.0).unwrap();
        let plotter = sphere.plotter(PlotOptions::new()).unwrap();
        assert!(matches!(
            plot_2d(&mut canvas, &[plotter]),
            Err(SpatialError::NotPlottable(_))
        ));
        assert!(canvas.calls.is_empty());
    }

    #[test]
    fn test_triangle_parts() {
        let triangle = Triangle::new(p(&[0.0, 0.0]), p(&[1.0, 0.0]), p(&[0.0, 1.0])).unwrap();

        let mut canvas = Recorder::default();
        Plot::plot_2d(&triangle, &mut canvas, &PlotOptions::new()).unwrap();
        assert_eq!(
            canvas.calls,
            vec!["scatter [[0.0, 0.0]]", "scatter [[1.0, 0.0]]", "scatter [[0.0, 1.0]]"]
        );

        let mut canvas = Recorder::default();
        let options = PlotOptions::new().with_triangle_part(TrianglePart::Lines);
        Plot::plot_2d(&triangle, &mut canvas, &options).unwrap();
        assert_eq!(
            canvas.calls,
            vec![
                "polyline [[1.0, 0.0], [0.0, 1.0]]",
                "polyline [[0.0, 1.0], [0.0, 0.0]]",
                "polyline [[0.0, 0.0], [1.0, 0.0]]",
            ]
        );
    }

    #[test]
    fn test_surface_grid_to_points() {
        let grid = SurfaceGrid::new(
            vec![vec![0.0, 1.0], vec![0.0, 1.0]],
            vec![vec![0.0, 0.0], vec![1.0, 1.0]],
            vec![vec![5.0, 5.0], vec![5.0, 5.0]],
        );
        assert_eq!(grid.shape(), (2, 2));
        let points = grid.to_points().unwrap();
        assert_eq!(points.len(), 4);
        assert_eq!(points.row(1).as_slice(), &[1.0, 0.0, 5.0]);
        assert_eq!(points.row(2).as_slice(), &[0.0, 1.0, 5.0]);

        let empty = SurfaceGrid::new(vec![], vec![], vec![]);
        assert_eq!(empty.to_points(), Err(SpatialError::Empty));
    }
}
