//! Rotating wireframe sphere drawn behind the hero.
//!
//! Points are spread over a sphere with a golden-angle spiral, tumbled around
//! two axes every frame, perspective-projected onto the surface and joined by
//! faint edges when they are close in object space. Drawing goes through any
//! plotters [`DrawingBackend`], so the same code paints the page canvas and
//! the in-memory backends used by the tests.

use std::f64::consts::PI;

use plotters::backend::DrawingBackend;
use plotters::style::{Color, RGBAColor, RGBColor};
use plotters_backend::{BackendCoord, DrawingErrorKind};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn norm_sq(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn distance_sq(&self, other: &Point3) -> f64 {
        let (dx, dy, dz) = (self.x - other.x, self.y - other.y, self.z - other.z);
        dx * dx + dy * dy + dz * dz
    }
}

/// A point after projection onto the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    /// Perspective factor, `focal / (focal + z)`.
    pub scale: f64,
}

/// Look of the mesh. The defaults are the ones the hero uses.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshStyle {
    pub point_count: usize,
    /// Sphere radius as a fraction of the smaller surface side.
    pub radius_factor: f64,
    /// Radians added to the rotation accumulator per frame.
    pub rotation_step: f64,
    pub focal_length: f64,
    /// Squared object-space distance under which two points are joined.
    pub edge_threshold_sq: f64,
    /// Dot radius at scale 1.
    pub point_radius: f64,
    pub background: (u8, u8, u8),
    pub edge_rgba: (u8, u8, u8, f64),
    pub point_rgb: (u8, u8, u8),
    pub min_point_alpha: f64,
}

impl Default for MeshStyle {
    fn default() -> Self {
        Self {
            point_count: 200,
            radius_factor: 0.4,
            rotation_step: 0.002,
            focal_length: 400.0,
            edge_threshold_sq: 4000.0,
            point_radius: 2.0,
            background: (2, 6, 23),
            edge_rgba: (6, 182, 212, 0.15),
            point_rgb: (124, 58, 237),
            min_point_alpha: 0.1,
        }
    }
}

/// Spreads `count` points over a sphere of `radius` along a golden-angle spiral.
pub fn golden_sphere(count: usize, radius: f64) -> Vec<Point3> {
    let golden_angle = PI * (3.0 - 5.0_f64.sqrt());
    (0..count)
        .map(|i| {
            // a lone point sits on the pole instead of dividing by zero
            let y = if count > 1 {
                1.0 - (i as f64 / (count - 1) as f64) * 2.0
            } else {
                1.0
            };
            let r = (1.0 - y * y).max(0.0).sqrt();
            let theta = golden_angle * i as f64;
            Point3::new(theta.cos() * r * radius, y * radius, theta.sin() * r * radius)
        })
        .collect()
}

/// Rotates around the vertical axis by `angle`, then around the horizontal
/// axis by half of it.
pub fn tumble(p: &Point3, angle: f64) -> Point3 {
    let (sin_a, cos_a) = angle.sin_cos();
    let (sin_h, cos_h) = (angle * 0.5).sin_cos();

    let x1 = p.x * cos_a - p.z * sin_a;
    let z1 = p.z * cos_a + p.x * sin_a;
    let y2 = p.y * cos_h - z1 * sin_h;
    let z2 = z1 * cos_h + p.y * sin_h;

    Point3::new(x1, y2, z2)
}

/// Index pairs `(i, j)`, `i < j`, whose squared distance is under `threshold_sq`.
///
/// This is the plain O(n²) pass; it is only meant for a couple of hundred
/// points.
pub fn edges(points: &[Point3], threshold_sq: f64) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for (i, p1) in points.iter().enumerate() {
        for (j, p2) in points.iter().enumerate().skip(i + 1) {
            if p1.distance_sq(p2) < threshold_sq {
                out.push((i, j));
            }
        }
    }
    out
}

/// What one frame put on the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub edges: usize,
    pub points: usize,
}

/// Sphere state: generated points, rotation accumulator and surface size.
#[derive(Clone, Debug)]
pub struct PointCloud {
    points: Vec<Point3>,
    rotation: f64,
    width: f64,
    height: f64,
    style: MeshStyle,
}

impl PointCloud {
    /// Builds the sphere for a surface of `width` x `height`.
    ///
    /// The radius is taken from the surface size here only; later resizes
    /// keep it.
    pub fn new(width: f64, height: f64, style: MeshStyle) -> Self {
        let radius = width.min(height) * style.radius_factor;
        Self {
            points: golden_sphere(style.point_count, radius),
            rotation: 0.0,
            width,
            height,
            style,
        }
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn dimensions(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn advance(&mut self) {
        self.rotation += self.style.rotation_step;
    }

    pub fn rotated(&self) -> Vec<Point3> {
        self.points.iter().map(|p| tumble(p, self.rotation)).collect()
    }

    /// Perspective projection centred on the surface.
    ///
    /// Returns `None` for points at or behind the eye plane, which only
    /// happens when the sphere is larger than the focal length.
    pub fn project(&self, p: &Point3) -> Option<Projected> {
        let depth = self.style.focal_length + p.z;
        if depth <= f64::EPSILON {
            return None;
        }
        let scale = self.style.focal_length / depth;
        Some(Projected {
            x: self.width / 2.0 + p.x * scale,
            y: self.height / 2.0 + p.y * scale,
            scale,
        })
    }

    /// Depth cue: opacity rises linearly with `z`, floored at the minimum.
    pub fn point_alpha(&self, z: f64) -> f64 {
        ((z + self.style.focal_length / 2.0) / self.style.focal_length)
            .max(self.style.min_point_alpha)
    }

    /// Advances the rotation and paints one frame.
    pub fn render<DB: DrawingBackend>(
        &mut self,
        backend: &mut DB,
    ) -> Result<FrameStats, DrawingErrorKind<DB::ErrorType>> {
        self.advance();
        self.draw(backend)
    }

    /// Paints the sphere at the current rotation.
    pub fn draw<DB: DrawingBackend>(
        &self,
        backend: &mut DB,
    ) -> Result<FrameStats, DrawingErrorKind<DB::ErrorType>> {
        backend.ensure_prepared()?;

        let (w, h) = (self.width.ceil() as i32, self.height.ceil() as i32);
        let (br, bg, bb) = self.style.background;
        backend.draw_rect((0, 0), (w, h), &RGBColor(br, bg, bb).filled(), true)?;

        let rotated = self.rotated();
        let projected: Vec<Option<Projected>> = rotated.iter().map(|p| self.project(p)).collect();
        let mut stats = FrameStats::default();

        let (er, eg, eb, ea) = self.style.edge_rgba;
        let edge_style = RGBAColor(er, eg, eb, ea).stroke_width(1);
        for (i, j) in edges(&rotated, self.style.edge_threshold_sq) {
            if let (Some(a), Some(b)) = (projected[i], projected[j]) {
                backend.draw_line(coord(&a), coord(&b), &edge_style)?;
                stats.edges += 1;
            }
        }

        let (r, g, b) = self.style.point_rgb;
        for (p, proj) in rotated.iter().zip(&projected) {
            let Some(proj) = proj else { continue };
            let radius = (self.style.point_radius * proj.scale).round().max(1.0) as u32;
            let color = RGBAColor(r, g, b, self.point_alpha(p.z));
            backend.draw_circle(coord(proj), radius, &color.filled(), true)?;
            stats.points += 1;
        }

        backend.present()?;
        Ok(stats)
    }
}

fn coord(p: &Projected) -> BackendCoord {
    (p.x.round() as i32, p.y.round() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotters_backend::{BackendColor, BackendStyle};
    use std::convert::Infallible;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Rect { fill: (u8, u8, u8), to: BackendCoord },
        Line { alpha: f64 },
        Circle { radius: u32, alpha: f64 },
    }

    struct Recorder {
        size: (u32, u32),
        ops: Vec<Op>,
        presented: usize,
    }

    impl Recorder {
        fn new(width: u32, height: u32) -> Self {
            Self { size: (width, height), ops: Vec::new(), presented: 0 }
        }
    }

    impl DrawingBackend for Recorder {
        type ErrorType = Infallible;

        fn get_size(&self) -> (u32, u32) {
            self.size
        }

        fn ensure_prepared(&mut self) -> Result<(), DrawingErrorKind<Infallible>> {
            Ok(())
        }

        fn present(&mut self) -> Result<(), DrawingErrorKind<Infallible>> {
            self.presented += 1;
            Ok(())
        }

        fn draw_pixel(
            &mut self,
            _point: BackendCoord,
            _color: BackendColor,
        ) -> Result<(), DrawingErrorKind<Infallible>> {
            Ok(())
        }

        fn draw_line<S: BackendStyle>(
            &mut self,
            _from: BackendCoord,
            _to: BackendCoord,
            style: &S,
        ) -> Result<(), DrawingErrorKind<Infallible>> {
            self.ops.push(Op::Line { alpha: style.color().alpha });
            Ok(())
        }

        fn draw_rect<S: BackendStyle>(
            &mut self,
            _upper_left: BackendCoord,
            bottom_right: BackendCoord,
            style: &S,
            _fill: bool,
        ) -> Result<(), DrawingErrorKind<Infallible>> {
            self.ops.push(Op::Rect { fill: style.color().rgb, to: bottom_right });
            Ok(())
        }

        fn draw_circle<S: BackendStyle>(
            &mut self,
            _center: BackendCoord,
            radius: u32,
            style: &S,
            _fill: bool,
        ) -> Result<(), DrawingErrorKind<Infallible>> {
            self.ops.push(Op::Circle { radius, alpha: style.color().alpha });
            Ok(())
        }
    }

    #[test]
    fn golden_sphere_points_lie_on_the_sphere() {
        let radius = 300.0;
        let points = golden_sphere(200, radius);
        assert_eq!(points.len(), 200);
        for p in &points {
            assert!((p.norm_sq() - radius * radius).abs() < 1e-6, "{p:?}");
        }
        assert_eq!(points[0].y, radius);
        assert!((points[199].y + radius).abs() < 1e-9);
    }

    #[test]
    fn golden_sphere_handles_degenerate_counts() {
        assert!(golden_sphere(0, 10.0).is_empty());
        assert_eq!(golden_sphere(1, 10.0), vec![Point3::new(0.0, 10.0, 0.0)]);
    }

    #[test]
    fn tumbling_preserves_distance_from_origin() {
        let points = golden_sphere(50, 120.0);
        for angle in [0.0, 0.002, 1.3, 42.0] {
            for p in &points {
                let q = tumble(p, angle);
                assert!((q.norm_sq() - p.norm_sq()).abs() < 1e-6);
            }
        }
        assert_eq!(tumble(&points[7], 0.0), points[7]);
    }

    #[test]
    fn edges_are_symmetric_and_deterministic() {
        let cloud = {
            // 120px radius packs the 200 points tightly enough to join many
            let mut c = PointCloud::new(300.0, 300.0, MeshStyle::default());
            for _ in 0..25 {
                c.advance();
            }
            c
        };
        let rotated = cloud.rotated();
        let first = edges(&rotated, 4000.0);
        let second = edges(&cloud.rotated(), 4000.0);
        assert_eq!(first, second);
        assert!(!first.is_empty());

        for &(i, j) in &first {
            assert!(i < j);
            let forward = rotated[i].distance_sq(&rotated[j]);
            let backward = rotated[j].distance_sq(&rotated[i]);
            assert_eq!(forward, backward);
            assert!(backward < 4000.0);
        }

        // every close pair is present exactly once
        let mut expected = 0;
        for i in 0..rotated.len() {
            for j in 0..rotated.len() {
                if i != j && rotated[i].distance_sq(&rotated[j]) < 4000.0 {
                    expected += 1;
                }
            }
        }
        assert_eq!(expected, first.len() * 2);
    }

    #[test]
    fn radius_is_fixed_at_construction() {
        let mut cloud = PointCloud::new(1000.0, 500.0, MeshStyle::default());
        let before = cloud.points().to_vec();
        assert!((before[0].y - 200.0).abs() < 1e-9);

        cloud.resize(300.0, 300.0);
        assert_eq!(cloud.points(), &before[..]);
        assert_eq!(cloud.dimensions(), (300.0, 300.0));
    }

    #[test]
    fn projection_centres_on_the_surface() {
        let cloud = PointCloud::new(800.0, 600.0, MeshStyle::default());
        let centre = cloud.project(&Point3::new(0.0, 0.0, 0.0)).unwrap();
        assert_eq!((centre.x, centre.y, centre.scale), (400.0, 300.0, 1.0));

        let far = cloud.project(&Point3::new(100.0, 0.0, 400.0)).unwrap();
        assert_eq!(far.scale, 0.5);
        assert_eq!(far.x, 450.0);

        let near = cloud.project(&Point3::new(0.0, -100.0, -200.0)).unwrap();
        assert_eq!(near.scale, 2.0);
        assert_eq!(near.y, 100.0);

        assert!(cloud.project(&Point3::new(0.0, 0.0, -400.0)).is_none());
    }

    #[test]
    fn depth_alpha_has_only_a_floor() {
        let cloud = PointCloud::new(800.0, 600.0, MeshStyle::default());
        assert_eq!(cloud.point_alpha(0.0), 0.5);
        assert_eq!(cloud.point_alpha(-200.0), 0.1);
        assert_eq!(cloud.point_alpha(-1000.0), 0.1);
        assert_eq!(cloud.point_alpha(200.0), 1.0);
        // past the front of the sphere the ramp keeps rising
        assert_eq!(cloud.point_alpha(600.0), 2.0);
    }

    #[test]
    fn rotation_accumulates_per_frame() {
        let mut cloud = PointCloud::new(800.0, 600.0, MeshStyle::default());
        let mut backend = Recorder::new(800, 600);
        for _ in 0..10 {
            cloud.render(&mut backend).unwrap();
        }
        assert!((cloud.rotation() - 0.02).abs() < 1e-12);
        assert_eq!(backend.presented, 10);
    }

    #[test]
    fn frame_clears_then_draws_edges_then_points() {
        let mut cloud = PointCloud::new(400.0, 400.0, MeshStyle::default());
        let mut backend = Recorder::new(400, 400);
        let stats = cloud.render(&mut backend).unwrap();

        assert_eq!(backend.ops[0], Op::Rect { fill: (2, 6, 23), to: (400, 400) });
        assert!(stats.edges > 0);
        assert_eq!(stats.points, 200);
        assert_eq!(stats.edges, edges(&cloud.rotated(), 4000.0).len());
        assert_eq!(backend.ops.len(), 1 + stats.edges + stats.points);

        let lines = &backend.ops[1..1 + stats.edges];
        assert!(lines.iter().all(|op| *op == Op::Line { alpha: 0.15 }));

        let circles = &backend.ops[1 + stats.edges..];
        for op in circles {
            match op {
                Op::Circle { radius, alpha } => {
                    assert!(*radius >= 1 && *radius <= 4);
                    assert!(*alpha >= 0.1 && *alpha <= 1.0);
                }
                other => panic!("unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn points_behind_the_eye_are_skipped() {
        // a 2400px surface gives a 960px radius, well past the focal length
        let mut cloud = PointCloud::new(2400.0, 2400.0, MeshStyle::default());
        let mut backend = Recorder::new(2400, 2400);
        let stats = cloud.render(&mut backend).unwrap();
        assert!(stats.points < 200);
        assert!(backend
            .ops
            .iter()
            .all(|op| !matches!(op, Op::Circle { alpha, .. } if alpha.is_nan())));
    }
}
