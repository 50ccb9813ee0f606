//! Fixed orthographic projection of the unit sphere with hemisphere clipping.
//!
//! The camera never moves: it looks straight at geographic (0°, 0°), so
//! screen-right is +longitude and screen-up is +latitude. Points on the far
//! hemisphere project to `None` and are simply not drawn.

use glam::{DVec2, DVec3};

// Trig noise at the clip boundary: a point exactly 90° from the view
// direction computes a z of ±1e-16, not zero. The inclusive boundary keeps
// anything within this band visible.
const CLIP_EPS: f64 = 1e-12;

/// Geographic coordinate pair in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

impl LonLat {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Unit direction in view space: the camera looks down +z, so
    /// `z >= 0` means the point faces the viewer.
    pub fn view_direction(&self) -> DVec3 {
        let (lon, lat) = (self.lon.to_radians(), self.lat.to_radians());
        DVec3::new(lat.cos() * lon.sin(), lat.sin(), lat.cos() * lon.cos())
    }
}

/// Bridge from physics spherical angles (radians) to geographic coordinates
/// (degrees): longitude is the azimuth φ, latitude is 90° − θ.
///
/// This is the one convention crossing in the engine; swapping or negating
/// either component silently flips the visible hemisphere, so it lives here
/// as a named step rather than inline in the projector.
pub fn geographic_of(theta: f64, phi: f64) -> LonLat {
    LonLat::new(phi.to_degrees(), 90.0 - theta.to_degrees())
}

/// Orthographic view of the unit sphere onto a square drawing surface.
///
/// The sphere fills the surface up to a uniform margin:
/// `radius = size/2 − margin`, centered at `(size/2, size/2)`.
#[derive(Clone, Copy, Debug)]
pub struct OrthographicView {
    size: f64,
    margin: f64,
}

impl OrthographicView {
    pub fn new(size: f64, margin: f64) -> Self {
        Self { size, margin }
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Projection scale in surface pixels.
    pub fn radius(&self) -> f64 {
        self.size / 2.0 - self.margin
    }

    /// Center of the drawing surface; the sphere center projects here.
    pub fn center(&self) -> DVec2 {
        DVec2::splat(self.size / 2.0)
    }

    /// Project a point on the sphere, or `None` if it lies on the far
    /// hemisphere. The clip boundary is inclusive: a point exactly 90° from
    /// the view direction is still visible.
    pub fn project(&self, point: LonLat) -> Option<DVec2> {
        self.project_direction(point.view_direction())
    }

    fn project_direction(&self, dir: DVec3) -> Option<DVec2> {
        if dir.z < -CLIP_EPS {
            return None;
        }
        // Screen y grows downward, view y grows upward.
        Some(self.center() + self.radius() * DVec2::new(dir.x, -dir.y))
    }

    /// The horizon circle bounding the visible disk: `(center, radius)`.
    pub fn sphere_outline(&self) -> (DVec2, f64) {
        (self.center(), self.radius())
    }

    /// Latitude/longitude grid lines covering the full sphere at a fixed
    /// angular step, as unprojected polylines. Meridians run pole to pole at
    /// each longitude step (−180° inclusive, +180° exclusive: those are the
    /// same line); parallels skip the degenerate poles.
    pub fn graticule(&self, step_deg: f64, sample_deg: f64) -> Vec<Vec<LonLat>> {
        let mut lines = Vec::new();

        let mut lon = -180.0;
        while lon < 180.0 {
            lines.push(sample_meridian(lon, sample_deg));
            lon += step_deg;
        }

        let mut lat = -90.0 + step_deg;
        while lat < 90.0 {
            lines.push(sample_parallel(lat, sample_deg));
            lat += step_deg;
        }

        lines
    }

    /// Project a sampled line, truncating it at the horizon. Returns the
    /// visible screen-space segments; a line may cross the horizon more than
    /// once and come back as several segments, or as none at all.
    pub fn clip_polyline(&self, line: &[LonLat]) -> Vec<Vec<DVec2>> {
        let dirs: Vec<DVec3> = line.iter().map(LonLat::view_direction).collect();
        let mut segments: Vec<Vec<DVec2>> = Vec::new();
        let mut current: Vec<DVec2> = Vec::new();

        for pair in dirs.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            match (a.z >= -CLIP_EPS, b.z >= -CLIP_EPS) {
                (true, true) => {
                    if current.is_empty() {
                        current.extend(self.project_direction(a));
                    }
                    current.extend(self.project_direction(b));
                }
                (true, false) => {
                    if current.is_empty() {
                        current.extend(self.project_direction(a));
                    }
                    current.extend(self.project_direction(horizon_crossing(a, b)));
                    segments.push(std::mem::take(&mut current));
                }
                (false, true) => {
                    current.extend(self.project_direction(horizon_crossing(a, b)));
                    current.extend(self.project_direction(b));
                }
                (false, false) => {}
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }

        segments
    }
}

/// Point where the segment from `a` to `b` (both unit view-space directions,
/// with z changing sign between them) meets the horizon plane z = 0.
fn horizon_crossing(a: DVec3, b: DVec3) -> DVec3 {
    let t = a.z / (a.z - b.z);
    a.lerp(b, t).normalize()
}

fn sample_meridian(lon: f64, sample_deg: f64) -> Vec<LonLat> {
    let mut points = Vec::new();
    let mut lat = -90.0;
    while lat <= 90.0 {
        points.push(LonLat::new(lon, lat));
        lat += sample_deg;
    }
    points
}

fn sample_parallel(lat: f64, sample_deg: f64) -> Vec<LonLat> {
    let mut points = Vec::new();
    let mut lon = -180.0;
    while lon <= 180.0 {
        points.push(LonLat::new(lon, lat));
        lon += sample_deg;
    }
    points
}
