//! Radial polygon synthesis with clipping against prior shapes.

use std::f64::consts::{PI, TAU};

use atlas_math::det::{det_cos, det_ln, det_sin, det_sqrt};
use atlas_math::{Bounds2, DVec2, ParkMiller, segment_intersection};

use crate::area::AreaConfig;
use crate::shape::Shape;

/// Center pushes tried before a residual overlap is accepted.
pub const MAX_REPULSION_ATTEMPTS: u32 = 20;

/// Lower bound on the number of outline vertices.
pub const MIN_VERTICES: i64 = 40;

const REPULSION_MIN: f64 = 500.0;
const REPULSION_MAX: f64 = 1000.0;
const RADIUS_JITTER_MIN: f64 = 0.8;
const RADIUS_JITTER_MAX: f64 = 1.2;
/// Inward buffer subtracted from the ray parameter of the nearest obstruction.
const CLIP_BUFFER: f64 = 0.02;
/// Clipped vertices never collapse closer to the center than this fraction.
const MIN_RAY_FRACTION: f64 = 0.05;

/// What happened while a shape was synthesized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SynthesisReport {
    /// Center pushes performed.
    pub repulsions: u32,
    /// Avoid shapes still containing the final center.
    pub center_overlaps: usize,
    /// Vertices pulled in by an obstruction.
    pub clipped_vertices: usize,
}

impl SynthesisReport {
    pub fn has_residual_overlap(&self) -> bool {
        self.center_overlaps > 0
    }
}

/// A generated shape with its diagnostics.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeSynthesis {
    pub shape: Shape,
    pub report: SynthesisReport,
}

/// Grow an irregular closed polygon around `center`.
///
/// The center is first pushed out of any avoid shape (at most
/// [`MAX_REPULSION_ATTEMPTS`] times). A target area is drawn from `config`,
/// and each of the equally spaced vertices is cast as a ray from the center
/// that stops just short of the nearest avoid-shape edge it crosses.
///
/// Deterministic for a given `(center, seed, config, avoid)`.
pub fn generate_irregular_polygon(
    center: DVec2,
    seed: f64,
    config: &AreaConfig,
    avoid: &[&Shape],
) -> ShapeSynthesis {
    let mut rng = ParkMiller::new(seed);
    let mut report = SynthesisReport::default();

    let center = repel_center(center, avoid, &mut rng, &mut report);
    if report.has_residual_overlap() {
        tracing::warn!(
            x = center.x,
            y = center.y,
            overlaps = report.center_overlaps,
            attempts = report.repulsions,
            "shape center still inside an existing shape"
        );
    }

    let area = config.clamp_area(normal_variate(&mut rng) * config.std_dev + config.mean_area);
    let base_radius = det_sqrt(area / PI);

    let count = (config.min_vertices + rng.int_range(0, config.vertex_variance) + 20)
        .max(MIN_VERTICES) as usize;

    let obstacles: Vec<(&Shape, Option<Bounds2>)> =
        avoid.iter().map(|s| (*s, s.bounds())).collect();

    let mut vertices = Vec::with_capacity(count);
    for k in 0..count {
        let angle = k as f64 * TAU / count as f64;
        let radius = base_radius * rng.range(RADIUS_JITTER_MIN, RADIUS_JITTER_MAX);
        let ideal = center + DVec2::new(det_cos(angle), det_sin(angle)) * radius;

        match nearest_obstruction(center, ideal, &obstacles) {
            Some(t) => {
                report.clipped_vertices += 1;
                let t = (t - CLIP_BUFFER).max(MIN_RAY_FRACTION);
                vertices.push(center + (ideal - center) * t);
            }
            None => vertices.push(ideal),
        }
    }

    ShapeSynthesis {
        shape: Shape::new(vertices, center),
        report,
    }
}

fn repel_center(
    mut center: DVec2,
    avoid: &[&Shape],
    rng: &mut ParkMiller,
    report: &mut SynthesisReport,
) -> DVec2 {
    while report.repulsions < MAX_REPULSION_ATTEMPTS && avoid.iter().any(|s| s.contains(center)) {
        let angle = rng.angle();
        let distance = rng.range(REPULSION_MIN, REPULSION_MAX);
        center += DVec2::new(det_cos(angle), det_sin(angle)) * distance;
        report.repulsions += 1;
    }
    report.center_overlaps = avoid.iter().filter(|s| s.contains(center)).count();
    center
}

/// Standard normal variate by the Box–Muller transform.
fn normal_variate(rng: &mut ParkMiller) -> f64 {
    // ln(0) is undefined; the generator can return exactly 0.
    let u1 = rng.next_f64().max(f64::MIN_POSITIVE);
    let u2 = rng.next_f64();
    det_sqrt(-2.0 * det_ln(u1)) * det_cos(TAU * u2)
}

/// Smallest ray parameter at which `from -> to` crosses any obstacle edge.
fn nearest_obstruction(
    from: DVec2,
    to: DVec2,
    obstacles: &[(&Shape, Option<Bounds2>)],
) -> Option<f64> {
    let ray_bounds = Bounds2::new(from, to);
    let mut min_t: Option<f64> = None;
    for (shape, bounds) in obstacles {
        match bounds {
            Some(b) if b.intersects(&ray_bounds) => {}
            _ => continue,
        }
        for (a, b) in shape.edges() {
            if let Some(hit) = segment_intersection(from, to, a, b)
                && min_t.is_none_or(|t| hit.t < t)
            {
                min_t = Some(hit.t);
            }
        }
    }
    min_t
}
