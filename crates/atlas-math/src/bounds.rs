//! Axis-aligned 2D bounds and sampled polygon overlap.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::polygon::point_in_polygon;

/// Axis-aligned bounding rectangle in world units.
///
/// Invariant: `min.x <= max.x` and `min.y <= max.y`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds2 {
    pub min: DVec2,
    pub max: DVec2,
}

impl Bounds2 {
    /// Create bounds from two corners, sorting components.
    pub fn new(a: DVec2, b: DVec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Square bounds of half-width `radius` around `center`.
    pub fn around(center: DVec2, radius: f64) -> Self {
        let r = DVec2::splat(radius.abs());
        Self {
            min: center - r,
            max: center + r,
        }
    }

    /// Smallest bounds enclosing all points, or `None` for an empty slice.
    pub fn from_points(points: &[DVec2]) -> Option<Self> {
        let first = *points.first()?;
        let (min, max) = points
            .iter()
            .fold((first, first), |(lo, hi), p| (lo.min(*p), hi.max(*p)));
        Some(Self { min, max })
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    /// Returns true if the point lies inside or on the boundary.
    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Returns true if the two rectangles overlap (touching counts).
    pub fn intersects(&self, other: &Bounds2) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Overlapping rectangle, if any.
    pub fn intersection(&self, other: &Bounds2) -> Option<Bounds2> {
        if !self.intersects(other) {
            return None;
        }
        Some(Bounds2 {
            min: self.min.max(other.min),
            max: self.max.min(other.max),
        })
    }

    /// Smallest bounds enclosing both.
    pub fn union(&self, other: &Bounds2) -> Bounds2 {
        Bounds2 {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

/// Approximate area shared by two polygons by sampling a grid of cell
/// centers with spacing `step` over the intersection of their bounds.
///
/// Returns 0 when either polygon is degenerate or `step` is not positive.
pub fn overlap_area(a: &[DVec2], b: &[DVec2], step: f64) -> f64 {
    if step <= 0.0 || a.len() < 3 || b.len() < 3 {
        return 0.0;
    }
    let (Some(ba), Some(bb)) = (Bounds2::from_points(a), Bounds2::from_points(b)) else {
        return 0.0;
    };
    let Some(shared) = ba.intersection(&bb) else {
        return 0.0;
    };

    let cols = (shared.width() / step).ceil() as usize;
    let rows = (shared.height() / step).ceil() as usize;
    let mut hits = 0usize;
    for r in 0..rows {
        let y = shared.min.y + (r as f64 + 0.5) * step;
        for c in 0..cols {
            let p = DVec2::new(shared.min.x + (c as f64 + 0.5) * step, y);
            if point_in_polygon(p, a) && point_in_polygon(p, b) {
                hits += 1;
            }
        }
    }
    hits as f64 * step * step
}
