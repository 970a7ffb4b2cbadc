//! Elevation statistics over chunks and sampled areas.

use atlas_math::{Bounds2, DVec2};
use serde::{Deserialize, Serialize};

use crate::chunk::Chunk;
use crate::constants::SEA_LEVEL;
use crate::height::height;

/// Summary of a set of elevation samples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HeightStats {
    pub samples: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Fraction of samples at or above sea level.
    pub land_fraction: f64,
    pub river_cells: usize,
}

impl HeightStats {
    /// Accumulate statistics from raw elevations.
    pub fn from_heights(heights: impl IntoIterator<Item = f64>) -> Self {
        let mut samples = 0usize;
        let mut land = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for h in heights {
            samples += 1;
            sum += h;
            min = min.min(h);
            max = max.max(h);
            if h >= SEA_LEVEL {
                land += 1;
            }
        }
        if samples == 0 {
            return Self::default();
        }
        Self {
            samples,
            min,
            max,
            mean: sum / samples as f64,
            land_fraction: land as f64 / samples as f64,
            river_cells: 0,
        }
    }

    /// Statistics of a chunk's stored (river-carved) grid.
    pub fn of_chunk(chunk: &Chunk) -> Self {
        Self {
            river_cells: chunk.rivers.len(),
            ..Self::from_heights(chunk.heights.iter().copied())
        }
    }

    /// Statistics of the pure height field sampled every `step` units over `bounds`.
    pub fn scan_area(seed: f64, bounds: Bounds2, step: f64) -> Self {
        if step <= 0.0 {
            return Self::default();
        }
        let cols = (bounds.width() / step).floor() as usize + 1;
        let rows = (bounds.height() / step).floor() as usize + 1;
        Self::from_heights((0..rows).flat_map(move |r| {
            (0..cols).map(move |c| {
                height(
                    bounds.min.x + c as f64 * step,
                    bounds.min.y + r as f64 * step,
                    seed,
                )
            })
        }))
    }

    /// Combine two summaries as if their samples had been scanned together.
    pub fn merge(&self, other: &HeightStats) -> HeightStats {
        if self.samples == 0 {
            return *other;
        }
        if other.samples == 0 {
            return *self;
        }
        let samples = self.samples + other.samples;
        let weight = |s: &HeightStats| s.samples as f64 / samples as f64;
        HeightStats {
            samples,
            min: self.min.min(other.min),
            max: self.max.max(other.max),
            mean: self.mean * weight(self) + other.mean * weight(other),
            land_fraction: self.land_fraction * weight(self)
                + other.land_fraction * weight(other),
            river_cells: self.river_cells + other.river_cells,
        }
    }
}

/// Nearest point at or above sea level, scanning square rings of spacing
/// `step` outward from `origin` up to `max_radius`.
pub fn find_nearest_land(seed: f64, origin: DVec2, step: f64, max_radius: f64) -> Option<DVec2> {
    if step <= 0.0 {
        return None;
    }
    if height(origin.x, origin.y, seed) >= SEA_LEVEL {
        return Some(origin);
    }
    let rings = (max_radius / step).floor() as i64;
    for ring in 1..=rings {
        let mut best: Option<(f64, DVec2)> = None;
        for dy in -ring..=ring {
            for dx in -ring..=ring {
                if dx.abs() != ring && dy.abs() != ring {
                    continue;
                }
                let p = origin + DVec2::new(dx as f64, dy as f64) * step;
                if height(p.x, p.y, seed) < SEA_LEVEL {
                    continue;
                }
                let d = p.distance_squared(origin);
                if best.is_none_or(|(bd, _)| d < bd) {
                    best = Some((d, p));
                }
            }
        }
        if let Some((_, p)) = best {
            return Some(p);
        }
    }
    None
}
