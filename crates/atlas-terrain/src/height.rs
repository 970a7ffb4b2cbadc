//! Coherent multi-octave value-noise height field.
//!
//! Each octave hashes integer lattice points (plus the world seed) into
//! `[0, 1)`, smooths every lattice value with its eight neighbors, and
//! interpolates fractional coordinates with a cosine ease. Five octaves are
//! summed: a continental bias, rolling hills, mid-scale relief, surface
//! roughness, and sparse peaks whose height depends on the continental bias.
//!
//! This is the single source of elevation for the whole engine. Chunk
//! sampling, classification outside generated territory, and placement all
//! call [`height`]; a second formula anywhere else would let callers disagree.

use std::f64::consts::PI;

use atlas_math::det::{det_cos, det_sin};

use crate::constants::HEIGHT_FLOOR;

/// One noise layer: lattice spacing in world units, output amplitude, and a
/// seed offset that decorrelates it from the other layers.
#[derive(Clone, Copy, Debug)]
struct Octave {
    spacing: f64,
    amplitude: f64,
    seed_offset: f64,
}

const SUPER_MACRO: Octave = Octave {
    spacing: 6667.0,
    amplitude: 400.0,
    seed_offset: 0.0,
};
const MACRO: Octave = Octave {
    spacing: 667.0,
    amplitude: 150.0,
    seed_offset: 1013.0,
};
const MID: Octave = Octave {
    spacing: 100.0,
    amplitude: 40.0,
    seed_offset: 2026.0,
};
const MICRO: Octave = Octave {
    spacing: 20.0,
    amplitude: 10.0,
    seed_offset: 3039.0,
};
// Amplitude of the peak layer is chosen per point by `peak_multiplier`.
const PEAKS: Octave = Octave {
    spacing: 125.0,
    amplitude: 0.0,
    seed_offset: 4052.0,
};

/// Continental bias below which peaks become tall ocean islands.
const ISLAND_BIAS: f64 = 0.4;
/// Continental bias above which peaks become mountain ranges.
const MOUNTAIN_BIAS: f64 = 0.6;

/// Per-octave breakdown of a single height evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeightSample {
    /// Raw super-macro noise in `[0, 1)`; drives the peak multiplier.
    pub bias: f64,
    pub super_macro: f64,
    pub macro_relief: f64,
    pub mid: f64,
    pub micro: f64,
    pub peaks: f64,
    /// Sum of all octaves, floor-clamped at [`HEIGHT_FLOOR`].
    pub total: f64,
}

/// Elevation at world coordinate `(x, y)` for the given seed.
pub fn height(x: f64, y: f64, seed: f64) -> f64 {
    height_breakdown(x, y, seed).total
}

/// Evaluate the height field and return every octave's contribution.
pub fn height_breakdown(x: f64, y: f64, seed: f64) -> HeightSample {
    let bias = layer(SUPER_MACRO, x, y, seed);
    let super_macro = centered(bias) * SUPER_MACRO.amplitude;
    let macro_relief = centered(layer(MACRO, x, y, seed)) * MACRO.amplitude;
    let mid = centered(layer(MID, x, y, seed)) * MID.amplitude;
    let micro = centered(layer(MICRO, x, y, seed)) * MICRO.amplitude;

    // Cubing keeps most of the layer near zero and lets only the extremes
    // stand out as peaks.
    let deviation = centered(layer(PEAKS, x, y, seed));
    let peaks = deviation * deviation * deviation * peak_multiplier(bias);

    let total = (super_macro + macro_relief + mid + micro + peaks).max(HEIGHT_FLOOR);
    HeightSample {
        bias,
        super_macro,
        macro_relief,
        mid,
        micro,
        peaks,
        total,
    }
}

/// Peak amplitude for a given continental bias.
pub fn peak_multiplier(bias: f64) -> f64 {
    if bias < ISLAND_BIAS {
        700.0
    } else if bias > MOUNTAIN_BIAS {
        1200.0
    } else {
        500.0
    }
}

/// Map `[0, 1)` onto `[-1, 1)`.
#[inline]
fn centered(v: f64) -> f64 {
    v * 2.0 - 1.0
}

#[inline]
fn layer(octave: Octave, x: f64, y: f64, seed: f64) -> f64 {
    interpolated_noise(
        x / octave.spacing,
        y / octave.spacing,
        seed + octave.seed_offset,
    )
}

/// Sine hash of a lattice point into `[0, 1)`.
fn lattice_hash(ix: f64, iy: f64, seed: f64) -> f64 {
    let n = det_sin(ix * 12.9898 + iy * 78.233 + seed * 37.719) * 43_758.545_3;
    n - n.floor()
}

/// Lattice value blended with its neighbors: corners 1/16, edges 1/8, center 1/4.
fn smoothed_noise(ix: f64, iy: f64, seed: f64) -> f64 {
    let corners = (lattice_hash(ix - 1.0, iy - 1.0, seed)
        + lattice_hash(ix + 1.0, iy - 1.0, seed)
        + lattice_hash(ix - 1.0, iy + 1.0, seed)
        + lattice_hash(ix + 1.0, iy + 1.0, seed))
        / 16.0;
    let edges = (lattice_hash(ix - 1.0, iy, seed)
        + lattice_hash(ix + 1.0, iy, seed)
        + lattice_hash(ix, iy - 1.0, seed)
        + lattice_hash(ix, iy + 1.0, seed))
        / 8.0;
    let center = lattice_hash(ix, iy, seed) / 4.0;
    corners + edges + center
}

#[inline]
fn cosine_interpolate(a: f64, b: f64, t: f64) -> f64 {
    let f = (1.0 - det_cos(t * PI)) * 0.5;
    a * (1.0 - f) + b * f
}

fn interpolated_noise(x: f64, y: f64, seed: f64) -> f64 {
    let ix = x.floor();
    let iy = y.floor();
    let fx = x - ix;
    let fy = y - iy;

    let v1 = smoothed_noise(ix, iy, seed);
    let v2 = smoothed_noise(ix + 1.0, iy, seed);
    let v3 = smoothed_noise(ix, iy + 1.0, seed);
    let v4 = smoothed_noise(ix + 1.0, iy + 1.0, seed);

    let top = cosine_interpolate(v1, v2, fx);
    let bottom = cosine_interpolate(v3, v4, fx);
    cosine_interpolate(top, bottom, fy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism_same_seed_same_coord() {
        for &(x, y) in &[(0.0, 0.0), (123.4, -567.8), (1e5, 2e5)] {
            let a = height(x, y, 42.0);
            let b = height(x, y, 42.0);
            assert_eq!(
                a.to_bits(),
                b.to_bits(),
                "height must be bit-identical at ({x}, {y})"
            );
        }
    }

    #[test]
    fn test_different_seeds_produce_different_heights() {
        let differing = (0..20)
            .filter(|i| {
                let x = *i as f64 * 311.0;
                height(x, 0.0, 1.0) != height(x, 0.0, 999.0)
            })
            .count();
        assert!(differing > 15, "seeds should decorrelate terrain");
    }

    #[test]
    fn test_floor_invariant() {
        for seed in [0.0, 1.0, 42.0, 7777.0, -3.5] {
            for i in 0..60 {
                for j in 0..60 {
                    let x = i as f64 * 997.0 - 30_000.0;
                    let y = j as f64 * 1009.0 - 30_000.0;
                    let h = height(x, y, seed);
                    assert!(h >= HEIGHT_FLOOR, "height {h} below floor at ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn test_smooth_within_lattice_cell() {
        // Micro octave has the finest spacing (20 units); a 0.01 step moves a
        // tiny fraction of a cell, so the total must change only slightly.
        let step = 0.01;
        for i in 0..5_000 {
            let x = 17.0 + i as f64 * step;
            let a = height(x, 33.0, 42.0);
            let b = height(x + step, 33.0, 42.0);
            assert!((a - b).abs() < 2.0, "discontinuity at x={x}: {a} -> {b}");
        }
    }

    #[test]
    fn test_continuous_across_lattice_lines() {
        // x = 100 is a lattice line for the mid octave.
        let eps = 1e-6;
        let left = height(100.0 - eps, 250.0, 5.0);
        let right = height(100.0 + eps, 250.0, 5.0);
        assert!((left - right).abs() < 1e-2, "jump at lattice line: {left} vs {right}");
    }

    #[test]
    fn test_lattice_hash_in_unit_interval() {
        for i in -50..50 {
            for j in -50..50 {
                let v = lattice_hash(i as f64, j as f64, 42.0);
                assert!((0.0..1.0).contains(&v), "hash {v} out of range");
            }
        }
    }

    #[test]
    fn test_smoothing_weights_sum_to_one() {
        // The blend is a convex combination, so it stays in [0, 1).
        for i in -20..20 {
            let v = smoothed_noise(i as f64, (i * 3) as f64, 11.0);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_interpolation_hits_lattice_values() {
        let seed = 9.0;
        let at_lattice = interpolated_noise(4.0, -2.0, seed);
        let direct = smoothed_noise(4.0, -2.0, seed);
        assert!((at_lattice - direct).abs() < 1e-12);
    }

    #[test]
    fn test_breakdown_matches_total() {
        let s = height_breakdown(1234.0, -987.0, 42.0);
        let sum = s.super_macro + s.macro_relief + s.mid + s.micro + s.peaks;
        assert_eq!(s.total, sum.max(HEIGHT_FLOOR));
        assert_eq!(s.total, height(1234.0, -987.0, 42.0));
        assert!(s.super_macro.abs() <= 400.0);
        assert!(s.macro_relief.abs() <= 150.0);
        assert!(s.mid.abs() <= 40.0);
        assert!(s.micro.abs() <= 10.0);
        assert!(s.peaks.abs() <= peak_multiplier(s.bias));
    }

    #[test]
    fn test_peak_multiplier_bands() {
        assert_eq!(peak_multiplier(0.1), 700.0);
        assert_eq!(peak_multiplier(0.39), 700.0);
        assert_eq!(peak_multiplier(0.4), 500.0);
        assert_eq!(peak_multiplier(0.5), 500.0);
        assert_eq!(peak_multiplier(0.6), 500.0);
        assert_eq!(peak_multiplier(0.61), 1200.0);
    }
}
