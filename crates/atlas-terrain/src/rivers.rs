//! River carving by steepest descent over a chunk's height grid.

use atlas_math::ParkMiller;
use rustc_hash::FxHashSet;

use crate::constants::{
    RIVER_CARVE_DEPTH, RIVER_MAX_SOURCES, RIVER_MIN_SOURCES, RIVER_SOURCE_MIN_HEIGHT,
    RIVER_SOURCE_SAMPLES, RIVER_STEP_FACTOR, SEA_LEVEL,
};

/// Why a river walk stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiverEnd {
    /// No unvisited neighbor is lower than the current cell.
    LocalMinimum,
    /// The walk reached a cell at or below sea level.
    SeaLevel,
    /// The walk used its full step budget.
    StepBudget,
}

/// Trace of one river walk.
#[derive(Clone, Debug, PartialEq)]
pub struct RiverWalk {
    /// Flat index of the source cell.
    pub source: usize,
    /// Every cell visited, in order, starting at `source`.
    pub path: Vec<usize>,
    pub end: RiverEnd,
}

/// Carve rivers into a row-major `(resolution + 1)²` height grid.
///
/// Draws `2..=4` source attempts from `rng`. Each attempt samples
/// [`RIVER_SOURCE_SAMPLES`] random cells and keeps the highest one above
/// [`RIVER_SOURCE_MIN_HEIGHT`]; attempts that find no such cell are skipped.
/// Every visited cell loses [`RIVER_CARVE_DEPTH`] of elevation.
pub fn carve_rivers(
    heights: &mut [f64],
    resolution: usize,
    rng: &mut ParkMiller,
) -> Vec<RiverWalk> {
    let side = resolution + 1;
    if side * side != heights.len() || resolution == 0 {
        return Vec::new();
    }

    let attempts = rng.int_range(RIVER_MIN_SOURCES, RIVER_MAX_SOURCES + 1);
    let mut walks = Vec::new();
    for _ in 0..attempts {
        let Some(source) = pick_source(heights, rng) else {
            continue;
        };
        walks.push(walk_downhill(heights, side, source, RIVER_STEP_FACTOR * resolution));
    }
    walks
}

fn pick_source(heights: &[f64], rng: &mut ParkMiller) -> Option<usize> {
    let mut best: Option<usize> = None;
    for _ in 0..RIVER_SOURCE_SAMPLES {
        let idx = rng.index(heights.len());
        let h = heights[idx];
        if h > RIVER_SOURCE_MIN_HEIGHT && best.is_none_or(|b| h > heights[b]) {
            best = Some(idx);
        }
    }
    best
}

fn walk_downhill(heights: &mut [f64], side: usize, source: usize, budget: usize) -> RiverWalk {
    let mut visited = FxHashSet::default();
    let mut path = Vec::new();
    let mut current = source;

    let end = loop {
        if path.len() >= budget {
            break RiverEnd::StepBudget;
        }
        // Descent compares against the ground before carving, so gentle
        // slopes shallower than the carve depth still drain.
        let ground = heights[current];
        visited.insert(current);
        path.push(current);
        heights[current] -= RIVER_CARVE_DEPTH;

        if ground <= SEA_LEVEL {
            break RiverEnd::SeaLevel;
        }

        let lowest = neighbors(current, side)
            .filter(|n| !visited.contains(n))
            .min_by(|a, b| heights[*a].total_cmp(&heights[*b]));

        match lowest {
            Some(next) if heights[next] < ground => current = next,
            _ => break RiverEnd::LocalMinimum,
        }
    };

    RiverWalk { source, path, end }
}

/// The up-to-eight in-grid neighbors of a flat cell index.
fn neighbors(index: usize, side: usize) -> impl Iterator<Item = usize> {
    let row = (index / side) as isize;
    let col = (index % side) as isize;
    let side_i = side as isize;
    (-1isize..=1)
        .flat_map(|dr| (-1isize..=1).map(move |dc| (dr, dc)))
        .filter(|&(dr, dc)| dr != 0 || dc != 0)
        .filter_map(move |(dr, dc)| {
            let r = row + dr;
            let c = col + dc;
            (r >= 0 && r < side_i && c >= 0 && c < side_i).then(|| (r * side_i + c) as usize)
        })
}
