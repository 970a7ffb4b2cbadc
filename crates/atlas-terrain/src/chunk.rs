//! Fixed-size terrain chunks: a sampled elevation grid plus river markers.

use atlas_math::{DVec2, ParkMiller};
use serde::{Deserialize, Serialize};

use crate::constants::{CHUNK_RESOLUTION, CHUNK_SEED_X, CHUNK_SEED_Y, CHUNK_SIZE};
use crate::height::height;
use crate::rivers::carve_rivers;

/// Integer indices of a chunk on the world grid.
///
/// Chunk `(xi, yi)` covers world `[xi * CHUNK_SIZE, (xi + 1) * CHUNK_SIZE)` on
/// x and the same on y.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChunkCoord {
    pub xi: i32,
    pub yi: i32,
}

impl ChunkCoord {
    pub fn new(xi: i32, yi: i32) -> Self {
        Self { xi, yi }
    }

    /// Chunk owning world point `(x, y)` (floor division).
    pub fn containing(x: f64, y: f64) -> Self {
        Self {
            xi: (x / CHUNK_SIZE).floor() as i32,
            yi: (y / CHUNK_SIZE).floor() as i32,
        }
    }

    /// Neighbor offset by `(dx, dy)` chunks.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            xi: self.xi + dx,
            yi: self.yi + dy,
        }
    }

    /// All chunks within Chebyshev distance `radius`, row by row.
    pub fn neighborhood(self, radius: i32) -> impl Iterator<Item = ChunkCoord> {
        (-radius..=radius)
            .flat_map(move |dy| (-radius..=radius).map(move |dx| self.offset(dx, dy)))
    }

    /// World position of the chunk's minimum corner.
    pub fn origin(self) -> DVec2 {
        DVec2::new(self.xi as f64 * CHUNK_SIZE, self.yi as f64 * CHUNK_SIZE)
    }

    /// Stable string identifier used in persisted data.
    pub fn id(self) -> String {
        format!("chunk_{}_{}", self.xi, self.yi)
    }
}

/// Seed of the per-chunk PRNG stream.
pub fn chunk_seed(seed: f64, coord: ChunkCoord) -> f64 {
    seed + coord.xi as f64 * CHUNK_SEED_X + coord.yi as f64 * CHUNK_SEED_Y
}

/// Deterministic PRNG for a chunk, offset by `salt` so independent consumers
/// (rivers, locations, settlements) draw from distinct streams.
pub fn chunk_rng(seed: f64, coord: ChunkCoord, salt: f64) -> ParkMiller {
    ParkMiller::new(chunk_seed(seed, coord) + salt)
}

/// A generated terrain tile.
///
/// `heights` is row-major with `(resolution + 1)²` entries; row `i` steps
/// along y and column `j` along x. `rivers` holds sorted, unique cell indices.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    pub id: String,
    pub coord: ChunkCoord,
    pub size: f64,
    pub resolution: usize,
    pub heights: Vec<f64>,
    pub seed: f64,
    pub rivers: Vec<usize>,
}

impl Chunk {
    /// Samples per row.
    pub fn side(&self) -> usize {
        self.resolution + 1
    }

    /// Flat index of row `i`, column `j`.
    #[inline]
    pub fn index(&self, i: usize, j: usize) -> usize {
        i * self.side() + j
    }

    /// Distance between adjacent samples.
    pub fn cell_size(&self) -> f64 {
        self.size / self.resolution as f64
    }

    /// World position of sample `(i, j)`.
    pub fn sample_position(&self, i: usize, j: usize) -> DVec2 {
        self.coord.origin() + DVec2::new(j as f64, i as f64) * self.cell_size()
    }

    /// Stored (river-carved) elevation at sample `(i, j)`.
    pub fn height_at_cell(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.side() || j >= self.side() {
            return None;
        }
        self.heights.get(self.index(i, j)).copied()
    }

    /// Whether the flat cell index is flagged as river.
    pub fn is_river(&self, index: usize) -> bool {
        self.rivers.binary_search(&index).is_ok()
    }

    /// Nearest sample to world point `(x, y)`, or `None` if the point lies
    /// outside this chunk's footprint.
    pub fn nearest_cell(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        let local = DVec2::new(x, y) - self.coord.origin();
        if local.x < 0.0 || local.y < 0.0 || local.x > self.size || local.y > self.size {
            return None;
        }
        let cell = self.cell_size();
        let j = ((local.x / cell).round() as usize).min(self.resolution);
        let i = ((local.y / cell).round() as usize).min(self.resolution);
        Some((i, j))
    }

    /// Minimum, maximum elevation of the stored grid.
    pub fn height_range(&self) -> (f64, f64) {
        self.heights
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), h| {
                (lo.min(*h), hi.max(*h))
            })
    }
}

/// Sample the pure height field across a chunk's footprint.
pub fn sample_heights(coord: ChunkCoord, seed: f64, resolution: usize, size: f64) -> Vec<f64> {
    let side = resolution + 1;
    let cell = size / resolution as f64;
    let origin = coord.origin();
    let mut heights = Vec::with_capacity(side * side);
    for i in 0..side {
        let y = origin.y + i as f64 * cell;
        for j in 0..side {
            heights.push(height(origin.x + j as f64 * cell, y, seed));
        }
    }
    heights
}

/// Generate chunk `(xi, yi)`: sample the height grid, then carve rivers.
///
/// A pure function of `(xi, yi, seed)`.
pub fn generate_chunk(xi: i32, yi: i32, seed: f64) -> Chunk {
    let coord = ChunkCoord::new(xi, yi);
    let mut heights = sample_heights(coord, seed, CHUNK_RESOLUTION, CHUNK_SIZE);

    let mut rng = chunk_rng(seed, coord, 0.0);
    let walks = carve_rivers(&mut heights, CHUNK_RESOLUTION, &mut rng);

    let mut rivers: Vec<usize> = walks.iter().flat_map(|w| w.path.iter().copied()).collect();
    rivers.sort_unstable();
    rivers.dedup();

    tracing::debug!(
        xi,
        yi,
        walks = walks.len(),
        river_cells = rivers.len(),
        "generated chunk"
    );

    Chunk {
        id: coord.id(),
        coord,
        size: CHUNK_SIZE,
        resolution: CHUNK_RESOLUTION,
        heights,
        seed,
        rivers,
    }
}
