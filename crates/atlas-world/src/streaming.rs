//! On-demand growth of the world around a tracked coordinate.

use atlas_math::DVec2;
use atlas_shapes::{SettlementKind, generate_settlement};
use atlas_terrain::constants::CHUNK_SIZE;
use atlas_terrain::{
    ChunkCoord, chunk_rng, default_worker_count, generate_chunks, generate_chunks_parallel,
};

use crate::ids::{LocationId, SettlementId};
use crate::location::Location;
use crate::world::World;

/// Chebyshev radius of the neighborhood kept generated around the tracked point.
const STREAM_RADIUS: i32 = 1;

const MIN_LOCATIONS: i64 = 1;
const MAX_LOCATIONS: i64 = 3;
const MIN_SETTLEMENTS: i64 = 2;
const MAX_SETTLEMENTS: i64 = 4;
const CITY_CHANCE: f64 = 0.25;
/// Seed spacing between successive settlement shapes.
const SETTLEMENT_SEED_STRIDE: f64 = 1000.0;

// Chunk PRNG salts. Integral, since the generator drops fractional seeds.
const LOCATION_SALT: f64 = 500_009.0;
const SETTLEMENT_SALT: f64 = 700_001.0;

/// How missing chunks are generated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StreamingOptions {
    /// Generate chunk height grids on a worker pool.
    pub parallel: bool,
    /// Worker threads; 0 picks one per spare core.
    pub workers: usize,
}

impl StreamingOptions {
    pub fn parallel(workers: usize) -> Self {
        Self {
            parallel: true,
            workers,
        }
    }

    fn worker_count(&self) -> usize {
        match self.workers {
            0 => default_worker_count(),
            n => n,
        }
    }
}

/// Everything one expansion added.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GrowthSummary {
    pub chunks: Vec<ChunkCoord>,
    pub locations: Vec<LocationId>,
    pub settlements: Vec<SettlementId>,
    /// Settlements whose center could not be pushed out of an earlier one.
    pub residual_overlaps: usize,
}

/// Outcome of [`World::check_map_expansion`].
#[derive(Clone, Debug, PartialEq)]
pub enum Expansion {
    /// The neighborhood already existed; nothing to save or redraw.
    Unchanged,
    Grown(GrowthSummary),
}

impl Expansion {
    pub fn is_grown(&self) -> bool {
        matches!(self, Expansion::Grown(_))
    }

    pub fn summary(&self) -> Option<&GrowthSummary> {
        match self {
            Expansion::Unchanged => None,
            Expansion::Grown(summary) => Some(summary),
        }
    }
}

impl World {
    /// Ensure the 3×3 chunk neighborhood around `(x, y)` exists.
    ///
    /// Each missing chunk is generated along with 2–4 settlements and then
    /// 1–3 unexplored locations inside its footprint. Settlements avoid every
    /// settlement generated before them, including ones from earlier chunks
    /// in the same call. Existing entries are never touched.
    pub fn check_map_expansion(&mut self, x: f64, y: f64) -> Expansion {
        let center = ChunkCoord::containing(x, y);
        let missing: Vec<ChunkCoord> = center
            .neighborhood(STREAM_RADIUS)
            .filter(|c| !self.chunks().contains(*c))
            .collect();
        if missing.is_empty() {
            return Expansion::Unchanged;
        }

        let options = self.streaming_options();
        let chunks = if options.parallel {
            generate_chunks_parallel(self.seed(), &missing, options.worker_count())
        } else {
            generate_chunks(self.seed(), &missing)
        };

        let mut summary = GrowthSummary::default();
        for chunk in chunks {
            let coord = chunk.coord;
            if !self.insert_chunk(chunk) {
                continue;
            }
            summary.chunks.push(coord);
            // Locations are classified against this chunk's settlements.
            self.populate_settlements(coord, &mut summary);
            self.populate_locations(coord, &mut summary);
        }

        tracing::info!(
            xi = center.xi,
            yi = center.yi,
            chunks = summary.chunks.len(),
            locations = summary.locations.len(),
            settlements = summary.settlements.len(),
            residual_overlaps = summary.residual_overlaps,
            "expanded world"
        );
        Expansion::Grown(summary)
    }

    /// Move the tracked player and expand around the new position.
    pub fn move_player(&mut self, position: DVec2) -> Expansion {
        self.set_player(position);
        self.check_map_expansion(position.x, position.y)
    }

    fn populate_locations(&mut self, coord: ChunkCoord, summary: &mut GrowthSummary) {
        let mut rng = chunk_rng(self.seed(), coord, LOCATION_SALT);
        let origin = coord.origin();
        let count = rng.int_range(MIN_LOCATIONS, MAX_LOCATIONS + 1);
        for _ in 0..count {
            let p = origin + DVec2::new(rng.range(0.0, CHUNK_SIZE), rng.range(0.0, CHUNK_SIZE));
            let sample = self.terrain_at(p.x, p.y);
            let id = self.next_location_id();
            let location = Location::unexplored(
                id,
                (p.x, p.y, sample.height),
                sample.terrain,
                self.region_containing(p),
                coord,
            );
            self.insert_location(location);
            summary.locations.push(id);
        }
    }

    fn populate_settlements(&mut self, coord: ChunkCoord, summary: &mut GrowthSummary) {
        let mut rng = chunk_rng(self.seed(), coord, SETTLEMENT_SALT);
        let origin = coord.origin();
        let count = rng.int_range(MIN_SETTLEMENTS, MAX_SETTLEMENTS + 1);
        for _ in 0..count {
            let kind = if rng.chance(CITY_CHANCE) {
                SettlementKind::City
            } else {
                SettlementKind::Town
            };
            let center =
                origin + DVec2::new(rng.range(0.0, CHUNK_SIZE), rng.range(0.0, CHUNK_SIZE));
            let id = self.next_settlement_id();
            let shape_seed = self.seed() + SETTLEMENT_SEED_STRIDE * (id.0 as f64 + 1.0);

            let (settlement, report) = {
                let avoid: Vec<_> = self.settlements().values().map(|s| &s.shape).collect();
                generate_settlement(center, shape_seed, kind, &avoid)
            };
            if report.has_residual_overlap() {
                summary.residual_overlaps += 1;
            }
            self.insert_settlement(id, settlement);
            summary.settlements.push(id);
        }
    }
}
