//! Summary statistics over a world.

use atlas_math::Bounds2;
use atlas_shapes::SettlementKind;
use atlas_terrain::HeightStats;
use serde::{Deserialize, Serialize};

use crate::classify::TerrainType;
use crate::world::World;

/// Entity counts and committed elevation statistics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldStats {
    pub seed: f64,
    pub chunks: usize,
    pub locations: usize,
    pub explored_locations: usize,
    pub regions: usize,
    pub cities: usize,
    pub towns: usize,
    /// Statistics over every stored chunk sample.
    pub heights: HeightStats,
}

impl WorldStats {
    pub fn collect(world: &World) -> Self {
        let count_kind = |kind: SettlementKind| {
            world
                .settlements()
                .values()
                .filter(|s| s.kind == kind)
                .count()
        };
        let heights = world
            .chunks()
            .sorted()
            .into_iter()
            .map(HeightStats::of_chunk)
            .fold(HeightStats::default(), |acc, s| acc.merge(&s));
        Self {
            seed: world.seed(),
            chunks: world.chunks().len(),
            locations: world.locations().len(),
            explored_locations: world.locations().values().filter(|l| l.explored).count(),
            regions: world.regions().len(),
            cities: count_kind(SettlementKind::City),
            towns: count_kind(SettlementKind::Town),
            heights,
        }
    }
}

/// Terrain type counts over a sampled grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerrainHistogram {
    pub land: usize,
    pub water: usize,
    pub river: usize,
    pub city: usize,
    pub town: usize,
}

impl TerrainHistogram {
    pub fn record(&mut self, terrain: TerrainType) {
        match terrain {
            TerrainType::Land => self.land += 1,
            TerrainType::Water => self.water += 1,
            TerrainType::River => self.river += 1,
            TerrainType::City => self.city += 1,
            TerrainType::Town => self.town += 1,
        }
    }

    pub fn count(&self, terrain: TerrainType) -> usize {
        match terrain {
            TerrainType::Land => self.land,
            TerrainType::Water => self.water,
            TerrainType::River => self.river,
            TerrainType::City => self.city,
            TerrainType::Town => self.town,
        }
    }

    pub fn total(&self) -> usize {
        self.land + self.water + self.river + self.city + self.town
    }

    /// Share of samples of `terrain`, 0 for an empty histogram.
    pub fn fraction(&self, terrain: TerrainType) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.count(terrain) as f64 / total as f64,
        }
    }
}

/// Classify every `step` units across `bounds`.
pub fn survey_terrain(world: &World, bounds: Bounds2, step: f64) -> TerrainHistogram {
    let mut histogram = TerrainHistogram::default();
    if step <= 0.0 {
        return histogram;
    }
    let cols = (bounds.width() / step).floor() as usize + 1;
    let rows = (bounds.height() / step).floor() as usize + 1;
    for r in 0..rows {
        let y = bounds.min.y + r as f64 * step;
        for c in 0..cols {
            let x = bounds.min.x + c as f64 * step;
            histogram.record(world.terrain_at(x, y).terrain);
        }
    }
    histogram
}
