//! Resolve a world point to elevation and terrain type.

use atlas_math::DVec2;
use atlas_shapes::{Settlement, SettlementKind};
use atlas_terrain::constants::SEA_LEVEL;
use atlas_terrain::{ChunkCoord, height};
use serde::{Deserialize, Serialize};

use crate::chunk_store::ChunkStore;

/// Surface type at a world point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TerrainType {
    Land,
    Water,
    River,
    City,
    Town,
}

impl TerrainType {
    pub const ALL: [TerrainType; 5] = [
        TerrainType::Land,
        TerrainType::Water,
        TerrainType::River,
        TerrainType::City,
        TerrainType::Town,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TerrainType::Land => "land",
            TerrainType::Water => "water",
            TerrainType::River => "river",
            TerrainType::City => "city",
            TerrainType::Town => "town",
        }
    }

    /// Whether a traveller on foot can stand here.
    pub fn is_walkable(self) -> bool {
        match self {
            TerrainType::Land | TerrainType::City | TerrainType::Town => true,
            TerrainType::Water | TerrainType::River => false,
        }
    }
}

impl From<SettlementKind> for TerrainType {
    fn from(kind: SettlementKind) -> Self {
        match kind {
            SettlementKind::City => TerrainType::City,
            SettlementKind::Town => TerrainType::Town,
        }
    }
}

/// Elevation and terrain type at a point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TerrainSample {
    pub height: f64,
    pub terrain: TerrainType,
}

/// Elevation at `(x, y)` and whether it is a river cell.
///
/// Inside generated territory this is the nearest stored sample of the
/// owning chunk, which includes river carving. Elsewhere it is the pure
/// height field and never a river.
pub(crate) fn ground_at(x: f64, y: f64, seed: f64, chunks: &ChunkStore) -> (f64, bool) {
    let stored = chunks.get(ChunkCoord::containing(x, y)).and_then(|chunk| {
        let (i, j) = chunk.nearest_cell(x, y)?;
        let h = chunk.height_at_cell(i, j)?;
        Some((h, chunk.is_river(chunk.index(i, j))))
    });
    stored.unwrap_or_else(|| (height(x, y, seed), false))
}

/// Classify world point `(x, y)`.
///
/// Rivers win over everything, then open water below sea level, then the
/// first settlement whose footprint contains the point, else land.
pub fn terrain_at<'a>(
    x: f64,
    y: f64,
    seed: f64,
    chunks: &ChunkStore,
    settlements: impl IntoIterator<Item = &'a Settlement>,
) -> TerrainSample {
    let (height, river) = ground_at(x, y, seed, chunks);
    let terrain = if river {
        TerrainType::River
    } else if height < SEA_LEVEL {
        TerrainType::Water
    } else {
        let p = DVec2::new(x, y);
        settlements
            .into_iter()
            .find(|s| s.contains(p))
            .map_or(TerrainType::Land, |s| s.kind.into())
    };
    TerrainSample { height, terrain }
}
