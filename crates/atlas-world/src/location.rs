//! Points of interest scattered through generated chunks.

use serde::{Deserialize, Serialize};

use atlas_terrain::ChunkCoord;

use crate::classify::TerrainType;
use crate::ids::{LocationId, RegionId};

/// A point of interest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub description: String,
    pub x: f64,
    pub y: f64,
    /// Elevation the location sits at.
    pub z: f64,
    pub terrain: TerrainType,
    pub explored: bool,
    /// Region containing the location when it was generated.
    pub region: Option<RegionId>,
    /// Chunk the location was generated in.
    pub chunk: ChunkCoord,
}

impl Location {
    /// An unexplored location with placeholder text for its terrain.
    pub fn unexplored(
        id: LocationId,
        (x, y, z): (f64, f64, f64),
        terrain: TerrainType,
        region: Option<RegionId>,
        chunk: ChunkCoord,
    ) -> Self {
        let (name, description) = placeholder_text(terrain);
        Self {
            id,
            name: name.to_owned(),
            description: description.to_owned(),
            x,
            y,
            z,
            terrain,
            explored: false,
            region,
            chunk,
        }
    }
}

/// Name and description shown before a location has been visited.
pub fn placeholder_text(terrain: TerrainType) -> (&'static str, &'static str) {
    match terrain {
        TerrainType::Land => (
            "Uncharted Wilds",
            "Open country that no one has mapped yet.",
        ),
        TerrainType::Water => (
            "Open Water",
            "Dark water stretching past the horizon.",
        ),
        TerrainType::River => (
            "Riverbank",
            "A river cuts through the land here.",
        ),
        TerrainType::City => (
            "City Outskirts",
            "Smoke and noise rise from a sprawling city.",
        ),
        TerrainType::Town => (
            "Town Edge",
            "A handful of roofs cluster around a crossroads.",
        ),
    }
}
