//! The world aggregate.

use std::collections::BTreeMap;

use atlas_math::DVec2;
use atlas_shapes::{Region, Settlement, SynthesisReport, generate_region};
use atlas_terrain::ChunkCoord;
use atlas_terrain::constants::SEA_LEVEL;
use serde::{Deserialize, Serialize};

use crate::chunk_store::ChunkStore;
use crate::classify::{self, TerrainSample};
use crate::ids::{LocationId, RegionId, SettlementId};
use crate::location::Location;
use crate::streaming::StreamingOptions;

/// Height above sea level the start location is lifted to when the origin
/// is under water.
pub const START_LOCATION_CLEARANCE: f64 = 5.0;

/// Seed spacing between successively placed regions.
const REGION_SEED_STRIDE: f64 = 50_000.0;

/// A generated world: append-only stores plus the tracked player position.
///
/// Entries are only ever added. The seed is fixed at creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct World {
    seed: f64,
    chunks: ChunkStore,
    locations: BTreeMap<LocationId, Location>,
    regions: BTreeMap<RegionId, Region>,
    settlements: BTreeMap<SettlementId, Settlement>,
    player: DVec2,
    active_location: Option<LocationId>,
    #[serde(skip)]
    streaming: StreamingOptions,
}

impl World {
    /// A world with no generated content.
    pub fn empty(seed: f64) -> Self {
        Self {
            seed,
            chunks: ChunkStore::new(),
            locations: BTreeMap::new(),
            regions: BTreeMap::new(),
            settlements: BTreeMap::new(),
            player: DVec2::ZERO,
            active_location: None,
            streaming: StreamingOptions::default(),
        }
    }

    /// Create a world: the 3×3 chunk neighborhood around the origin, its
    /// locations and settlements, and an explored start location at the
    /// origin which becomes the active location.
    ///
    /// The start location sits on the committed ground height, lifted to
    /// [`SEA_LEVEL`] + [`START_LOCATION_CLEARANCE`] if that is under water.
    pub fn create(seed: f64, streaming: StreamingOptions) -> Self {
        let mut world = Self::empty(seed);
        world.streaming = streaming;
        world.check_map_expansion(0.0, 0.0);

        let ground = world.height_at(0.0, 0.0);
        let z = if ground < SEA_LEVEL {
            SEA_LEVEL + START_LOCATION_CLEARANCE
        } else {
            ground
        };
        let id = world.next_location_id();
        let terrain = world.terrain_at(0.0, 0.0).terrain;
        let region = world.region_containing(DVec2::ZERO);
        let mut start =
            Location::unexplored(id, (0.0, 0.0, z), terrain, region, ChunkCoord::new(0, 0));
        start.name = "Starting Point".to_owned();
        start.description = "Where the journey begins.".to_owned();
        start.explored = true;
        world.locations.insert(id, start);
        world.active_location = Some(id);

        tracing::info!(
            seed,
            chunks = world.chunks.len(),
            locations = world.locations.len(),
            settlements = world.settlements.len(),
            start_z = z,
            "created world"
        );
        world
    }

    pub fn seed(&self) -> f64 {
        self.seed
    }

    pub fn chunks(&self) -> &ChunkStore {
        &self.chunks
    }

    pub fn locations(&self) -> &BTreeMap<LocationId, Location> {
        &self.locations
    }

    pub fn regions(&self) -> &BTreeMap<RegionId, Region> {
        &self.regions
    }

    pub fn settlements(&self) -> &BTreeMap<SettlementId, Settlement> {
        &self.settlements
    }

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(&id)
    }

    pub fn settlement(&self, id: SettlementId) -> Option<&Settlement> {
        self.settlements.get(&id)
    }

    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(&id)
    }

    pub fn player(&self) -> DVec2 {
        self.player
    }

    pub fn set_player(&mut self, position: DVec2) {
        self.player = position;
    }

    pub fn active_location(&self) -> Option<LocationId> {
        self.active_location
    }

    /// Point the active location at an existing entry. Returns `false` for
    /// an unknown id.
    pub fn set_active_location(&mut self, id: LocationId) -> bool {
        if !self.locations.contains_key(&id) {
            return false;
        }
        self.active_location = Some(id);
        true
    }

    pub fn streaming_options(&self) -> StreamingOptions {
        self.streaming
    }

    /// Streaming options are runtime settings and are not persisted.
    pub fn set_streaming_options(&mut self, options: StreamingOptions) {
        self.streaming = options;
    }

    /// Ground elevation: the committed chunk sample inside generated
    /// territory, the pure height field elsewhere.
    pub fn height_at(&self, x: f64, y: f64) -> f64 {
        classify::ground_at(x, y, self.seed, &self.chunks).0
    }

    pub fn terrain_at(&self, x: f64, y: f64) -> TerrainSample {
        classify::terrain_at(x, y, self.seed, &self.chunks, self.settlements.values())
    }

    /// First region containing `p`, in id order.
    pub fn region_containing(&self, p: DVec2) -> Option<RegionId> {
        self.regions
            .iter()
            .find(|(_, r)| r.contains(p))
            .map(|(id, _)| *id)
    }

    /// Grow a named region around `center`, clipped against every existing
    /// region. Locations generated earlier keep their region tag.
    pub fn place_region(
        &mut self,
        center: DVec2,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> (RegionId, SynthesisReport) {
        let id = RegionId(self.regions.len() as u32);
        let seed = self.seed + REGION_SEED_STRIDE * (id.0 as f64 + 1.0);
        let avoid: Vec<_> = self.regions.values().map(|r| &r.shape).collect();
        let (region, report) = generate_region(center, seed, name, description, &avoid);
        tracing::info!(%id, name = %region.name, "placed region");
        self.regions.insert(id, region);
        (id, report)
    }

    pub(crate) fn next_location_id(&self) -> LocationId {
        LocationId(self.locations.len() as u32)
    }

    pub(crate) fn next_settlement_id(&self) -> SettlementId {
        SettlementId(self.settlements.len() as u32)
    }

    pub(crate) fn insert_chunk(&mut self, chunk: atlas_terrain::Chunk) -> bool {
        self.chunks.insert(chunk)
    }

    pub(crate) fn insert_location(&mut self, location: Location) {
        self.locations.entry(location.id).or_insert(location);
    }

    pub(crate) fn insert_settlement(&mut self, id: SettlementId, settlement: Settlement) {
        self.settlements.entry(id).or_insert(settlement);
    }
}
