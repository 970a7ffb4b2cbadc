//! World aggregate, terrain classification, streaming growth and persistence.
//!
//! A [`World`] owns append-only stores of chunks, locations, regions and
//! settlements. It is created once around the origin and grown by
//! [`World::check_map_expansion`] as a tracked coordinate moves; nothing is
//! ever removed or rewritten.

mod chunk_store;
mod classify;
mod ids;
mod location;
pub mod persist;
mod streaming;
mod survey;
mod world;

pub use chunk_store::ChunkStore;
pub use classify::{TerrainSample, TerrainType, terrain_at};
pub use ids::{LocationId, RegionId, SettlementId};
pub use location::Location;
pub use persist::{FORMAT_VERSION, PersistError, load_world, save_world};
pub use streaming::{Expansion, GrowthSummary, StreamingOptions};
pub use survey::{TerrainHistogram, WorldStats, survey_terrain};
pub use world::{START_LOCATION_CLEARANCE, World};
