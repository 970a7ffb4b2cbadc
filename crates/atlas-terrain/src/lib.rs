//! Terrain synthesis: the coherent height field, chunk sampling, river
//! carving, parallel chunk batches, and height statistics.

pub mod batch;
pub mod constants;
mod chunk;
mod height;
mod rivers;
mod scan;

pub use batch::{default_worker_count, generate_chunks, generate_chunks_parallel};
pub use chunk::{Chunk, ChunkCoord, chunk_rng, chunk_seed, generate_chunk, sample_heights};
pub use height::{HeightSample, height, height_breakdown, peak_multiplier};
pub use rivers::{RiverEnd, RiverWalk, carve_rivers};
pub use scan::{HeightStats, find_nearest_land};
