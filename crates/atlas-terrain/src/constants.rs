//! Fixed world-generation constants.

/// Edge length of a chunk in world units.
pub const CHUNK_SIZE: f64 = 1000.0;

/// Grid cells per chunk edge; a chunk stores `(CHUNK_RESOLUTION + 1)²` samples.
pub const CHUNK_RESOLUTION: usize = 50;

/// Elevation separating water from land.
pub const SEA_LEVEL: f64 = 0.0;

/// Lowest elevation the height field can produce.
pub const HEIGHT_FLOOR: f64 = -450.0;

/// Minimum elevation for a cell to seed a river.
pub const RIVER_SOURCE_MIN_HEIGHT: f64 = 300.0;

/// Random cells sampled when searching for one river source.
pub const RIVER_SOURCE_SAMPLES: usize = 50;

/// Inclusive bounds on the number of river sources attempted per chunk.
pub const RIVER_MIN_SOURCES: i64 = 2;
pub const RIVER_MAX_SOURCES: i64 = 4;

/// Elevation removed from every cell a river walk passes through.
pub const RIVER_CARVE_DEPTH: f64 = 4.0;

/// Maximum walk length as a multiple of [`CHUNK_RESOLUTION`].
pub const RIVER_STEP_FACTOR: usize = 4;

/// Multipliers mixing chunk indices into the world seed for per-chunk PRNGs.
pub const CHUNK_SEED_X: f64 = 7919.0;
pub const CHUNK_SEED_Y: f64 = 104_729.0;
