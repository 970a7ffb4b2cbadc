//! Irregular, collision-aware polygons for regions and settlements.
//!
//! Every shape is produced by [`generate_irregular_polygon`]: a radial blob
//! around a center whose vertices stop just short of any previously generated
//! shape passed in the avoid list. Settlements and regions are thin wrappers
//! that pick the area distribution.

mod area;
mod region;
mod settlement;
mod shape;
mod synth;

pub use area::AreaConfig;
pub use region::{REGION_PALETTE, Region, generate_region, region_color};
pub use settlement::{Settlement, SettlementKind, generate_settlement};
pub use shape::Shape;
pub use synth::{
    MAX_REPULSION_ATTEMPTS, MIN_VERTICES, ShapeSynthesis, SynthesisReport,
    generate_irregular_polygon,
};
