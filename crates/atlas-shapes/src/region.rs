//! Large named zones that group locations.

use atlas_math::{DVec2, ParkMiller};
use serde::{Deserialize, Serialize};

use crate::area::AreaConfig;
use crate::shape::Shape;
use crate::synth::{SynthesisReport, generate_irregular_polygon};

/// Display colors assigned to regions.
pub const REGION_PALETTE: [&str; 10] = [
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
    "#9c755f", "#bab0ac",
];

/// A named polygonal zone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub shape: Shape,
    pub name: String,
    pub description: String,
    /// `#rrggbb`
    pub color: String,
}

impl Region {
    pub fn contains(&self, p: DVec2) -> bool {
        self.shape.contains(p)
    }
}

/// Palette color for a region seed.
pub fn region_color(seed: f64) -> &'static str {
    let mut rng = ParkMiller::new(seed);
    REGION_PALETTE
        .get(rng.index(REGION_PALETTE.len()))
        .copied()
        .unwrap_or(REGION_PALETTE[0])
}

/// Generate a region around `center`, avoiding `avoid`.
pub fn generate_region(
    center: DVec2,
    seed: f64,
    name: impl Into<String>,
    description: impl Into<String>,
    avoid: &[&Shape],
) -> (Region, SynthesisReport) {
    let out = generate_irregular_polygon(center, seed, &AreaConfig::REGION, avoid);
    let region = Region {
        shape: out.shape,
        name: name.into(),
        description: description.into(),
        color: region_color(seed).to_owned(),
    };
    tracing::debug!(name = %region.name, color = %region.color, "generated region");
    (region, out.report)
}
