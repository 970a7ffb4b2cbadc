//! City and town footprints.

use atlas_math::DVec2;
use serde::{Deserialize, Serialize};

use crate::area::AreaConfig;
use crate::shape::Shape;
use crate::synth::{SynthesisReport, generate_irregular_polygon};

/// Kind of built-up area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettlementKind {
    City,
    Town,
}

impl SettlementKind {
    pub fn area_config(self) -> AreaConfig {
        match self {
            SettlementKind::City => AreaConfig::CITY,
            SettlementKind::Town => AreaConfig::TOWN,
        }
    }

    /// Half-width of the square around the center that any point inside the
    /// footprint must fall within. Checked before the polygon test.
    pub fn bbox_radius(self) -> f64 {
        match self {
            SettlementKind::City => 2000.0,
            SettlementKind::Town => 600.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SettlementKind::City => "city",
            SettlementKind::Town => "town",
        }
    }
}

/// A typed settlement footprint. Settlements start unnamed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub kind: SettlementKind,
    pub shape: Shape,
    pub name: Option<String>,
}

impl Settlement {
    pub fn center(&self) -> DVec2 {
        self.shape.center
    }

    /// Whether `p` lies within the settlement's bounding box around its center.
    #[inline]
    pub fn near(&self, p: DVec2) -> bool {
        let d = (p - self.shape.center).abs();
        d.max_element() <= self.kind.bbox_radius()
    }

    /// Bounding-box pre-check followed by the polygon test.
    pub fn contains(&self, p: DVec2) -> bool {
        self.near(p) && self.shape.contains(p)
    }
}

/// Generate a settlement of `kind` around `center`, avoiding `avoid`.
pub fn generate_settlement(
    center: DVec2,
    seed: f64,
    kind: SettlementKind,
    avoid: &[&Shape],
) -> (Settlement, SynthesisReport) {
    let out = generate_irregular_polygon(center, seed, &kind.area_config(), avoid);
    tracing::debug!(
        kind = kind.label(),
        x = out.shape.center.x,
        y = out.shape.center.y,
        vertices = out.shape.vertices.len(),
        clipped = out.report.clipped_vertices,
        "generated settlement"
    );
    (
        Settlement {
            kind,
            shape: out.shape,
            name: None,
        },
        out.report,
    )
}
