//! Area distributions for generated shapes.

use serde::{Deserialize, Serialize};

/// Normal distribution of target areas, clamped to `[min_area, max_area]`,
/// plus the vertex budget of the outline.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AreaConfig {
    pub mean_area: f64,
    pub std_dev: f64,
    pub min_area: f64,
    pub max_area: f64,
    /// Base vertex count before the fixed bonus of 20 and the floor of 40.
    pub min_vertices: i64,
    /// Random extra vertices drawn from `[0, vertex_variance)`.
    pub vertex_variance: i64,
}

impl AreaConfig {
    pub const CITY: AreaConfig = AreaConfig {
        mean_area: 350_000.0,
        std_dev: 150_000.0,
        min_area: 100_000.0,
        max_area: 800_000.0,
        min_vertices: 24,
        vertex_variance: 12,
    };

    pub const TOWN: AreaConfig = AreaConfig {
        mean_area: 8_000.0,
        std_dev: 3_000.0,
        min_area: 2_000.0,
        max_area: 20_000.0,
        min_vertices: 12,
        vertex_variance: 8,
    };

    pub const REGION: AreaConfig = AreaConfig {
        mean_area: 5_000_000.0,
        std_dev: 2_000_000.0,
        min_area: 1_500_000.0,
        max_area: 12_000_000.0,
        min_vertices: 40,
        vertex_variance: 20,
    };

    /// Clamp a drawn area into this distribution's range.
    pub fn clamp_area(&self, area: f64) -> f64 {
        area.clamp(self.min_area, self.max_area)
    }
}

impl Default for AreaConfig {
    fn default() -> Self {
        Self::CITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_ordered() {
        for cfg in [AreaConfig::CITY, AreaConfig::TOWN, AreaConfig::REGION] {
            assert!(cfg.min_area < cfg.mean_area && cfg.mean_area < cfg.max_area);
            assert!(cfg.std_dev > 0.0);
        }
        assert!(AreaConfig::TOWN.max_area < AreaConfig::CITY.mean_area);
        assert!(AreaConfig::CITY.max_area < AreaConfig::REGION.min_area);
    }

    #[test]
    fn test_clamp_area() {
        let town = AreaConfig::TOWN;
        assert_eq!(town.clamp_area(-5.0), 2_000.0);
        assert_eq!(town.clamp_area(1e9), 20_000.0);
        assert_eq!(town.clamp_area(9_000.0), 9_000.0);
    }
}
