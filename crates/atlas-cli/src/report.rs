//! Final run report, as text or JSON.

use std::fmt::Write as _;
use std::path::PathBuf;

use atlas_math::DVec2;
use atlas_terrain::find_nearest_land;
use atlas_world::{TerrainType, World, WorldStats};
use serde::Serialize;

use crate::tour::TourReport;

/// Spacing and reach of the nearest-land search around the final position.
const LAND_SCAN_STEP: f64 = 50.0;
const LAND_SCAN_RADIUS: f64 = 5_000.0;

#[derive(Clone, Debug, Serialize)]
pub struct RunReport {
    pub world: WorldStats,
    pub tour: TourReport,
    /// Closest dry point to where the walk ended.
    pub nearest_land: Option<DVec2>,
    pub save_path: Option<PathBuf>,
}

impl RunReport {
    pub fn new(world: &World, tour: TourReport, save_path: Option<PathBuf>) -> Self {
        let nearest_land = find_nearest_land(
            world.seed(),
            tour.final_position,
            LAND_SCAN_STEP,
            LAND_SCAN_RADIUS,
        );
        Self {
            world: WorldStats::collect(world),
            tour,
            nearest_land,
            save_path,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_text(&self) -> String {
        let w = &self.world;
        let t = &self.tour;
        let mut out = String::new();
        let _ = writeln!(out, "seed            {}", w.seed);
        let _ = writeln!(out, "chunks          {}", w.chunks);
        let _ = writeln!(
            out,
            "locations       {} ({} explored)",
            w.locations, w.explored_locations
        );
        let _ = writeln!(out, "settlements     {} cities, {} towns", w.cities, w.towns);
        let _ = writeln!(out, "regions         {}", w.regions);
        let _ = writeln!(
            out,
            "elevation       min {:.1}, max {:.1}, mean {:.1}, land {:.0}%",
            w.heights.min,
            w.heights.max,
            w.heights.mean,
            w.heights.land_fraction * 100.0
        );
        let _ = writeln!(
            out,
            "walk            {} steps, {} grew the world, ended at ({:.1}, {:.1})",
            t.steps, t.growth_steps, t.final_position.x, t.final_position.y
        );
        for terrain in TerrainType::ALL {
            let n = t.terrain.count(terrain);
            if n > 0 {
                let _ = writeln!(out, "  {:<14}{}", terrain.label(), n);
            }
        }
        match self.nearest_land {
            Some(p) => {
                let _ = writeln!(out, "nearest land    ({:.1}, {:.1})", p.x, p.y);
            }
            None => {
                let _ = writeln!(out, "nearest land    none within {LAND_SCAN_RADIUS}");
            }
        }
        if let Some(path) = &self.save_path {
            let _ = writeln!(out, "saved to        {}", path.display());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_world::StreamingOptions;

    fn sample_report() -> RunReport {
        let world = World::create(42.0, StreamingOptions::default());
        RunReport::new(&world, TourReport::default(), Some(PathBuf::from("w.ron")))
    }

    #[test]
    fn test_text_report_lists_counts() {
        let report = sample_report();
        let text = report.to_text();
        assert!(text.contains("seed            42"));
        assert!(text.contains("chunks          9"));
        assert!(text.contains("saved to        w.ron"));
    }

    #[test]
    fn test_json_report_parses_back() {
        let report = sample_report();
        let json = report.to_json().expect("serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["world"]["chunks"], 9);
        assert_eq!(value["tour"]["steps"], 0);
        assert!(value.get("nearest_land").is_some());
    }
}
