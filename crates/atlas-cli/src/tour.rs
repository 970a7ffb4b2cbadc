//! Straight-line walk that drives world streaming.

use atlas_config::WalkConfig;
use atlas_math::DVec2;
use atlas_math::det::{det_cos, det_sin};
use atlas_world::{Expansion, GrowthSummary, TerrainHistogram, World};
use serde::Serialize;

/// What happened along the walk.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TourReport {
    pub steps: u32,
    /// Moves that generated new chunks.
    pub growth_steps: u32,
    pub chunks_added: usize,
    pub settlements_added: usize,
    pub final_position: DVec2,
    /// Terrain under each waypoint, start included.
    pub terrain: TerrainHistogram,
}

/// Positions visited after leaving `start`, one per step.
pub fn waypoints(start: DVec2, walk: &WalkConfig) -> impl Iterator<Item = DVec2> {
    let heading = walk.heading_degrees.to_radians();
    let dir = DVec2::new(det_cos(heading), det_sin(heading));
    let step = walk.step_length;
    (1..=walk.steps).map(move |k| start + dir * (step * k as f64))
}

/// Walk the player from its current position, expanding the world at every
/// waypoint. `on_growth` runs after each move that added content.
pub fn walk<E>(
    world: &mut World,
    walk: &WalkConfig,
    mut on_growth: impl FnMut(&World, &GrowthSummary) -> Result<(), E>,
) -> Result<TourReport, E> {
    let start = world.player();
    let mut report = TourReport {
        final_position: start,
        ..TourReport::default()
    };
    report.terrain.record(world.terrain_at(start.x, start.y).terrain);

    for p in waypoints(start, walk) {
        report.steps += 1;
        if let Expansion::Grown(summary) = world.move_player(p) {
            report.growth_steps += 1;
            report.chunks_added += summary.chunks.len();
            report.settlements_added += summary.settlements.len();
            on_growth(world, &summary)?;
        }
        report.terrain.record(world.terrain_at(p.x, p.y).terrain);
        report.final_position = p;
        tracing::debug!(x = p.x, y = p.y, step = report.steps, "moved");
    }
    Ok(report)
}
