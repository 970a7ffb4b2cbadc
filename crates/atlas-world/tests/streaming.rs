//! Growth of a world along a walk: idempotence and append-only storage.

use atlas_math::DVec2;
use atlas_terrain::constants::{CHUNK_SIZE, SEA_LEVEL};
use atlas_terrain::{ChunkCoord, generate_chunk, height};
use atlas_world::{Expansion, START_LOCATION_CLEARANCE, StreamingOptions, World};

#[test]
fn test_expansion_is_idempotent_along_a_walk() {
    let mut world = World::create(42.0, StreamingOptions::default());
    for step in 0..8 {
        let p = DVec2::new(step as f64 * 450.0, step as f64 * -275.0);
        world.move_player(p);
        let chunk_keys = world.chunks().coords();
        let location_keys: Vec<_> = world.locations().keys().copied().collect();
        let settlement_keys: Vec<_> = world.settlements().keys().copied().collect();

        assert_eq!(world.check_map_expansion(p.x, p.y), Expansion::Unchanged);
        assert_eq!(world.chunks().coords(), chunk_keys);
        assert_eq!(world.locations().keys().copied().collect::<Vec<_>>(), location_keys);
        assert_eq!(world.settlements().keys().copied().collect::<Vec<_>>(), settlement_keys);
    }
}

#[test]
fn test_existing_entries_survive_expansion_unchanged() {
    let mut world = World::create(17.0, StreamingOptions::default());
    let snapshot = world.clone();

    let grown = world.check_map_expansion(3.5 * CHUNK_SIZE, -2.5 * CHUNK_SIZE);
    assert!(grown.is_grown());

    for chunk in snapshot.chunks().iter() {
        assert_eq!(world.chunks().get(chunk.coord), Some(chunk), "chunk {} changed", chunk.id);
    }
    for (id, loc) in snapshot.locations() {
        assert_eq!(world.location(*id), Some(loc), "location {id} changed");
    }
    for (id, s) in snapshot.settlements() {
        assert_eq!(world.settlement(*id), Some(s), "settlement {id} changed");
    }
    assert_eq!(world.active_location(), snapshot.active_location());
}

#[test]
fn test_stored_chunks_equal_fresh_generation() {
    let mut world = World::create(42.0, StreamingOptions::parallel(2));
    world.check_map_expansion(-1500.0, 2500.0);
    for chunk in world.chunks().iter() {
        assert_eq!(*chunk, generate_chunk(chunk.coord.xi, chunk.coord.yi, 42.0));
    }
}

#[test]
fn test_every_visited_neighborhood_is_complete() {
    let mut world = World::create(5.0, StreamingOptions::default());
    let stops = [
        DVec2::new(0.0, 0.0),
        DVec2::new(-2300.0, 10.0),
        DVec2::new(-2300.0, 4100.0),
    ];
    for p in stops {
        world.move_player(p);
        assert_eq!(world.player(), p);
        for coord in ChunkCoord::containing(p.x, p.y).neighborhood(1) {
            assert!(world.chunks().contains(coord), "{coord:?} missing after visiting {p}");
        }
    }
}

#[test]
fn test_start_location_snaps_above_sea() {
    // The origin sample of chunk (0, 0) is cell (0, 0); carving only lowers
    // it, so a pure height below sea level stays below sea level.
    let seed = (0..500)
        .map(|s| s as f64)
        .find(|s| height(0.0, 0.0, *s) < SEA_LEVEL)
        .expect("some seed puts the origin under water");

    let world = World::create(seed, StreamingOptions::default());
    assert!(world.height_at(0.0, 0.0) < SEA_LEVEL);
    let start = world
        .active_location()
        .and_then(|id| world.location(id))
        .expect("start location");
    assert_eq!(start.z, SEA_LEVEL + START_LOCATION_CLEARANCE);
    assert!(start.explored);
}

#[test]
fn test_start_location_on_dry_land_keeps_ground_height() {
    let seed = (0..500)
        .map(|s| s as f64)
        .find(|s| height(0.0, 0.0, *s) > SEA_LEVEL + 50.0)
        .expect("some seed puts the origin on land");

    let world = World::create(seed, StreamingOptions::default());
    let start = world
        .active_location()
        .and_then(|id| world.location(id))
        .expect("start location");
    assert_eq!(start.z, world.height_at(0.0, 0.0));
    assert!(start.z >= SEA_LEVEL);
}
