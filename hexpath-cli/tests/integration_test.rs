//! Integration tests for the HEXPATH grid core
//!
//! Tests the full stack: map config, world construction, geometry laws and
//! path search

use hexpath_core::{
    cube_to_offset, distance, offset_to_cube, CubeCoord, Direction, GridBounds, GridError,
    GridQuery, GridState, MapConfig, OffsetCoord, Passability, PathFinder, TileKind, TileMap,
    TileSource, UnitId, World, DEFAULT_STEP_COST,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// TEST FIXTURES
// ============================================================================

const SAMPLES: usize = 2000;

fn random_cell(rng: &mut ChaCha8Rng) -> OffsetCoord {
    OffsetCoord::new(rng.gen_range(-500..500), rng.gen_range(-500..500))
}

/// Open 5x5 plain map at (0, 0)
fn open_world() -> World {
    World::from_config(&MapConfig::default()).unwrap()
}

/// 5x5 map with a rock wall down column 2
fn walled_world() -> World {
    let config = MapConfig::from_json(
        r##"{
            "name": "walled",
            "rows": ["..#..", "..#..", "..#..", "..#..", "..#.."],
            "legend": { ".": "plain", "#": "rock" },
            "impassable": ["rock"]
        }"##,
    )
    .unwrap();
    World::from_config(&config).unwrap()
}

// ============================================================================
// GEOMETRY LAWS
// ============================================================================

#[test]
fn test_offset_round_trip() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..SAMPLES {
        let cell = random_cell(&mut rng);
        assert_eq!(cube_to_offset(offset_to_cube(cell)), cell);
    }
}

#[test]
fn test_converted_cells_satisfy_cube_invariant() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..SAMPLES {
        let cube = offset_to_cube(random_cell(&mut rng));
        assert_eq!(cube.x + cube.y + cube.z, 0, "{}", cube);
    }
}

#[test]
fn test_distance_symmetric_and_zero_on_self() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    for _ in 0..SAMPLES {
        let a = offset_to_cube(random_cell(&mut rng));
        let b = offset_to_cube(random_cell(&mut rng));
        assert_eq!(distance(a, b), distance(b, a));
        assert_eq!(distance(a, a), 0);
    }
}

#[test]
fn test_distance_uses_true_subtraction() {
    assert_eq!(distance(CubeCoord::new(1, 0, -1), CubeCoord::new(0, 0, 0)), 1);
}

#[test]
fn test_neighbors_are_one_step_away() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    for _ in 0..SAMPLES / 10 {
        let cell = random_cell(&mut rng);
        for d in Direction::ALL {
            let cube = offset_to_cube(cell);
            assert_eq!(distance(cube, cube.neighbor(d)), 1);
            assert_eq!(cell.distance_to(cell.neighbor(d)), 1);
            assert_eq!(cell.neighbor(d).neighbor(d.opposite()), cell);
        }
    }
}

// ============================================================================
// PATH SEARCH
// ============================================================================

#[test]
fn test_open_grid_path_is_shortest() {
    let world = open_world();
    let start = OffsetCoord::new(0, 0);
    let goal = OffsetCoord::new(3, 3);

    let path = world.find_path(start, goal);
    assert_eq!(path.len() as i32, world.distance(start, goal));
    assert_eq!(path.last(), Some(&goal));
    assert!(path.iter().all(|&c| world.in_bounds(c)));
}

#[test]
fn test_every_pair_on_open_grid() {
    let world = open_world();
    let cells: Vec<_> = world.grid().bounds().cells().collect();
    for &start in &cells {
        for &goal in &cells {
            let path = world.find_path(start, goal);
            if start == goal {
                assert_eq!(path, vec![goal]);
                continue;
            }
            assert_eq!(path.len() as i32, start.distance_to(goal), "{} -> {}", start, goal);
        }
    }
}

#[test]
fn test_wall_makes_goal_unreachable() {
    let world = walled_world();
    assert!(world.find_path(OffsetCoord::new(0, 2), OffsetCoord::new(4, 2)).is_empty());
    assert!(world.find_path(OffsetCoord::new(1, 0), OffsetCoord::new(3, 4)).is_empty());
    // Same side still works
    assert_eq!(world.find_path(OffsetCoord::new(0, 0), OffsetCoord::new(1, 4)).len(), 4);
}

#[test]
fn test_goal_off_map_is_unreachable() {
    let world = open_world();
    assert!(world.find_path(OffsetCoord::new(0, 0), OffsetCoord::new(9, 9)).is_empty());
}

#[test]
fn test_start_off_map_returns_immediately() {
    let world = open_world();
    let search = world.path_finder().search(
        OffsetCoord::new(-2, 7),
        OffsetCoord::new(1, 1),
        |_| DEFAULT_STEP_COST,
    );
    assert!(search.path.is_empty());
    assert_eq!(search.expanded, 0);
}

#[test]
fn test_start_equals_goal_is_single_cell() {
    let world = open_world();
    let here = OffsetCoord::new(2, 3);
    assert_eq!(world.find_path(here, here), vec![here]);
}

#[test]
fn test_penalized_route_is_avoided() {
    // Two equal-length corridors around a hole in the middle row
    let config = MapConfig::from_json(
        r#"{
            "rows": [".....", ".   .", "....."],
            "legend": { ".": "plain" }
        }"#,
    )
    .unwrap();
    let world = World::from_config(&config).unwrap();
    let start = OffsetCoord::new(0, 1);
    let goal = OffsetCoord::new(4, 1);

    let avoid_top = |c: OffsetCoord| if c.row == 2 { 500.0 } else { 10.0 };
    let path = world.find_path_with(start, goal, avoid_top);
    assert_eq!(path.last(), Some(&goal));
    assert!(path.iter().all(|c| c.row != 2), "{:?}", path);

    let avoid_bottom = |c: OffsetCoord| if c.row == 0 { 500.0 } else { 10.0 };
    let path = world.find_path_with(start, goal, avoid_bottom);
    assert!(path.iter().all(|c| c.row != 0), "{:?}", path);
}

#[test]
fn test_terrain_costs_change_route() {
    let config = MapConfig::from_json(
        r##"{
            "rows": [".....", ".~~~.", "....."],
            "legend": { ".": "plain", "~": "swamp" },
            "costs": { "swamp": 100.0 }
        }"##,
    )
    .unwrap();
    let world = World::from_config(&config).unwrap();
    let start = OffsetCoord::new(0, 1);
    let goal = OffsetCoord::new(4, 1);

    assert_eq!(world.find_path(start, goal).len(), 4);

    let search = world.find_terrain_path(start, goal);
    let swamp = TileKind::new("swamp");
    assert!(search.path.iter().all(|&c| world.tiles().tile_at(c) != Some(&swamp)));
    assert!(search.cost.unwrap() < 100.0);
}

#[test]
fn test_custom_tile_source() {
    // Tile layer and passability supplied directly, without a map file
    let grid = GridState::new(GridBounds::new(0..4, 0..4));
    let mut tiles = TileMap::filled(4, 4, &TileKind::new("grass"));
    tiles.set(OffsetCoord::new(1, 1), TileKind::new("water"));
    let rules = Passability::blocking([TileKind::new("water")]);
    let finder = PathFinder::new(GridQuery::new(&grid, &tiles, &rules));

    let path = finder.find_path(OffsetCoord::new(0, 1), OffsetCoord::new(2, 1));
    assert!(!path.is_empty());
    assert!(!path.contains(&OffsetCoord::new(1, 1)));
}

// ============================================================================
// GRID STATE
// ============================================================================

#[test]
fn test_occupants() {
    let mut world = open_world();
    let cell = OffsetCoord::new(4, 4);
    world.place_occupant(cell, UnitId(1)).unwrap();
    assert_eq!(world.occupant(cell), Ok(Some(UnitId(1))));
    assert_eq!(world.grid().occupied(), vec![(cell, UnitId(1))]);

    let outside = OffsetCoord::new(5, 4);
    assert!(!world.in_bounds(outside));
    assert_eq!(
        world.place_occupant(outside, UnitId(2)),
        Err(GridError::OutOfBounds { coord: outside })
    );
}

#[test]
fn test_config_round_trip_through_file() {
    let dir = std::env::temp_dir().join(format!("hexpath-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("map.json");

    let config = MapConfig::default();
    config.save(&path).unwrap();
    let loaded = MapConfig::load(&path).unwrap();
    assert_eq!(loaded, config);

    std::fs::remove_dir_all(&dir).unwrap();
}
