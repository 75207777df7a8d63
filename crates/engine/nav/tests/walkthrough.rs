//! End-to-end walkthrough: spawn in a room, move under input, transition
//! rooms, and keep the walker consistent with the active region set.

use glam::Vec2;
use nav::{MoveInput, Room, Walker};
use walkmap::WalkPoint;

fn hold_backward() -> MoveInput {
    MoveInput {
        backward: true,
        ..Default::default()
    }
}

#[test]
fn walk_the_exhibit_entry_aisle() {
    let room = Room::exhibit();
    let mut walker = Walker::new(room.spawn);

    // The entry aisle runs straight down from the spawn point
    for _ in 0..50 {
        assert!(walker.step(&hold_backward(), &room.regions));
    }
    let pos = walker.position();
    assert_eq!(pos.x, 0.0);
    assert!((pos.y + 20.0).abs() < 1e-4);
    assert!(room.is_walkable(WalkPoint::from_vec2(pos)));
}

#[test]
fn blocked_at_the_map_edge() {
    let room = Room::exhibit();
    let mut walker = Walker::new(room.spawn);

    // Walking forward from spawn immediately leaves every region: the aisle
    // corridor only extends 2.5 units past its endpoint
    let mut blocked_at = None;
    for tick in 0..20 {
        let forward = MoveInput {
            forward: true,
            ..Default::default()
        };
        if !walker.step(&forward, &room.regions) {
            blocked_at = Some(tick);
            break;
        }
    }
    let blocked_at = blocked_at.expect("walker escaped the map");
    // 6 steps of 0.4 reach y = 2.4; the 7th would pass the 2.5 limit
    assert_eq!(blocked_at, 6);
    assert!(room.is_walkable(WalkPoint::from_vec2(walker.position())));
}

#[test]
fn room_transition_replaces_geometry_wholesale() {
    let hub = Room::hub();
    let exhibit = Room::exhibit();

    let mut walker = Walker::new(hub.spawn);
    assert!(hub.is_walkable(WalkPoint::from_vec2(walker.position())));

    // A hub position that is not walkable in the exhibit room
    walker.set_target(Vec2::new(-20.0, -8.0));
    for _ in 0..200 {
        if walker.target().is_none() {
            break;
        }
        walker.step(&MoveInput::idle(), &hub.regions);
    }

    // Entering the exhibit room swaps the region set and respawns the walker
    walker.place(exhibit.spawn);
    assert_eq!(walker.position(), exhibit.spawn);
    assert_eq!(walker.target(), None);
    assert!(exhibit.is_walkable(WalkPoint::from_vec2(walker.position())));
}

#[test]
fn load_room_file_and_walk_it() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/side_room.json");
    let room = Room::load(&path).unwrap();
    assert_eq!(room.name, "side_room");

    let mut walker = Walker::new(room.spawn);
    assert!(room.is_walkable(WalkPoint::from_vec2(walker.position())));

    // The connecting corridor leads into the circle room
    walker.set_target(Vec2::new(50.0, -8.0));
    for _ in 0..500 {
        if walker.target().is_none() {
            break;
        }
        walker.step(&MoveInput::idle(), &room.regions);
    }
    assert_eq!(walker.target(), None);
    assert_eq!(walker.position(), Vec2::new(50.0, -8.0));
}

#[test]
fn click_target_walk_in_the_hub() {
    let room = Room::hub();
    let mut walker = Walker::new(room.spawn);

    // Walk along the first corridor toward its far end
    walker.set_target(Vec2::new(10.0, -27.0));
    let mut arrived = false;
    for _ in 0..200 {
        walker.step(&MoveInput::idle(), &room.regions);
        if walker.target().is_none() {
            arrived = true;
            break;
        }
    }
    assert!(arrived);
    assert_eq!(walker.position(), Vec2::new(10.0, -27.0));
}
