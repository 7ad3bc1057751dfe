// Host-side tests for the shared particle physics helpers.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod physics {
    include!("../src/core/physics.rs");
}

use glam::Vec2;
use physics::*;

#[test]
fn bond_alpha_endpoints() {
    // Max opacity at zero distance, zero at and beyond the threshold.
    assert_eq!(bond_alpha(0.0, 55.0, 0.65), 0.65);
    assert_eq!(bond_alpha(55.0, 55.0, 0.65), 0.0);
    assert_eq!(bond_alpha(80.0, 55.0, 0.65), 0.0);
}

#[test]
fn bond_alpha_is_monotonically_decreasing() {
    let mut prev = bond_alpha(0.0, 55.0, 0.65);
    let mut d = 1.0;
    while d < 55.0 {
        let a = bond_alpha(d, 55.0, 0.65);
        assert!(a < prev, "alpha must fall with distance (d={d})");
        assert!(a >= 0.0);
        prev = a;
        d += 1.0;
    }
}

#[test]
fn bounce_reflects_the_crossing_component_only() {
    let mut pos = Vec2::new(-3.0, 50.0);
    let mut vel = Vec2::new(-2.0, 1.5);
    bounce_at_bounds(&mut pos, &mut vel, Vec2::ZERO, Vec2::new(100.0, 100.0));
    assert_eq!(pos, Vec2::new(0.0, 50.0));
    assert_eq!(vel, Vec2::new(2.0, 1.5));

    let mut pos = Vec2::new(50.0, 120.0);
    let mut vel = Vec2::new(0.3, 2.0);
    bounce_at_bounds(&mut pos, &mut vel, Vec2::ZERO, Vec2::new(100.0, 100.0));
    assert_eq!(pos, Vec2::new(50.0, 100.0));
    assert_eq!(vel, Vec2::new(0.3, -2.0));
}

#[test]
fn bounce_leaves_interior_particles_alone() {
    let mut pos = Vec2::new(40.0, 60.0);
    let mut vel = Vec2::new(-1.0, 1.0);
    bounce_at_bounds(&mut pos, &mut vel, Vec2::ZERO, Vec2::new(100.0, 100.0));
    assert_eq!(pos, Vec2::new(40.0, 60.0));
    assert_eq!(vel, Vec2::new(-1.0, 1.0));
}

#[test]
fn damped_attraction_converges_toward_target() {
    let target = Vec2::new(100.0, 100.0);
    let mut pos = Vec2::new(10.0, 20.0);
    let mut vel = Vec2::ZERO;
    let mut last_dist = pos.distance(target);
    for _ in 0..5_000 {
        damped_attraction(pos, target, &mut vel, 0.000_15, 0.97);
        pos += vel;
    }
    let settled = pos.distance(target);
    assert!(settled < last_dist, "particle should approach its center");
    // Damping below 1 keeps the orbit bounded.
    last_dist = settled;
    for _ in 0..5_000 {
        damped_attraction(pos, target, &mut vel, 0.000_15, 0.97);
        pos += vel;
    }
    assert!(pos.distance(target) <= last_dist + 1.0);
}

#[test]
fn repel_pushes_directly_away_within_radius() {
    let source = Vec2::new(0.0, 0.0);
    let mut pos = Vec2::new(30.0, 40.0); // distance 50
    let before = pos.distance(source);
    repel_from(&mut pos, source, 180.0, 1.5);
    let after = pos.distance(source);
    assert!(after > before);
    // Still on the same ray from the source.
    assert!((pos.y / pos.x - 40.0 / 30.0).abs() < 1e-5);
}

#[test]
fn repel_ignores_points_outside_radius_or_at_source() {
    let source = Vec2::new(0.0, 0.0);
    let mut far = Vec2::new(200.0, 0.0);
    repel_from(&mut far, source, 180.0, 1.5);
    assert_eq!(far, Vec2::new(200.0, 0.0));

    // Coincident point has no defined direction; it must not become NaN.
    let mut here = Vec2::ZERO;
    repel_from(&mut here, source, 180.0, 1.5);
    assert_eq!(here, Vec2::ZERO);
}

#[test]
fn repel_force_decays_linearly_to_the_edge() {
    let source = Vec2::ZERO;
    let mut near = Vec2::new(10.0, 0.0);
    let mut mid = Vec2::new(90.0, 0.0);
    repel_from(&mut near, source, 180.0, 1.5);
    repel_from(&mut mid, source, 180.0, 1.5);
    let near_push = near.x - 10.0;
    let mid_push = mid.x - 90.0;
    assert!(near_push > mid_push);
    assert!((near_push - (180.0 - 10.0) / 180.0 * 1.5).abs() < 1e-5);
}
