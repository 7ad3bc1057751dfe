// Host-side tests for the frame-gating clock.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod clock {
    include!("../src/core/clock.rs");
}

use clock::FrameClock;

const STEP: f64 = 0.012;

#[test]
fn hidden_clock_does_not_advance() {
    let mut clock = FrameClock::new(STEP);
    clock.set_size(640.0, 480.0);
    assert_eq!(clock.tick(), None);
    assert_eq!(clock.elapsed(), 0.0);
}

#[test]
fn visible_clock_advances_one_step_per_tick() {
    let mut clock = FrameClock::new(STEP);
    clock.set_size(640.0, 480.0);
    clock.set_visible(true);
    for i in 1..=5 {
        let t = clock.tick().expect("visible clock should tick");
        assert!((t - STEP * i as f64).abs() < 1e-12);
    }
}

#[test]
fn resume_after_long_hide_advances_exactly_one_step() {
    let mut clock = FrameClock::new(STEP);
    clock.set_size(640.0, 480.0);
    clock.set_visible(true);
    for _ in 0..10 {
        clock.tick();
    }
    let frozen = clock.elapsed();

    // Scrolled off-screen: hundreds of skipped frames change nothing.
    clock.set_visible(false);
    for _ in 0..500 {
        assert_eq!(clock.tick(), None);
    }
    assert_eq!(clock.elapsed(), frozen);

    // Scrolled back: no catch-up jump, just the next step.
    clock.set_visible(true);
    let resumed = clock.tick().unwrap();
    assert!((resumed - frozen - STEP).abs() < 1e-12);
}

#[test]
fn zero_or_negative_area_freezes_time() {
    let mut clock = FrameClock::new(STEP);
    clock.set_visible(true);
    clock.set_size(640.0, 0.0);
    assert_eq!(clock.tick(), None);
    clock.set_size(0.0, 480.0);
    assert_eq!(clock.tick(), None);
    clock.set_size(640.0, 480.0);
    assert!(clock.tick().is_some());
}

#[test]
fn resize_does_not_reset_elapsed_time() {
    let mut clock = FrameClock::new(STEP);
    clock.set_size(640.0, 480.0);
    clock.set_visible(true);
    for _ in 0..20 {
        clock.tick();
    }
    let before = clock.elapsed();
    clock.set_size(320.0, 480.0);
    assert_eq!(clock.elapsed(), before);
    let after = clock.tick().unwrap();
    assert!((after - before - STEP).abs() < 1e-12);
}
