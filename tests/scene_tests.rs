// Host-side tests for scene construction and stepping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod physics {
    include!("../src/core/physics.rs");
}
mod scene {
    include!("../src/core/scene.rs");
}

use scene::*;

const W: f32 = 640.0;
const H: f32 = 360.0;
const SEED: u64 = 42;
const STEP: f32 = 0.012;

#[test]
fn construction_is_deterministic_for_a_seed() {
    let a = SceneState::new(SceneKind::Aggregation, W, H, SEED);
    let b = SceneState::new(SceneKind::Aggregation, W, H, SEED);
    let (SceneData::Aggregation { particles: pa, .. }, SceneData::Aggregation { particles: pb, .. }) =
        (&a.data, &b.data)
    else {
        panic!("wrong data variant");
    };
    assert_eq!(pa.len(), pb.len());
    for (x, y) in pa.iter().zip(pb.iter()) {
        assert_eq!(x.pos, y.pos);
        assert_eq!(x.vel, y.vel);
        assert_eq!(x.cluster, y.cluster);
    }
}

#[test]
fn kinds_sharing_a_seed_get_distinct_streams() {
    let agg = SceneState::new(SceneKind::Aggregation, W, H, SEED);
    let field = SceneState::new(SceneKind::MoleculeField, W, H, SEED);
    let SceneData::Aggregation { particles, .. } = &agg.data else {
        panic!("wrong data variant");
    };
    let SceneData::MoleculeField { molecules } = &field.data else {
        panic!("wrong data variant");
    };
    assert_ne!(particles[0].pos, molecules[0].pos);
}

#[test]
fn population_counts_match_layout() {
    let agg = SceneState::new(SceneKind::Aggregation, W, H, SEED);
    if let SceneData::Aggregation { particles, centers } = &agg.data {
        assert_eq!(particles.len(), AGG_PARTICLES);
        assert_eq!(centers.len(), AGG_CLUSTERS);
        assert!(particles.iter().all(|p| p.cluster < centers.len()));
    } else {
        panic!("wrong data variant");
    }

    let scan = SceneState::new(SceneKind::ToxicityScan, W, H, SEED);
    if let SceneData::ToxicityScan { dots } = &scan.data {
        assert_eq!(dots.len(), SCAN_PARTICLES);
    } else {
        panic!("wrong data variant");
    }

    let radar = SceneState::new(SceneKind::RiskRadar, W, H, SEED);
    if let SceneData::RiskRadar { points } = &radar.data {
        assert_eq!(points.len(), RADAR_POINTS);
        assert!(points.iter().all(|p| !p.detected && p.alpha == 0.0));
    } else {
        panic!("wrong data variant");
    }

    let mesh = SceneState::new(SceneKind::NeuralMesh, W, H, SEED);
    if let SceneData::NeuralMesh { nodes, signals, .. } = &mesh.data {
        let total: usize = MESH_LAYERS.iter().map(|(c, _)| c).sum();
        assert_eq!(nodes.len(), total);
        assert!(signals.is_empty());
    } else {
        panic!("wrong data variant");
    }

    let input = SceneState::new(SceneKind::NanoInput, W, H, SEED);
    if let SceneData::NanoInput { orbs } = &input.data {
        assert_eq!(orbs.len(), INPUT_ORBS);
    } else {
        panic!("wrong data variant");
    }
}

#[test]
fn rain_column_count_tracks_width() {
    let narrow = SceneState::new(SceneKind::ReportRain, 200.0, H, SEED);
    let wide = SceneState::new(SceneKind::ReportRain, 1200.0, H, SEED);
    let (SceneData::ReportRain { columns: nc }, SceneData::ReportRain { columns: wc }) =
        (&narrow.data, &wide.data)
    else {
        panic!("wrong data variant");
    };
    assert_eq!(nc.len(), (200.0 / (RAIN_FONT_PX * RAIN_COL_SPACING)) as usize);
    assert_eq!(wc.len(), (1200.0 / (RAIN_FONT_PX * RAIN_COL_SPACING)) as usize);
    assert!(wc.len() > nc.len());
}

#[test]
fn width_change_marks_state_stale() {
    let state = SceneState::new(SceneKind::Aggregation, W, H, SEED);
    assert_eq!(state.built_width(), W);
    assert!(!state.needs_rebuild(W));
    assert!(state.needs_rebuild(W + 1.0));
}

#[test]
fn scan_dots_wrap_and_reroll() {
    let mut state = SceneState::new(SceneKind::ToxicityScan, W, H, SEED);
    // Dots move at most 0.005 per frame from y <= 1.0; after enough frames
    // every dot has wrapped at least once and sits inside [-0.1, 1.0].
    for i in 0..2_000 {
        state.advance(W, H, i as f32 * STEP, None);
    }
    let SceneData::ToxicityScan { dots } = &state.data else {
        panic!("wrong data variant");
    };
    for d in dots {
        assert!(d.y >= -0.1 && d.y <= 1.0 + 0.005);
        assert!((0.0..=1.0).contains(&d.x));
    }
}

#[test]
fn aggregation_particles_stay_in_bounds() {
    let mut state = SceneState::new(SceneKind::Aggregation, W, H, SEED);
    for i in 0..1_000 {
        state.advance(W, H, i as f32 * STEP, None);
    }
    let SceneData::Aggregation { particles, centers } = &state.data else {
        panic!("wrong data variant");
    };
    for p in particles {
        assert!(p.pos.x >= 0.0 && p.pos.x <= W);
        assert!(p.pos.y >= 0.0 && p.pos.y <= H);
    }
    for c in centers {
        assert!(c.pos.x >= W * 0.1 && c.pos.x <= W * 0.9);
        assert!(c.pos.y >= H * 0.1 && c.pos.y <= H * 0.9);
    }
}

#[test]
fn radar_detection_fires_once_per_pass() {
    let mut state = SceneState::new(SceneKind::RiskRadar, W, H, SEED);
    let frames_per_rev = (std::f32::consts::TAU / (RADAR_SWEEP_RATE * STEP)).ceil() as usize;

    // First revolution: every point gets detected exactly once, i.e. after
    // its alpha is pinned to ~1 it only decays until the next pass.
    let mut detections = vec![0u32; RADAR_POINTS];
    let mut last_alpha = vec![0.0f32; RADAR_POINTS];
    for frame in 0..frames_per_rev * 2 {
        let t = frame as f32 * STEP;
        state.advance(W, H, t, None);
        let SceneData::RiskRadar { points } = &state.data else {
            panic!("wrong data variant");
        };
        for (i, p) in points.iter().enumerate() {
            if p.detected && p.alpha > last_alpha[i] {
                detections[i] += 1;
            }
            last_alpha[i] = p.alpha;
        }
    }
    for (i, &n) in detections.iter().enumerate() {
        assert!(n >= 1, "point {i} never detected");
        assert!(n <= 2, "point {i} re-triggered within a pass ({n} rises over 2 revolutions)");
    }
}

#[test]
fn radar_alpha_decays_to_floor_not_zero() {
    let mut state = SceneState::new(SceneKind::RiskRadar, W, H, SEED);
    // Enough frames for faded_for * 0.5 to pass 0.9 on early detections.
    for frame in 0..300 {
        state.advance(W, H, frame as f32 * STEP, None);
    }
    let SceneData::RiskRadar { points } = &state.data else {
        panic!("wrong data variant");
    };
    for p in points.iter().filter(|p| p.detected) {
        assert!(p.alpha >= RADAR_ALPHA_FLOOR);
        assert!(p.alpha <= 1.0);
    }
}

#[test]
fn mesh_signals_spawn_between_adjacent_layers_and_expire() {
    let mut state = SceneState::new(SceneKind::NeuralMesh, W, H, SEED);
    let mut seen_signal = false;
    for frame in 0..2_000 {
        state.advance(W, H, frame as f32 * STEP, None);
        let SceneData::NeuralMesh { nodes, signals, .. } = &state.data else {
            panic!("wrong data variant");
        };
        for s in signals {
            seen_signal = true;
            assert!(s.progress <= 1.0);
            assert_eq!(nodes[s.to].layer, nodes[s.from].layer + 1);
        }
    }
    assert!(seen_signal, "spawner never produced a signal");
}

#[test]
fn molecule_field_repels_from_pointer() {
    let mut state = SceneState::new(SceneKind::MoleculeField, W, H, SEED);
    let pointer = glam::Vec2::new(W / 2.0, H / 2.0);
    for i in 0..600 {
        state.advance(W, H, i as f32 * STEP, Some(pointer));
    }
    let SceneData::MoleculeField { molecules } = &state.data else {
        panic!("wrong data variant");
    };
    // Sustained repulsion empties the immediate neighborhood.
    let crowded = molecules
        .iter()
        .filter(|m| m.pos.distance(pointer) < 60.0)
        .count();
    assert!(crowded <= 2, "{crowded} molecules still crowd the pointer");
}

#[test]
fn mesh_node_layout_is_centered() {
    let node = MeshNode {
        layer: 0,
        index: 1,
        layer_size: 3,
        x_frac: 0.12,
        phase: 0.0,
    };
    let p = node.pos(W, H);
    assert_eq!(p.x, 0.12 * W);
    assert_eq!(p.y, H / 2.0); // middle of an odd-sized layer sits on the centerline
}
