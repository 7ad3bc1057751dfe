use glam::Vec2;
use rand::prelude::*;
use rand::rngs::StdRng;

use super::physics;

// ---------- Scene tuning ----------

/// Aggregation: particle clustering around drifting centers.
pub const AGG_PARTICLES: usize = 52;
pub const AGG_CLUSTERS: usize = 3;
pub const AGG_ATTRACTION_K: f32 = 0.000_15;
pub const AGG_DAMPING: f32 = 0.97;
pub const AGG_BOND_DIST: f32 = 55.0;
pub const AGG_BOND_MAX_ALPHA: f32 = 0.65;

/// Toxicity scan: normalized-space particles falling through a scan line.
pub const SCAN_PARTICLES: usize = 40;
pub const SCAN_TOXIC_P: f32 = 0.3;

/// Risk radar.
pub const RADAR_POINTS: usize = 18;
pub const RADAR_SWEEP_RATE: f32 = 0.55;
pub const RADAR_DETECT_TOLERANCE: f32 = 0.18;
pub const RADAR_FADE_PER_FRAME: f32 = 0.007;
pub const RADAR_FADE_SCALE: f32 = 0.5;
pub const RADAR_ALPHA_FLOOR: f32 = 0.1;
pub const RADAR_HIGH_RISK_P: f32 = 0.33;

/// Report rain (falling terminology columns).
pub const RAIN_FONT_PX: f32 = 11.0;
pub const RAIN_COL_SPACING: f32 = 4.5;
pub const RAIN_HIGHLIGHT_P: f32 = 0.18;
pub const RAIN_WRAP_MARGIN: f32 = 80.0;
pub const RAIN_RESET_SPAN: f32 = 18.0;

/// Neural mesh.
pub const MESH_LAYERS: [(usize, f32); 4] = [(3, 0.12), (5, 0.37), (5, 0.63), (3, 0.88)];
pub const MESH_SPAWN_GAP: f32 = 0.28;
pub const MESH_NEGATIVE_P: f32 = 0.15;

/// Parameter input orbs.
pub const INPUT_ORBS: usize = 7;

/// Full-viewport background molecule field.
pub const FIELD_PARTICLES: usize = 55;
pub const FIELD_REPEL_RADIUS: f32 = 180.0;
pub const FIELD_REPEL_STRENGTH: f32 = 1.5;
pub const FIELD_LINK_DIST: f32 = 130.0;
pub const FIELD_LINK_MAX_ALPHA: f32 = 0.5;

/// Vocabulary for the report-rain columns.
pub const RAIN_TERMS: &[&str] = &[
    "TOXIC",
    "NON-TOXIC",
    "0.952",
    "ZnO",
    "Au",
    "TiO\u{2082}",
    "Ag",
    "ROS",
    "IC\u{2085}\u{2080}",
    "EC\u{2085}\u{2080}",
    "0.88",
    "LD\u{2085}\u{2080}",
    "CdSe",
    "pH",
    "\u{3b6}=",
    "95.2%",
    "HIGH",
    "LOW",
    "SAFE",
    "NP",
];

/// Element symbols strung along the helix rungs.
pub const HELIX_LABELS: &[&str] = &[
    "Au",
    "TiO\u{2082}",
    "ZnO",
    "Ag",
    "Fe\u{2083}O\u{2084}",
    "SiO\u{2082}",
    "C\u{2086}\u{2080}",
    "CdSe",
    "Pt",
    "CuO",
];

const INPUT_LABELS: [&str; INPUT_ORBS] = ["Size", "\u{3b6}-pot", "Surface", "Dose", "Shape", "Coat", "pH"];
const INPUT_VALUES: [&str; INPUT_ORBS] = [
    "12nm",
    "-18mV",
    "48m\u{b2}/g",
    "50\u{3bc}g",
    "Sphere",
    "PEG",
    "7.4",
];

// ---------- Types ----------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKind {
    Aggregation,
    ToxicityScan,
    Membrane,
    RiskRadar,
    DataHelix,
    ReportRain,
    NeuralMesh,
    NanoInput,
    ExpertFlow,
    MoleculeField,
}

/// Palette slot for per-orb tinting; the renderer maps these to brand colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Accent,
    Blue,
    Accent2,
}

#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub phase: f32,
    pub cluster: usize,
}

#[derive(Debug, Clone)]
pub struct ClusterCenter {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// Falling dot in normalized [0,1] space, re-rolled on wrap.
#[derive(Debug, Clone)]
pub struct ScanDot {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub toxic: bool,
}

#[derive(Debug, Clone)]
pub struct RadarPoint {
    pub angle: f32,
    pub dist: f32,
    pub high_risk: bool,
    pub detected: bool,
    pub alpha: f32,
    pub faded_for: f32,
    in_beam: bool,
}

#[derive(Debug, Clone)]
pub struct RainColumn {
    pub fall: f32,
    pub speed: f32,
    pub highlight: bool,
    pub glyph: usize,
    pub ghost_glyph: usize,
}

#[derive(Debug, Clone)]
pub struct MeshNode {
    pub layer: usize,
    pub index: usize,
    pub layer_size: usize,
    pub x_frac: f32,
    pub phase: f32,
}

impl MeshNode {
    /// Layout position in canvas space; layers spread across x, nodes
    /// centered vertically within each layer.
    pub fn pos(&self, w: f32, h: f32) -> Vec2 {
        let x = self.x_frac * w;
        let y = h / 2.0
            + (self.index as f32 - (self.layer_size as f32 - 1.0) / 2.0)
                * (h / (self.layer_size as f32 + 0.9));
        Vec2::new(x, y)
    }
}

/// Pulse travelling between two mesh nodes (global indices into `nodes`).
#[derive(Debug, Clone)]
pub struct SignalPulse {
    pub from: usize,
    pub to: usize,
    pub progress: f32,
    pub speed: f32,
    pub positive: bool,
}

#[derive(Debug, Clone)]
pub struct InputOrb {
    pub x: f32,
    pub base_y: f32,
    pub radius: f32,
    pub phase: f32,
    pub label: &'static str,
    pub value: &'static str,
    pub tint: Tint,
}

#[derive(Debug, Clone)]
pub struct Molecule {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

#[derive(Debug, Clone)]
pub enum SceneData {
    Aggregation {
        particles: Vec<Particle>,
        centers: Vec<ClusterCenter>,
    },
    ToxicityScan {
        dots: Vec<ScanDot>,
    },
    RiskRadar {
        points: Vec<RadarPoint>,
    },
    ReportRain {
        columns: Vec<RainColumn>,
    },
    NeuralMesh {
        nodes: Vec<MeshNode>,
        signals: Vec<SignalPulse>,
        last_spawn: f32,
    },
    NanoInput {
        orbs: Vec<InputOrb>,
    },
    MoleculeField {
        molecules: Vec<Molecule>,
    },
    /// Membrane, DataHelix and ExpertFlow are pure functions of `t`; they
    /// still go through `SceneState` so width invalidation is uniform.
    Static,
}

/// Per-canvas simulation state, rebuilt by the scheduler whenever the
/// logical width changes.
#[derive(Debug, Clone)]
pub struct SceneState {
    pub kind: SceneKind,
    built_width: f32,
    rng: StdRng,
    pub data: SceneData,
}

pub fn sweep_angle(t: f32) -> f32 {
    (t * RADAR_SWEEP_RATE) % std::f32::consts::TAU
}

impl SceneState {
    pub fn new(kind: SceneKind, w: f32, h: f32, seed: u64) -> Self {
        // Derive a per-kind stream so two canvases sharing a page seed
        // still differ.
        let mixed = seed ^ (kind as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        let mut rng = StdRng::seed_from_u64(mixed);
        let data = build_data(kind, w, h, &mut rng);
        Self {
            kind,
            built_width: w,
            rng,
            data,
        }
    }

    #[inline]
    pub fn built_width(&self) -> f32 {
        self.built_width
    }

    #[inline]
    pub fn needs_rebuild(&self, w: f32) -> bool {
        self.built_width != w
    }

    /// One simulation step. `pointer` only affects the molecule field.
    pub fn advance(&mut self, w: f32, h: f32, t: f32, pointer: Option<Vec2>) {
        let rng = &mut self.rng;
        match &mut self.data {
            SceneData::Aggregation { particles, centers } => {
                let cmin = Vec2::new(w * 0.1, h * 0.1);
                let cmax = Vec2::new(w * 0.9, h * 0.9);
                for c in centers.iter_mut() {
                    physics::apply_velocity(&mut c.pos, c.vel);
                    physics::bounce_at_bounds(&mut c.pos, &mut c.vel, cmin, cmax);
                }
                for p in particles.iter_mut() {
                    let target = centers[p.cluster].pos;
                    physics::damped_attraction(
                        p.pos,
                        target,
                        &mut p.vel,
                        AGG_ATTRACTION_K,
                        AGG_DAMPING,
                    );
                    physics::apply_velocity(&mut p.pos, p.vel);
                    physics::bounce_at_bounds(&mut p.pos, &mut p.vel, Vec2::ZERO, Vec2::new(w, h));
                }
            }
            SceneData::ToxicityScan { dots } => {
                for d in dots.iter_mut() {
                    d.y += d.speed;
                    if d.y > 1.0 {
                        d.y = -0.1;
                        d.x = rng.gen();
                        d.toxic = rng.gen::<f32>() < SCAN_TOXIC_P;
                    }
                }
            }
            SceneData::RiskRadar { points } => {
                let sweep = sweep_angle(t);
                for p in points.iter_mut() {
                    let ad = (sweep - p.angle).rem_euclid(std::f32::consts::TAU);
                    if ad < RADAR_DETECT_TOLERANCE {
                        // Only the beam's leading edge triggers; a point
                        // stays lit and fading until the next pass.
                        if !p.in_beam {
                            p.detected = true;
                            p.alpha = 1.0;
                            p.faded_for = 0.0;
                            p.in_beam = true;
                        }
                    } else {
                        p.in_beam = false;
                    }
                    if p.detected {
                        p.faded_for += RADAR_FADE_PER_FRAME;
                        p.alpha = (1.0 - p.faded_for * RADAR_FADE_SCALE).max(RADAR_ALPHA_FLOOR);
                    }
                }
            }
            SceneData::ReportRain { columns } => {
                for c in columns.iter_mut() {
                    c.fall += c.speed;
                    if c.fall * RAIN_FONT_PX > h + RAIN_WRAP_MARGIN {
                        c.fall = -rng.gen::<f32>() * RAIN_RESET_SPAN;
                        c.highlight = rng.gen::<f32>() < RAIN_HIGHLIGHT_P;
                    }
                    c.glyph = rng.gen_range(0..RAIN_TERMS.len());
                    c.ghost_glyph = rng.gen_range(0..RAIN_TERMS.len());
                }
            }
            SceneData::NeuralMesh {
                signals,
                last_spawn,
                ..
            } => {
                if t - *last_spawn > MESH_SPAWN_GAP {
                    let from_layer = rng.gen_range(0..MESH_LAYERS.len() - 1);
                    let (fs, fl) = layer_range(from_layer);
                    let (ts, tl) = layer_range(from_layer + 1);
                    signals.push(SignalPulse {
                        from: fs + rng.gen_range(0..fl),
                        to: ts + rng.gen_range(0..tl),
                        progress: 0.0,
                        speed: 0.013 + rng.gen::<f32>() * 0.01,
                        positive: rng.gen::<f32>() >= MESH_NEGATIVE_P,
                    });
                    *last_spawn = t;
                }
                for s in signals.iter_mut() {
                    s.progress += s.speed;
                }
                signals.retain(|s| s.progress <= 1.0);
            }
            SceneData::MoleculeField { molecules } => {
                for m in molecules.iter_mut() {
                    physics::apply_velocity(&mut m.pos, m.vel);
                    physics::bounce_at_bounds(&mut m.pos, &mut m.vel, Vec2::ZERO, Vec2::new(w, h));
                    if let Some(src) = pointer {
                        physics::repel_from(&mut m.pos, src, FIELD_REPEL_RADIUS, FIELD_REPEL_STRENGTH);
                    }
                }
            }
            // Orbs bob as a function of t at render time.
            SceneData::NanoInput { .. } | SceneData::Static => {}
        }
    }
}

/// Global index range (start, len) of a mesh layer.
pub fn layer_range(layer: usize) -> (usize, usize) {
    let start = MESH_LAYERS[..layer].iter().map(|(c, _)| c).sum();
    (start, MESH_LAYERS[layer].0)
}

fn build_data(kind: SceneKind, w: f32, h: f32, rng: &mut StdRng) -> SceneData {
    match kind {
        SceneKind::Aggregation => {
            let particles = (0..AGG_PARTICLES)
                .map(|_| Particle {
                    pos: Vec2::new(rng.gen::<f32>() * w, rng.gen::<f32>() * h),
                    vel: Vec2::new(
                        (rng.gen::<f32>() - 0.5) * 0.55,
                        (rng.gen::<f32>() - 0.5) * 0.55,
                    ),
                    radius: rng.gen::<f32>() * 4.0 + 2.5,
                    phase: rng.gen::<f32>() * std::f32::consts::TAU,
                    cluster: rng.gen_range(0..AGG_CLUSTERS),
                })
                .collect();
            let centers = vec![
                ClusterCenter {
                    pos: Vec2::new(w * 0.26, h * 0.38),
                    vel: Vec2::new(0.16, 0.12),
                },
                ClusterCenter {
                    pos: Vec2::new(w * 0.70, h * 0.58),
                    vel: Vec2::new(-0.12, 0.17),
                },
                ClusterCenter {
                    pos: Vec2::new(w * 0.50, h * 0.22),
                    vel: Vec2::new(0.14, -0.13),
                },
            ];
            SceneData::Aggregation { particles, centers }
        }
        SceneKind::ToxicityScan => {
            let dots = (0..SCAN_PARTICLES)
                .map(|_| ScanDot {
                    x: rng.gen(),
                    y: rng.gen(),
                    speed: 0.002 + rng.gen::<f32>() * 0.003,
                    toxic: rng.gen::<f32>() < SCAN_TOXIC_P,
                })
                .collect();
            SceneData::ToxicityScan { dots }
        }
        SceneKind::RiskRadar => {
            let points = (0..RADAR_POINTS)
                .map(|_| RadarPoint {
                    angle: rng.gen::<f32>() * std::f32::consts::TAU,
                    dist: 0.25 + rng.gen::<f32>() * 0.72,
                    high_risk: rng.gen::<f32>() < RADAR_HIGH_RISK_P,
                    detected: false,
                    alpha: 0.0,
                    faded_for: 0.0,
                    in_beam: false,
                })
                .collect();
            SceneData::RiskRadar { points }
        }
        SceneKind::ReportRain => {
            let cols = ((w / (RAIN_FONT_PX * RAIN_COL_SPACING)).floor() as usize).max(1);
            let columns = (0..cols)
                .map(|_| RainColumn {
                    fall: rng.gen::<f32>() * h / RAIN_FONT_PX,
                    speed: 0.3 + rng.gen::<f32>() * 0.8,
                    highlight: rng.gen::<f32>() < RAIN_HIGHLIGHT_P,
                    glyph: rng.gen_range(0..RAIN_TERMS.len()),
                    ghost_glyph: rng.gen_range(0..RAIN_TERMS.len()),
                })
                .collect();
            SceneData::ReportRain { columns }
        }
        SceneKind::NeuralMesh => {
            let mut nodes = Vec::new();
            for (layer, &(count, x_frac)) in MESH_LAYERS.iter().enumerate() {
                for index in 0..count {
                    nodes.push(MeshNode {
                        layer,
                        index,
                        layer_size: count,
                        x_frac,
                        phase: rng.gen::<f32>() * std::f32::consts::TAU,
                    });
                }
            }
            SceneData::NeuralMesh {
                nodes,
                signals: Vec::new(),
                last_spawn: 0.0,
            }
        }
        SceneKind::NanoInput => {
            let tints = [
                Tint::Accent,
                Tint::Blue,
                Tint::Accent,
                Tint::Accent2,
                Tint::Blue,
                Tint::Accent,
                Tint::Accent2,
            ];
            let orbs = (0..INPUT_ORBS)
                .map(|i| InputOrb {
                    x: w * (0.1 + (i as f32 / INPUT_ORBS as f32) * 0.8),
                    base_y: h * 0.48,
                    radius: 10.0 + (i % 3) as f32 * 8.0,
                    phase: (i as f32 / INPUT_ORBS as f32) * std::f32::consts::TAU,
                    label: INPUT_LABELS[i],
                    value: INPUT_VALUES[i],
                    tint: tints[i],
                })
                .collect();
            SceneData::NanoInput { orbs }
        }
        SceneKind::MoleculeField => {
            let molecules = (0..FIELD_PARTICLES)
                .map(|_| Molecule {
                    pos: Vec2::new(rng.gen::<f32>() * w, rng.gen::<f32>() * h),
                    vel: Vec2::new(
                        (rng.gen::<f32>() - 0.5) * 0.45,
                        (rng.gen::<f32>() - 0.5) * 0.45,
                    ),
                    size: rng.gen::<f32>() * 1.8 + 0.6,
                })
                .collect();
            SceneData::MoleculeField { molecules }
        }
        SceneKind::Membrane | SceneKind::DataHelix | SceneKind::ExpertFlow => SceneData::Static,
    }
}
