use crate::constants::*;
use crate::core::physics;
use crate::core::scene::{
    ClusterCenter, InputOrb, MeshNode, Molecule, Particle, RadarPoint, RainColumn, ScanDot,
    SceneData, SceneKind, SceneState, SignalPulse, Tint, AGG_BOND_DIST, AGG_BOND_MAX_ALPHA,
    FIELD_LINK_DIST, FIELD_LINK_MAX_ALPHA, HELIX_LABELS, RAIN_FONT_PX, RAIN_TERMS,
};
use std::f64::consts::{PI, TAU};
use web_sys as web;

type Ctx = web::CanvasRenderingContext2d;

#[inline]
fn rgba(rgb: &str, a: f64) -> String {
    format!("rgba({rgb},{a})")
}

fn tint_rgb(tint: Tint) -> &'static str {
    match tint {
        Tint::Accent => C_ACCENT,
        Tint::Blue => C_BLUE,
        Tint::Accent2 => C_ACCENT2,
    }
}

fn fill_circle(ctx: &Ctx, x: f64, y: f64, r: f64, style: &str) {
    ctx.begin_path();
    _ = ctx.arc(x, y, r, 0.0, TAU);
    ctx.set_fill_style_str(style);
    ctx.fill();
}

/// Radial glow centered on (x, y), bright at the core and transparent at
/// `r`. Gradient construction can fail on a degenerate context; skip then.
fn fill_glow(ctx: &Ctx, x: f64, y: f64, r: f64, rgb: &str, core_a: f64, mid: Option<(f64, f64)>) {
    let Ok(g) = ctx.create_radial_gradient(x, y, 0.0, x, y, r) else {
        return;
    };
    _ = g.add_color_stop(0.0, &rgba(rgb, core_a));
    if let Some((stop, a)) = mid {
        _ = g.add_color_stop(stop as f32, &rgba(rgb, a));
    }
    _ = g.add_color_stop(1.0, &rgba(rgb, 0.0));
    ctx.begin_path();
    _ = ctx.arc(x, y, r, 0.0, TAU);
    ctx.set_fill_style_canvas_gradient(&g);
    ctx.fill();
}

fn stroke_line(ctx: &Ctx, x1: f64, y1: f64, x2: f64, y2: f64, style: &str, width: f64) {
    ctx.begin_path();
    ctx.move_to(x1, y1);
    ctx.line_to(x2, y2);
    ctx.set_stroke_style_str(style);
    ctx.set_line_width(width);
    ctx.stroke();
}

/// Render an already-advanced scene. The clock gates this to visible
/// canvases, but a freshly-mounted zero-size canvas still guards here.
pub fn draw_scene(ctx: &Ctx, state: &SceneState, w: f64, h: f64, t: f64) {
    if w <= 1.0 || h <= 1.0 {
        return;
    }
    match &state.data {
        SceneData::Aggregation { particles, centers } => {
            draw_aggregation(ctx, particles, centers, w, h, t)
        }
        SceneData::ToxicityScan { dots } => draw_toxicity_scan(ctx, dots, w, h, t),
        SceneData::RiskRadar { points } => draw_risk_radar(ctx, points, w, h, t),
        SceneData::ReportRain { columns } => draw_report_rain(ctx, columns, w, h),
        SceneData::NeuralMesh { nodes, signals, .. } => {
            draw_neural_mesh(ctx, nodes, signals, w, h, t)
        }
        SceneData::NanoInput { orbs } => draw_nano_input(ctx, orbs, w, h, t),
        SceneData::MoleculeField { molecules } => draw_molecule_field(ctx, molecules, w, h),
        SceneData::Static => match state.kind {
            SceneKind::Membrane => draw_membrane(ctx, w, h, t),
            SceneKind::DataHelix => draw_data_helix(ctx, w, h, t),
            SceneKind::ExpertFlow => draw_expert_flow(ctx, w, h, t),
            _ => {}
        },
    }
}

// ---------- Aggregation ----------

fn draw_aggregation(
    ctx: &Ctx,
    particles: &[Particle],
    _centers: &[ClusterCenter],
    w: f64,
    h: f64,
    t: f64,
) {
    ctx.clear_rect(0.0, 0.0, w, h);

    for i in 0..particles.len() {
        for j in (i + 1)..particles.len() {
            let d = particles[i].pos.distance(particles[j].pos);
            let a = physics::bond_alpha(d, AGG_BOND_DIST, AGG_BOND_MAX_ALPHA) as f64;
            if a > 0.0 {
                stroke_line(
                    ctx,
                    f64::from(particles[i].pos.x),
                    f64::from(particles[i].pos.y),
                    f64::from(particles[j].pos.x),
                    f64::from(particles[j].pos.y),
                    &rgba(C_ACCENT, a),
                    a * 2.2,
                );
            }
        }
    }

    for p in particles {
        let (x, y, r) = (f64::from(p.pos.x), f64::from(p.pos.y), f64::from(p.radius));
        let pulse = ((t * 2.2 + f64::from(p.phase)).sin() + 1.0) / 2.0;
        fill_glow(ctx, x, y, r * 2.8, C_ACCENT, 0.85 * pulse + 0.15, Some((0.5, 0.2 * pulse)));
        fill_circle(ctx, x, y, r, &rgba(C_ACCENT, 0.65 + pulse * 0.35));
    }
}

// ---------- Toxicity scan ----------

fn draw_toxicity_scan(ctx: &Ctx, dots: &[ScanDot], w: f64, h: f64, t: f64) {
    ctx.clear_rect(0.0, 0.0, w, h);
    let scan_y = h / 2.0 + t.sin() * h * 0.1;

    ctx.set_fill_style_str(&rgba(C_ACCENT, 0.15));
    ctx.fill_rect(0.0, scan_y - 20.0, w, 40.0);
    ctx.set_fill_style_str(&rgba(C_ACCENT, 0.8));
    ctx.fill_rect(0.0, scan_y - 1.0, w, 2.0);

    for d in dots {
        let px = f64::from(d.x) * w;
        let py = f64::from(d.y) * h;
        // Grey above the line; classified blue/red once scanned past it
        let evaluated = py > scan_y;
        let (col, alpha) = if evaluated {
            (if d.toxic { C_DANGER } else { C_ACCENT }, 0.9)
        } else {
            (C_NEUTRAL, 0.3)
        };
        fill_circle(ctx, px, py, 6.0, &rgba(col, alpha));
        if evaluated && d.toxic {
            ctx.begin_path();
            _ = ctx.arc(px, py, 12.0 + (t * 10.0).sin() * 4.0, 0.0, TAU);
            ctx.set_stroke_style_str(&rgba(col, 0.5));
            ctx.stroke();
        }
    }
}

// ---------- Membrane (pure function of t) ----------

fn draw_membrane(ctx: &Ctx, w: f64, h: f64, t: f64) {
    ctx.clear_rect(0.0, 0.0, w, h);
    let (cx, cy) = (w / 2.0, h * 0.8);
    let big_r = w * 0.55;

    let lipid = |angle: f64, radius: f64, outer: bool| {
        let x = cx + angle.cos() * radius;
        let y = cy + angle.sin() * radius;
        let tail = radius + if outer { -15.0 } else { 15.0 };
        let tx = cx + angle.cos() * tail;
        let ty = cy + angle.sin() * tail;
        fill_circle(ctx, x, y, 4.0, &rgba(C_ACCENT, 0.8));
        stroke_line(ctx, x, y, tx, ty, &rgba(C_ACCENT, 0.4), 2.0);
    };

    let mut a = PI;
    while a < TAU {
        let wave = (a * 8.0 + t * 2.0).sin() * 8.0;
        lipid(a, big_r + wave + 20.0, true);
        lipid(a, big_r + wave - 20.0, false);
        a += 0.08;
    }

    fill_glow(ctx, cx, cy, big_r * 0.4, C_BLUE, 0.3, None);

    // Reactive species streaming toward the bilayer
    for i in 0..6 {
        let angle = PI * 1.15 + i as f64 * 0.18;
        let dist = big_r + 100.0 - (t * 40.0 + i as f64 * 40.0) % 180.0;
        let rx = cx + angle.cos() * dist;
        let ry = cy + angle.sin() * dist;
        fill_circle(ctx, rx, ry, 5.0, &rgba(C_DANGER, 0.9));
        if dist < big_r + 25.0 {
            let burst = 15.0 + js_sys::Math::random() * 15.0;
            fill_circle(ctx, rx, ry, burst, &rgba(C_DANGER, 0.25));
        }
    }
}

// ---------- Risk radar ----------

fn draw_risk_radar(ctx: &Ctx, points: &[RadarPoint], w: f64, h: f64, t: f64) {
    ctx.clear_rect(0.0, 0.0, w, h);
    let (cx, cy) = (w / 2.0, h / 2.0);
    let r = w.min(h) * 0.38;
    let sweep = f64::from(crate::core::scene::sweep_angle(t as f32));

    for i in 1..=4 {
        ctx.begin_path();
        _ = ctx.arc(cx, cy, r * i as f64 / 4.0, 0.0, TAU);
        ctx.set_stroke_style_str(&rgba(C_ACCENT, 0.08));
        ctx.set_line_width(0.7);
        ctx.stroke();
    }
    for a in [0.0, PI / 2.0, PI, PI * 1.5] {
        stroke_line(
            ctx,
            cx,
            cy,
            cx + a.cos() * r,
            cy + a.sin() * r,
            &rgba(C_ACCENT, 0.07),
            0.6,
        );
    }

    // Trailing sweep fill
    for i in 0..50 {
        let ta = sweep - (i as f64 / 50.0) * PI * 0.44;
        ctx.begin_path();
        ctx.move_to(cx, cy);
        _ = ctx.arc(cx, cy, r, ta - 0.05, ta);
        ctx.close_path();
        ctx.set_fill_style_str(&rgba(C_ACCENT, (1.0 - i as f64 / 50.0) * 0.06));
        ctx.fill();
    }

    // Sweep line fades toward the rim
    let (ex, ey) = (cx + sweep.cos() * r, cy + sweep.sin() * r);
    let lg = ctx.create_linear_gradient(cx, cy, ex, ey);
    _ = lg.add_color_stop(0.0, &rgba(C_ACCENT, 0.9));
    _ = lg.add_color_stop(1.0, &rgba(C_ACCENT, 0.05));
    ctx.begin_path();
    ctx.move_to(cx, cy);
    ctx.line_to(ex, ey);
    ctx.set_stroke_style_canvas_gradient(&lg);
    ctx.set_line_width(2.0);
    ctx.stroke();

    for p in points {
        if !p.detected {
            continue;
        }
        let px = cx + f64::from(p.angle.cos() * p.dist) * r;
        let py = cy + f64::from(p.angle.sin() * p.dist) * r;
        let (col, sz) = if p.high_risk { (C_DANGER, 6.0) } else { (C_ACCENT, 4.0) };
        let alpha = f64::from(p.alpha);
        fill_glow(ctx, px, py, sz * 3.5, col, alpha, None);
        fill_circle(ctx, px, py, sz, &rgba(col, alpha));
    }
    fill_circle(ctx, cx, cy, 4.0, &rgba(C_ACCENT, 0.9));
}

// ---------- Data helix (pure function of t) ----------

fn draw_data_helix(ctx: &Ctx, w: f64, h: f64, t: f64) {
    ctx.clear_rect(0.0, 0.0, w, h);
    let cx = w / 2.0;
    let amp = w * 0.22;
    const TURNS: f64 = 3.5;
    const N: usize = 90;

    struct Node {
        x: f64,
        y: f64,
        d: f64,
    }
    let mut s1 = Vec::with_capacity(N + 1);
    let mut s2 = Vec::with_capacity(N + 1);
    for i in 0..=N {
        let p = i as f64 / N as f64;
        let a = p * TAU * TURNS + t;
        let y = p * h;
        let d = a.sin();
        s1.push(Node { x: cx + a.cos() * amp, y, d });
        s2.push(Node {
            x: cx + (a + PI).cos() * amp,
            y,
            d: -d,
        });
    }

    // Rungs with element labels every third rung
    for i in (0..N).step_by(5) {
        let mean_d = (s1[i].d + s2[i].d) / 2.0;
        let al = ((mean_d + 1.0) / 2.0) * 0.3 + 0.04;
        stroke_line(ctx, s1[i].x, s1[i].y, s2[i].x, s2[i].y, &rgba(C_ACCENT, al), 0.8);
        if i % 15 == 0 && i > 0 {
            let label = HELIX_LABELS[(i / 15) % HELIX_LABELS.len()];
            let mx = (s1[i].x + s2[i].x) / 2.0;
            let my = (s1[i].y + s2[i].y) / 2.0;
            let fa = (s1[i].d + 1.0) / 2.0;
            ctx.set_font(&format!("{}px 'DM Sans',sans-serif", 9.0 + fa * 5.0));
            ctx.set_fill_style_str(&rgba(C_ACCENT, fa * 0.7));
            ctx.set_text_align("center");
            ctx.set_text_baseline("middle");
            _ = ctx.fill_text(label, mx, my);
        }
    }

    // Painter's order: far segments first so near ones overdraw them
    let draw_strand = |strand: &[Node], rgb: &str| {
        let mut order: Vec<usize> = (0..strand.len() - 1).collect();
        order.sort_by(|&a, &b| strand[a].d.partial_cmp(&strand[b].d).unwrap());
        ctx.set_line_cap("round");
        for i in order {
            let (p, pn) = (&strand[i], &strand[i + 1]);
            let dd = (p.d + 1.0) / 2.0;
            stroke_line(
                ctx,
                p.x,
                p.y,
                pn.x,
                pn.y,
                &rgba(rgb, 0.12 + dd * 0.88),
                1.5 + dd * 3.5,
            );
            if i % 9 == 0 {
                fill_glow(ctx, p.x, p.y, 10.0, rgb, dd * 0.9, None);
                fill_circle(ctx, p.x, p.y, 3.5, &rgba(rgb, dd));
            }
        }
    };
    draw_strand(&s1, C_ACCENT);
    draw_strand(&s2, C_BLUE);
}

// ---------- Report rain ----------

fn draw_report_rain(ctx: &Ctx, columns: &[RainColumn], w: f64, h: f64) {
    // Translucent fill instead of a clear leaves the fading tails
    ctx.set_fill_style_str("rgba(4,8,16,0.11)");
    ctx.fill_rect(0.0, 0.0, w, h);

    let f = f64::from(RAIN_FONT_PX);
    let col_w = w / columns.len() as f64;
    for (i, c) in columns.iter().enumerate() {
        let txt = RAIN_TERMS[c.glyph];
        let x = i as f64 * col_w;
        let y = f64::from(c.fall) * f;
        ctx.set_font(&format!("bold {f}px 'DM Mono',monospace"));
        let style = if c.highlight && txt == "TOXIC" {
            rgba(C_DANGER, 0.95)
        } else if c.highlight && txt == "NON-TOXIC" {
            rgba(C_ACCENT, 1.0)
        } else if c.highlight {
            "rgba(180,220,255,0.9)".to_string()
        } else {
            rgba(C_ACCENT, 0.65)
        };
        ctx.set_fill_style_str(&style);
        _ = ctx.fill_text(txt, x, y);

        if y > f * 3.0 {
            ctx.set_fill_style_str(&rgba(C_ACCENT, 0.15));
            ctx.set_font(&format!("{f}px 'DM Mono',monospace"));
            _ = ctx.fill_text(RAIN_TERMS[c.ghost_glyph], x, y - f * 2.0);
        }
    }
}

// ---------- Neural mesh ----------

fn draw_neural_mesh(
    ctx: &Ctx,
    nodes: &[MeshNode],
    signals: &[SignalPulse],
    w: f64,
    h: f64,
    t: f64,
) {
    ctx.clear_rect(0.0, 0.0, w, h);
    let pos = |n: &MeshNode| {
        let p = n.pos(w as f32, h as f32);
        (f64::from(p.x), f64::from(p.y))
    };

    for from in nodes {
        for to in nodes.iter().filter(|n| n.layer == from.layer + 1) {
            let (x1, y1) = pos(from);
            let (x2, y2) = pos(to);
            stroke_line(ctx, x1, y1, x2, y2, &rgba(C_ACCENT, 0.05), 0.5);
        }
    }

    for s in signals {
        let (fx, fy) = pos(&nodes[s.from]);
        let (tx, ty) = pos(&nodes[s.to]);
        let col = if s.positive { C_ACCENT } else { C_DANGER };
        let p = f64::from(s.progress);
        for j in 0..10 {
            let tp = (p - j as f64 * 0.022).max(0.0);
            let x = fx + (tx - fx) * tp;
            let y = fy + (ty - fy) * tp;
            fill_circle(
                ctx,
                x,
                y,
                3.5 - j as f64 * 0.28,
                &rgba(col, (1.0 - j as f64 / 10.0) * 0.8),
            );
        }
        let px = fx + (tx - fx) * p;
        let py = fy + (ty - fy) * p;
        fill_glow(ctx, px, py, 10.0, col, 0.9, None);
    }

    for n in nodes {
        let act = ((t * 1.4 + f64::from(n.phase)).sin() + 1.0) / 2.0;
        let a = 0.28 + act * 0.72;
        let sz = 5.0 + act * 6.0;
        let (px, py) = pos(n);
        fill_glow(ctx, px, py, sz * 3.0, C_ACCENT, a * 0.7, None);
        fill_circle(ctx, px, py, sz, &rgba(C_ACCENT, a));
        fill_circle(ctx, px, py, sz - 2.0, &format!("rgba(4,8,16,{})", a * 0.6));
    }
}

// ---------- Nano input ----------

fn draw_nano_input(ctx: &Ctx, orbs: &[InputOrb], w: f64, h: f64, t: f64) {
    ctx.clear_rect(0.0, 0.0, w, h);

    ctx.set_stroke_style_str(&rgba(C_ACCENT, 0.04));
    ctx.set_line_width(0.5);
    let mut x = 0.0;
    while x < w {
        ctx.begin_path();
        ctx.move_to(x, 0.0);
        ctx.line_to(x, h);
        ctx.stroke();
        x += 40.0;
    }
    let mut y = 0.0;
    while y < h {
        ctx.begin_path();
        ctx.move_to(0.0, y);
        ctx.line_to(w, y);
        ctx.stroke();
        y += 40.0;
    }

    let bob = |o: &InputOrb| f64::from(o.base_y) + (t * 0.8 + f64::from(o.phase)).sin() * 16.0;

    for pair in orbs.windows(2) {
        stroke_line(
            ctx,
            f64::from(pair[0].x),
            bob(&pair[0]),
            f64::from(pair[1].x),
            bob(&pair[1]),
            &rgba(C_ACCENT, 0.1),
            0.8,
        );
    }

    for o in orbs {
        let (ox, oy, r) = (f64::from(o.x), bob(o), f64::from(o.radius));
        let pulse = ((t * 1.5 + f64::from(o.phase)).sin() + 1.0) / 2.0;
        let rgb = tint_rgb(o.tint);

        fill_glow(ctx, ox, oy, r * 2.8, rgb, 0.18 + pulse * 0.12, None);
        fill_circle(ctx, ox, oy, r, &rgba(rgb, 0.15));
        ctx.begin_path();
        _ = ctx.arc(ox, oy, r, 0.0, TAU);
        ctx.set_stroke_style_str(&rgba(rgb, 0.55 + pulse * 0.4));
        ctx.set_line_width(1.5);
        ctx.stroke();

        ctx.set_font("bold 9px 'DM Sans',sans-serif");
        ctx.set_text_align("center");
        ctx.set_text_baseline("bottom");
        ctx.set_fill_style_str(&rgba(rgb, 0.65 + pulse * 0.25));
        _ = ctx.fill_text(o.label, ox, oy - r - 5.0);

        ctx.set_font("bold 10px 'DM Sans',sans-serif");
        ctx.set_text_baseline("top");
        ctx.set_fill_style_str(&rgba(C_TEXT, 0.75 + pulse * 0.2));
        _ = ctx.fill_text(o.value, ox, oy + r + 4.0);
    }

    // Data packet sliding along the baseline
    let ax = (t * 45.0) % (w + 60.0) - 30.0;
    let ag = ctx.create_linear_gradient(ax, 0.0, ax + 22.0, 0.0);
    _ = ag.add_color_stop(0.0, &rgba(C_ACCENT, 0.0));
    _ = ag.add_color_stop(0.5, &rgba(C_ACCENT, 0.55));
    _ = ag.add_color_stop(1.0, &rgba(C_ACCENT, 0.0));
    ctx.begin_path();
    ctx.move_to(ax, h * 0.87);
    ctx.line_to(ax + 22.0, h * 0.87);
    ctx.set_stroke_style_canvas_gradient(&ag);
    ctx.set_line_width(2.0);
    ctx.stroke();
}

// ---------- Expert flow (pure function of t) ----------

fn draw_expert_flow(ctx: &Ctx, w: f64, h: f64, t: f64) {
    ctx.clear_rect(0.0, 0.0, w, h);
    let cy = h / 2.0;
    let box_w = (w * 0.2).min(100.0);
    let box_h = (h * 0.26).min(80.0);

    let boxes: [(f64, &str, &str, &str); 3] = [
        (w * 0.17, "AI Result", "95.2%", C_ACCENT),
        (w * 0.50, "Expert Review", "Nanotox. Sci.", C_BLUE),
        (w * 0.83, "Validated", "Certified \u{2713}", C_ACCENT),
    ];

    for (idx, pair) in boxes.windows(2).enumerate() {
        let x1 = pair[0].0 + box_w / 2.0 + 6.0;
        let x2 = pair[1].0 - box_w / 2.0 - 6.0;
        stroke_line(ctx, x1, cy, x2 - 8.0, cy, &rgba(C_ACCENT, 0.18), 1.2);
        ctx.begin_path();
        ctx.move_to(x2 - 8.0, cy - 5.0);
        ctx.line_to(x2, cy);
        ctx.line_to(x2 - 8.0, cy + 5.0);
        ctx.set_stroke_style_str(&rgba(C_ACCENT, 0.28));
        ctx.set_line_width(1.2);
        ctx.stroke();

        let local = (t * 0.5 + idx as f64 * 0.5) % 1.0;
        let px = x1 + (x2 - x1) * local;
        fill_glow(ctx, px, cy, 7.0, C_ACCENT, 0.9, None);
        fill_circle(ctx, px, cy, 2.5, &rgba(C_ACCENT, 1.0));
    }

    // Reviewer glyph above the middle box
    let ex = boxes[1].0;
    let exp_y = cy - box_h / 2.0 - 28.0;
    let person = ((t * 1.1).sin() + 1.0) / 2.0;
    ctx.begin_path();
    _ = ctx.arc(ex, exp_y - 7.0, 9.0, 0.0, TAU);
    ctx.set_stroke_style_str(&rgba(C_BLUE, 0.5 + person * 0.4));
    ctx.set_line_width(1.5);
    ctx.stroke();
    ctx.begin_path();
    ctx.move_to(ex - 11.0, exp_y + 12.0);
    ctx.quadratic_curve_to(ex, exp_y + 3.0, ex + 11.0, exp_y + 12.0);
    ctx.set_stroke_style_str(&rgba(C_BLUE, 0.4 + person * 0.3));
    ctx.stroke();

    for (i, (bx_center, label, sublabel, color)) in boxes.iter().enumerate() {
        let bx = bx_center - box_w / 2.0;
        let by = cy - box_h / 2.0;
        let pulse = ((t * 1.2 + i as f64 * 1.4).sin() + 1.0) / 2.0;

        fill_glow(ctx, *bx_center, cy, box_w, color, 0.06 + pulse * 0.04, None);

        ctx.begin_path();
        ctx.rect(bx, by, box_w, box_h);
        ctx.set_fill_style_str(&rgba(color, 0.07));
        ctx.fill();
        ctx.set_stroke_style_str(&rgba(color, 0.3 + pulse * 0.2));
        ctx.set_line_width(1.0);
        ctx.stroke();

        ctx.set_font("bold 10px 'DM Sans',sans-serif");
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.set_fill_style_str(&rgba(C_TEXT, 0.9));
        _ = ctx.fill_text(label, *bx_center, by + box_h * 0.38);
        ctx.set_font("9px 'DM Sans',sans-serif");
        ctx.set_fill_style_str(&rgba(color, 0.6 + pulse * 0.3));
        _ = ctx.fill_text(sublabel, *bx_center, by + box_h * 0.68);
    }
}

// ---------- Background molecule field ----------

fn draw_molecule_field(ctx: &Ctx, molecules: &[Molecule], w: f64, h: f64) {
    ctx.clear_rect(0.0, 0.0, w, h);
    let light = crate::storage::root_is_light();
    let (dot_style, link_rgb, link_scale) = if light {
        ("rgba(0,80,150,0.15)", "0,80,150", 0.28)
    } else {
        ("rgba(0,198,255,0.22)", C_ACCENT, 0.44)
    };

    for (i, m) in molecules.iter().enumerate() {
        fill_circle(
            ctx,
            f64::from(m.pos.x),
            f64::from(m.pos.y),
            f64::from(m.size),
            dot_style,
        );
        for other in &molecules[i + 1..] {
            let d = m.pos.distance(other.pos);
            let a = physics::bond_alpha(d, FIELD_LINK_DIST, FIELD_LINK_MAX_ALPHA) as f64;
            if a > 0.0 {
                stroke_line(
                    ctx,
                    f64::from(m.pos.x),
                    f64::from(m.pos.y),
                    f64::from(other.pos.x),
                    f64::from(other.pos.y),
                    &rgba(link_rgb, a * link_scale),
                    0.7,
                );
            }
        }
    }
}
