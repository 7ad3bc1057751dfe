use glam::Vec2;

/// Shared particle motion helpers used by several scenes and the
/// background molecule field.

#[inline]
pub fn apply_velocity(pos: &mut Vec2, vel: Vec2) {
    *pos += vel;
}

/// Reflect the velocity component that crossed an axis-aligned bound and
/// clamp the position back inside.
pub fn bounce_at_bounds(pos: &mut Vec2, vel: &mut Vec2, min: Vec2, max: Vec2) {
    if pos.x < min.x {
        pos.x = min.x;
        vel.x = vel.x.abs();
    } else if pos.x > max.x {
        pos.x = max.x;
        vel.x = -vel.x.abs();
    }
    if pos.y < min.y {
        pos.y = min.y;
        vel.y = vel.y.abs();
    } else if pos.y > max.y {
        pos.y = max.y;
        vel.y = -vel.y.abs();
    }
}

/// Pull `vel` toward `target` with spring constant `k`, then damp it.
/// Small `k` with damping just under 1 gives the slow clustering drift.
#[inline]
pub fn damped_attraction(pos: Vec2, target: Vec2, vel: &mut Vec2, k: f32, damping: f32) {
    *vel += (target - pos) * k;
    *vel *= damping;
}

/// Opacity for a connecting line between two particles `d` apart.
/// `max` at zero distance, fading linearly to zero at `threshold`.
#[inline]
pub fn bond_alpha(d: f32, threshold: f32, max: f32) -> f32 {
    if d >= threshold {
        return 0.0;
    }
    (1.0 - d / threshold) * max
}

/// Push `pos` directly away from `source` when within `radius`, with force
/// falling off linearly from `strength` at the source to zero at the edge.
pub fn repel_from(pos: &mut Vec2, source: Vec2, radius: f32, strength: f32) {
    let delta = *pos - source;
    let d = delta.length();
    if d <= 0.0 || d >= radius {
        return;
    }
    let force = (radius - d) / radius * strength;
    *pos += delta / d * force;
}
