//! One simulation step
//!
//! Called once per animation frame. Pass order is fixed and every pass runs
//! over all rings before the next one starts:
//! gravity/damping → integration → walls → pins → ring pairs.

use super::collision::{resolve_ring_pair, resolve_ring_pin, resolve_wall};
use super::state::World;

/// Per-tick collision counts (diagnostics only)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    pub wall_hits: u32,
    pub pin_hits: u32,
    pub ring_hits: u32,
}

/// Advance the world by one tick
pub fn tick(world: &mut World) -> TickStats {
    apply_forces(world);
    integrate(world);
    let stats = TickStats {
        wall_hits: wall_pass(world),
        pin_hits: pin_pass(world),
        ring_hits: ring_pass(world),
    };

    world.time_ticks += 1;
    stats
}

/// Gravity then exponential damping on every ring
pub fn apply_forces(world: &mut World) {
    let (gravity, friction) = (world.settings.gravity, world.settings.friction);
    for ring in &mut world.rings {
        ring.body.vel.y += gravity;
        ring.body.vel *= friction;
    }
}

/// Move every ring by its velocity
pub fn integrate(world: &mut World) {
    for ring in &mut world.rings {
        ring.body.pos += ring.body.vel;
    }
}

/// Clamp rings to the canvas. Returns the number of rings that hit a wall.
pub fn wall_pass(world: &mut World) -> u32 {
    let s = &world.settings;
    let (width, height, restitution) = (s.canvas_width, s.canvas_height, s.restitution);

    let mut hits = 0;
    for ring in &mut world.rings {
        if resolve_wall(&mut ring.body, width, height, restitution).any() {
            hits += 1;
        }
    }
    hits
}

/// Every ring against every pin
pub fn pin_pass(world: &mut World) -> u32 {
    let restitution = world.settings.restitution;

    let mut hits = 0;
    for ring in &mut world.rings {
        for pin in &world.pins {
            if resolve_ring_pin(&mut ring.body, &pin.body, restitution) {
                hits += 1;
            }
        }
    }
    hits
}

/// All unordered ring pairs (i < j), in collection order
pub fn ring_pass(world: &mut World) -> u32 {
    let restitution = world.settings.restitution;

    let mut hits = 0;
    for i in 0..world.rings.len() {
        let (head, tail) = world.rings.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if resolve_ring_pair(&mut a.body, &mut b.body, restitution) {
                hits += 1;
            }
        }
    }
    hits
}
