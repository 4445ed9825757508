//! Collision detection and response for circular bodies
//!
//! Three kinds of contact, always resolved in this order by `tick`:
//! ring vs canvas wall, ring vs pin, ring vs ring.
//!
//! Rings behave like thin hoops rather than solid discs. A ring can slide
//! over a pin so that the pin sits inside it; it only bounces when its rim
//! comes within one pin radius of the pin center.

use glam::DVec2;

use super::body::Body;

/// Distances at or below this are treated as coincident centers
pub const DEGENERATE_DISTANCE: f64 = f64::EPSILON;

/// Which axes were clamped by the wall pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHit {
    pub x: bool,
    pub y: bool,
}

impl WallHit {
    #[inline]
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Result of a pairwise circle check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit normal pointing from the other body toward the ring
    pub normal: DVec2,
    /// Center distance at detection time
    pub distance: f64,
}

/// Reflect velocity off a surface: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: DVec2, normal: DVec2) -> DVec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Clamp a body inside a `width` x `height` box and bounce it off the walls.
///
/// Each axis is handled independently and at most one wall per axis is
/// resolved (left before right, top before bottom).
pub fn resolve_wall(body: &mut Body, width: f64, height: f64, restitution: f64) -> WallHit {
    let r = body.radius;
    let mut hit = WallHit::default();

    if body.pos.x < r {
        body.pos.x = r;
        body.vel.x *= -restitution;
        hit.x = true;
    } else if body.pos.x > width - r {
        body.pos.x = width - r;
        body.vel.x *= -restitution;
        hit.x = true;
    }

    if body.pos.y < r {
        body.pos.y = r;
        body.vel.y *= -restitution;
        hit.y = true;
    } else if body.pos.y > height - r {
        body.pos.y = height - r;
        body.vel.y *= -restitution;
        hit.y = true;
    }

    hit
}

/// Check whether a ring's rim is touching a pin.
///
/// Triggers when `dist - ring_r < pin_r && dist > ring_r - pin_r`. Inside the
/// band's inner edge the pin is enclosed by the hoop and nothing happens.
/// Returns `None` for coincident centers since no normal exists.
pub fn ring_pin_contact(ring: &Body, pin: &Body) -> Option<Contact> {
    let delta = ring.pos - pin.pos;
    let distance = delta.length();

    let in_band = distance - ring.radius < pin.radius && distance > ring.radius - pin.radius;
    if !in_band || distance == 0.0 {
        return None;
    }

    Some(Contact {
        normal: delta / distance,
        distance,
    })
}

/// Snap a ring onto a pin and bounce it.
///
/// The ring center is placed exactly `ring.radius` from the pin, so the pin
/// sits on the ring's rim, and the velocity is mirrored about the contact
/// normal then scaled by `restitution`.
pub fn resolve_ring_pin(ring: &mut Body, pin: &Body, restitution: f64) -> bool {
    let Some(contact) = ring_pin_contact(ring, pin) else {
        return false;
    };

    ring.pos = pin.pos + contact.normal * ring.radius;
    ring.vel = reflect_velocity(ring.vel, contact.normal) * restitution;
    true
}

/// Check whether two rings overlap.
///
/// Returns `None` when they are apart or when their centers coincide.
pub fn ring_ring_contact(a: &Body, b: &Body) -> Option<Contact> {
    let delta = a.pos - b.pos;
    let distance = delta.length();

    if distance >= a.radius + b.radius {
        return None;
    }
    if distance <= DEGENERATE_DISTANCE {
        log::trace!("skipping ring pair with coincident centers at {:?}", a.pos);
        return None;
    }

    Some(Contact {
        normal: delta / distance,
        distance,
    })
}

/// Push two overlapping rings apart and exchange their normal velocities.
///
/// Equal masses: each ring moves half the overlap along the normal, then the
/// relative normal velocity is swapped and both sides are scaled by
/// `restitution`.
pub fn resolve_ring_pair(a: &mut Body, b: &mut Body, restitution: f64) -> bool {
    let Some(contact) = ring_ring_contact(a, b) else {
        return false;
    };
    let n = contact.normal;

    let half_overlap = (a.radius + b.radius - contact.distance) / 2.0;
    a.pos += n * half_overlap;
    b.pos -= n * half_overlap;

    let along_normal = (a.vel - b.vel).dot(n);
    a.vel = (a.vel - along_normal * n) * restitution;
    b.vel = (b.vel + along_normal * n) * restitution;
    true
}
