//! Simulation module
//!
//! All physics lives here. This module must stay pure:
//! - One `tick` per frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (collection order)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod interaction;
pub mod state;
pub mod tick;

pub use body::{Body, Pin, Rgb, Ring};
pub use collision::{
    Contact, WallHit, reflect_velocity, resolve_ring_pair, resolve_ring_pin, resolve_wall,
    ring_pin_contact, ring_ring_contact,
};
pub use interaction::{ClickOutcome, PinSelector, hit_test};
pub use state::World;
pub use tick::{TickStats, tick};
