//! Ring Arena - hoops bouncing around a box of pins
//!
//! Core modules:
//! - `sim`: Simulation (bodies, collisions, tick, pin interaction)
//! - `renderer`: Backend-agnostic draw list
//! - `settings`: World configuration with validation

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{SettingsError, WorldSettings};
pub use sim::{PinSelector, World, tick};

use glam::DVec2;

/// Default world configuration
pub mod consts {
    /// Canvas dimensions
    pub const CANVAS_WIDTH: f64 = 800.0;
    pub const CANVAS_HEIGHT: f64 = 600.0;

    /// Downward acceleration added to every ring each tick (units/tick²)
    pub const GRAVITY: f64 = 0.3;
    /// Velocity multiplier applied on every bounce
    pub const RESTITUTION: f64 = 0.95;
    /// Per-tick velocity decay (exponential, not Coulomb)
    pub const FRICTION: f64 = 0.995;

    /// Ring defaults - every ring shares the same radius
    pub const RING_RADIUS: f64 = 40.0;
    pub const RING_COUNT: usize = 8;
    /// Stroke width used when drawing a ring
    pub const RING_STROKE_WIDTH: f64 = 4.0;
    /// Spawn horizontal speed range (-MAX..MAX)
    pub const RING_SPAWN_MAX_SPEED: f64 = 2.0;

    /// Pin defaults
    pub const PIN_RADIUS: f64 = 8.0;
    /// Extra hit-test radius around a pin (visual only)
    pub const PIN_MARGIN: f64 = 4.0;
    pub const PIN_COUNT: usize = 5;

    /// Seed used when none is supplied
    pub const DEFAULT_SEED: u64 = 0x5EED_0F_A12E4A;
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: DVec2, b: DVec2) -> f64 {
    (a - b).length()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        assert_eq!(distance(DVec2::new(0.0, 0.0), DVec2::new(3.0, 4.0)), 5.0);
        assert_eq!(distance(DVec2::new(1.0, 1.0), DVec2::new(1.0, 1.0)), 0.0);
    }
}
