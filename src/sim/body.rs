//! Circular bodies: the shared `Body` plus the `Ring` and `Pin` variants

use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 8-bit RGB display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` form
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// CSS `rgb(r, g, b)` form
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// A circular physical entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
    pub is_static: bool,
}

impl Body {
    pub fn new(pos: DVec2, radius: f64, is_static: bool) -> Self {
        debug_assert!(radius > 0.0, "body radius must be positive");
        Self {
            pos,
            vel: DVec2::ZERO,
            radius,
            is_static,
        }
    }

    /// True when position and velocity hold no NaN/inf
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.pos.is_finite() && self.vel.is_finite()
    }
}

/// A dynamic hoop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    pub body: Body,
    /// Stroke color
    pub color: Rgb,
}

impl Ring {
    pub fn new(pos: DVec2, radius: f64, color: Rgb) -> Self {
        Self {
            body: Body::new(pos, radius, false),
            color,
        }
    }

    /// Builder-style initial velocity
    pub fn with_velocity(mut self, vel: DVec2) -> Self {
        self.body.vel = vel;
        self
    }

    #[inline]
    pub fn pos(&self) -> DVec2 {
        self.body.pos
    }

    #[inline]
    pub fn vel(&self) -> DVec2 {
        self.body.vel
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.body.radius
    }
}

/// A static obstacle that can be armed and teleported by the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    pub body: Body,
    /// Armed for relocation on the next click
    pub is_movable: bool,
    /// Fill color (tracks `is_movable`)
    pub color: Rgb,
}

impl Pin {
    pub const LOCKED_COLOR: Rgb = Rgb::BLUE;
    pub const ARMED_COLOR: Rgb = Rgb::RED;

    pub fn new(pos: DVec2, radius: f64) -> Self {
        Self {
            body: Body::new(pos, radius, true),
            is_movable: false,
            color: Self::LOCKED_COLOR,
        }
    }

    #[inline]
    pub fn pos(&self) -> DVec2 {
        self.body.pos
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.body.radius
    }

    /// Flip between locked and armed. Has no physical effect.
    pub fn toggle_movable(&mut self) {
        self.is_movable = !self.is_movable;
        self.color = if self.is_movable {
            Self::ARMED_COLOR
        } else {
            Self::LOCKED_COLOR
        };
    }

    /// Teleport the pin, leaving velocity untouched
    pub fn set_position(&mut self, pos: DVec2) {
        self.body.pos = pos;
    }
}
