//! Renderer-facing snapshot of the world
//!
//! The simulation never draws. Each frame the front-end captures a `Frame`
//! and paints it with its own backend (canvas 2D in the wasm build).

use std::fmt;

use glam::DVec2;

use crate::consts::RING_STROKE_WIDTH;
use crate::sim::{Rgb, World};

/// RGB color with a float alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self {
            rgb: Rgb::new(r, g, b),
            alpha,
        }
    }
}

/// CSS `rgba(r, g, b, a)` form
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.rgb.r, self.rgb.g, self.rgb.b, self.alpha
        )
    }
}

/// Margin disc tint for an armed pin
pub const MARGIN_ARMED: Rgba = Rgba::new(255, 200, 200, 0.5);
/// Margin disc tint for a locked pin
pub const MARGIN_LOCKED: Rgba = Rgba::new(200, 200, 255, 0.5);

/// A hoop, drawn as a stroked circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSprite {
    pub center: DVec2,
    pub radius: f64,
    pub stroke: Rgb,
    pub stroke_width: f64,
}

/// A pin: translucent margin disc under a solid disc
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinSprite {
    pub center: DVec2,
    pub radius: f64,
    pub fill: Rgb,
    pub margin_radius: f64,
    pub margin_color: Rgba,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    /// Drawn first
    pub rings: Vec<RingSprite>,
    /// Drawn on top of rings
    pub pins: Vec<PinSprite>,
}

impl Frame {
    pub fn capture(world: &World) -> Self {
        let settings = &world.settings;
        let margin_radius = settings.pin_visual_radius();

        let rings = world
            .rings
            .iter()
            .map(|ring| RingSprite {
                center: ring.pos(),
                radius: ring.radius(),
                stroke: ring.color,
                stroke_width: RING_STROKE_WIDTH,
            })
            .collect();

        let pins = world
            .pins
            .iter()
            .map(|pin| PinSprite {
                center: pin.pos(),
                radius: pin.radius(),
                fill: pin.color,
                margin_radius,
                margin_color: if pin.is_movable {
                    MARGIN_ARMED
                } else {
                    MARGIN_LOCKED
                },
            })
            .collect();

        Self {
            width: settings.canvas_width,
            height: settings.canvas_height,
            rings,
            pins,
        }
    }
}
