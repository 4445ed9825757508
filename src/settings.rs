//! World settings
//!
//! Every tunable that used to be baked into world construction lives here.
//! Settings can be overridden from a (partial) JSON document.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors produced while loading or validating settings
#[derive(Debug)]
pub enum SettingsError {
    /// The settings document is not valid JSON for `WorldSettings`
    Parse(serde_json::Error),
    /// A field holds a value the simulation cannot run with
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Parse(e) => write!(f, "Failed to parse settings: {}", e),
            SettingsError::Invalid { field, reason } => {
                write!(f, "Invalid setting `{}`: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Parse(e) => Some(e),
            SettingsError::Invalid { .. } => None,
        }
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

/// World configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldSettings {
    // === Canvas ===
    pub canvas_width: f64,
    pub canvas_height: f64,

    // === Physics ===
    /// Added to every ring's vertical velocity each tick
    pub gravity: f64,
    /// Bounce coefficient for walls, pins and ring pairs
    pub restitution: f64,
    /// Per-tick velocity multiplier
    pub friction: f64,

    // === Population ===
    pub ring_radius: f64,
    pub ring_count: usize,
    pub pin_radius: f64,
    /// Hit-test margin around pins (not used by physics)
    pub pin_margin: f64,
    pub pin_count: usize,

    /// Spawn RNG seed
    pub seed: u64,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,

            gravity: GRAVITY,
            restitution: RESTITUTION,
            friction: FRICTION,

            ring_radius: RING_RADIUS,
            ring_count: RING_COUNT,
            pin_radius: PIN_RADIUS,
            pin_margin: PIN_MARGIN,
            pin_count: PIN_COUNT,

            seed: DEFAULT_SEED,
        }
    }
}

impl WorldSettings {
    /// Default settings with a specific spawn seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Parse settings from JSON and validate them.
    /// Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Radius used for pin hit-testing and the margin disc
    #[inline]
    pub fn pin_visual_radius(&self) -> f64 {
        self.pin_radius + self.pin_margin
    }

    /// Check every field the simulation relies on
    pub fn validate(&self) -> Result<(), SettingsError> {
        positive("canvas_width", self.canvas_width)?;
        positive("canvas_height", self.canvas_height)?;
        positive("ring_radius", self.ring_radius)?;
        positive("pin_radius", self.pin_radius)?;

        // Rings must fit inside the canvas or the wall clamp fights itself
        let diameter = self.ring_radius * 2.0;
        if self.canvas_width < diameter || self.canvas_height < diameter {
            return Err(SettingsError::Invalid {
                field: "ring_radius",
                reason: "ring does not fit inside the canvas",
            });
        }
        if self.canvas_width < self.pin_radius * 2.0 || self.canvas_height < self.pin_radius * 2.0
        {
            return Err(SettingsError::Invalid {
                field: "pin_radius",
                reason: "pin does not fit inside the canvas",
            });
        }

        unit_interval("restitution", self.restitution)?;
        unit_interval("friction", self.friction)?;

        if !self.gravity.is_finite() {
            return Err(SettingsError::Invalid {
                field: "gravity",
                reason: "must be finite",
            });
        }
        if !self.pin_margin.is_finite() || self.pin_margin < 0.0 {
            return Err(SettingsError::Invalid {
                field: "pin_margin",
                reason: "must be finite and non-negative",
            });
        }

        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), SettingsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::Invalid {
            field,
            reason: "must be finite and greater than zero",
        })
    }
}

fn unit_interval(field: &'static str, value: f64) -> Result<(), SettingsError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SettingsError::Invalid {
            field,
            reason: "must be within [0, 1]",
        })
    }
}
