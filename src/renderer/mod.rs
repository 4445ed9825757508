//! Rendering support
//!
//! Backend-agnostic: `Frame` is the draw list a front-end paints each frame.

pub mod frame;

pub use frame::{Frame, PinSprite, RingSprite, Rgba};
