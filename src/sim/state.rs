//! World state: the ring and pin populations plus their settings

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::body::{Pin, Rgb, Ring};
use crate::consts::RING_SPAWN_MAX_SPEED;
use crate::settings::{SettingsError, WorldSettings};

/// The simulated arena.
///
/// Owns both body collections. Only `tick` and the pin operations below
/// mutate them.
#[derive(Debug, Clone)]
pub struct World {
    pub settings: WorldSettings,
    /// Dynamic hoops (iteration order is the ring-ring pair order)
    pub rings: Vec<Ring>,
    /// Static obstacles
    pub pins: Vec<Pin>,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl World {
    /// Validate `settings` and populate the world from its seed
    pub fn new(settings: WorldSettings) -> Result<Self, SettingsError> {
        settings.validate()?;

        let mut rng = Pcg32::seed_from_u64(settings.seed);
        let rings = (0..settings.ring_count)
            .map(|_| spawn_ring(&mut rng, &settings))
            .collect();
        let pins = (0..settings.pin_count)
            .map(|_| spawn_pin(&mut rng, &settings))
            .collect();

        log::info!(
            "World populated: {} rings, {} pins, seed {:#x}",
            settings.ring_count,
            settings.pin_count,
            settings.seed
        );

        Ok(Self {
            settings,
            rings,
            pins,
            time_ticks: 0,
        })
    }

    /// Build a world from explicit bodies instead of random spawns
    pub fn from_bodies(
        settings: WorldSettings,
        rings: Vec<Ring>,
        pins: Vec<Pin>,
    ) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self {
            settings,
            rings,
            pins,
            time_ticks: 0,
        })
    }

    /// Number of ticks run so far
    #[inline]
    pub fn tick_count(&self) -> u64 {
        self.time_ticks
    }

    /// Flip a pin between locked and armed.
    /// Returns false if `index` is out of range.
    pub fn toggle_pin(&mut self, index: usize) -> bool {
        match self.pins.get_mut(index) {
            Some(pin) => {
                pin.toggle_movable();
                true
            }
            None => false,
        }
    }

    /// Teleport an armed pin to `target` and lock it again.
    /// Locked pins and bad indices are left alone.
    pub fn relocate_pin(&mut self, index: usize, target: DVec2) -> bool {
        let Some(pin) = self.pins.get_mut(index) else {
            return false;
        };
        if !pin.is_movable {
            return false;
        }

        log::info!(
            "Pin {} moved ({:.1}, {:.1}) -> ({:.1}, {:.1})",
            index,
            pin.pos().x,
            pin.pos().y,
            target.x,
            target.y
        );
        pin.set_position(target);
        pin.toggle_movable();
        true
    }

    /// Sum of ½|v|² over all rings (unit mass)
    pub fn kinetic_energy(&self) -> f64 {
        self.rings
            .iter()
            .map(|r| 0.5 * r.vel().length_squared())
            .sum()
    }

    /// True when no body holds a NaN or infinite value
    pub fn is_finite(&self) -> bool {
        self.rings.iter().all(|r| r.body.is_finite()) && self.pins.iter().all(|p| p.body.is_finite())
    }
}

/// Uniform sample in `[lo, hi)`, or `lo` if the range is empty
fn sample(rng: &mut Pcg32, lo: f64, hi: f64) -> f64 {
    if hi > lo { rng.random_range(lo..hi) } else { lo }
}

/// Rings start in the upper half of the canvas drifting sideways
fn spawn_ring(rng: &mut Pcg32, settings: &WorldSettings) -> Ring {
    let r = settings.ring_radius;
    let x = sample(rng, r, settings.canvas_width - r);
    let y = sample(rng, r, settings.canvas_height / 2.0 - r);
    let vx = rng.random_range(-RING_SPAWN_MAX_SPEED..RING_SPAWN_MAX_SPEED);
    let color = Rgb::new(rng.random(), rng.random(), rng.random());

    Ring::new(DVec2::new(x, y), r, color).with_velocity(DVec2::new(vx, 0.0))
}

/// Pins can land anywhere on the canvas
fn spawn_pin(rng: &mut Pcg32, settings: &WorldSettings) -> Pin {
    let r = settings.pin_radius;
    let x = sample(rng, r, settings.canvas_width - r);
    let y = sample(rng, r, settings.canvas_height - r);
    Pin::new(DVec2::new(x, y), r)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_population_matches_settings() {
        let world = World::new(WorldSettings::default()).unwrap();
        assert_eq!(world.rings.len(), 8);
        assert_eq!(world.pins.len(), 5);
        assert_eq!(world.tick_count(), 0);
        assert!(world.is_finite());
    }

    #[test]
    fn test_spawn_bounds() {
        for seed in 0..50 {
            let world = World::new(WorldSettings::with_seed(seed)).unwrap();
            for ring in &world.rings {
                let p = ring.pos();
                assert!(p.x >= 40.0 && p.x < 760.0);
                assert!(p.y >= 40.0 && p.y < 260.0);
                assert!(ring.vel().x >= -2.0 && ring.vel().x < 2.0);
                assert_eq!(ring.vel().y, 0.0);
                assert_eq!(ring.radius(), 40.0);
                assert!(!ring.body.is_static);
            }
            for pin in &world.pins {
                let p = pin.pos();
                assert!(p.x >= 8.0 && p.x < 792.0);
                assert!(p.y >= 8.0 && p.y < 592.0);
                assert!(!pin.is_movable);
                assert!(pin.body.is_static);
            }
        }
    }

    #[test]
    fn test_same_seed_same_world() {
        let a = World::new(WorldSettings::with_seed(7)).unwrap();
        let b = World::new(WorldSettings::with_seed(7)).unwrap();
        let c = World::new(WorldSettings::with_seed(8)).unwrap();
        assert_eq!(a.rings, b.rings);
        assert_eq!(a.pins, b.pins);
        assert_ne!(a.rings, c.rings);
    }

    #[test]
    fn test_short_canvas_spawns_at_top_margin() {
        let settings = WorldSettings {
            canvas_height: 100.0,
            ..WorldSettings::default()
        };
        let world = World::new(settings).unwrap();
        assert!(world.rings.iter().all(|r| r.pos().y == 40.0));
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = WorldSettings {
            ring_radius: -1.0,
            ..WorldSettings::default()
        };
        assert!(World::new(settings).is_err());
    }

    #[test]
    fn test_relocate_requires_armed_pin() {
        let mut world = World::new(WorldSettings::default()).unwrap();
        let original = world.pins[0].pos();
        let target = DVec2::new(123.0, 456.0);

        assert!(!world.relocate_pin(0, target));
        assert_eq!(world.pins[0].pos(), original);

        assert!(world.toggle_pin(0));
        assert!(world.relocate_pin(0, target));
        assert_eq!(world.pins[0].pos(), target);
        assert!(!world.pins[0].is_movable);
        assert_eq!(world.pins[0].color, Pin::LOCKED_COLOR);
    }

    #[test]
    fn test_pin_ops_out_of_range() {
        let mut world = World::new(WorldSettings::default()).unwrap();
        assert!(!world.toggle_pin(99));
        assert!(!world.relocate_pin(99, DVec2::ZERO));
    }

    #[test]
    fn test_kinetic_energy() {
        let rings = vec![
            Ring::new(DVec2::new(100.0, 100.0), 40.0, Rgb::RED).with_velocity(DVec2::new(3.0, 4.0)),
            Ring::new(DVec2::new(300.0, 100.0), 40.0, Rgb::RED).with_velocity(DVec2::new(0.0, 2.0)),
        ];
        let world = World::from_bodies(WorldSettings::default(), rings, Vec::new()).unwrap();
        assert!((world.kinetic_energy() - 14.5).abs() < 1e-12);
    }
}
