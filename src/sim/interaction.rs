//! Two-click pin relocation
//!
//! First click on a pin arms it. The next click anywhere teleports the armed
//! pin to the click point and locks it again.

use glam::DVec2;

use super::state::World;

/// What a click did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickOutcome {
    /// Pin at this index is now armed
    Armed(usize),
    /// Pin at this index was moved to the point and locked
    Relocated(usize),
    /// Nothing under the pointer
    Missed,
}

/// Holds the currently armed pin, if any
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PinSelector {
    selected: Option<usize>,
}

impl PinSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the armed pin
    #[inline]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Handle a pointer press at `point`
    pub fn click(&mut self, world: &mut World, point: DVec2) -> ClickOutcome {
        // The world is the source of truth for the armed flag: a stale
        // selection is dropped, and a pin armed elsewhere is picked up.
        let armed = self
            .selected
            .take()
            .filter(|&i| world.pins.get(i).is_some_and(|p| p.is_movable))
            .or_else(|| world.pins.iter().position(|p| p.is_movable));

        if let Some(index) = armed {
            if world.relocate_pin(index, point) {
                return ClickOutcome::Relocated(index);
            }
        }

        match hit_test(world, point) {
            Some(index) => {
                world.toggle_pin(index);
                self.selected = Some(index);
                log::debug!("Pin {} armed", index);
                ClickOutcome::Armed(index)
            }
            None => ClickOutcome::Missed,
        }
    }
}

/// First pin whose visual margin disc contains `point`
pub fn hit_test(world: &World, point: DVec2) -> Option<usize> {
    let reach = world.settings.pin_visual_radius();
    world
        .pins
        .iter()
        .position(|pin| crate::distance(point, pin.pos()) < reach)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::WorldSettings;
    use crate::sim::body::Pin;

    fn world_with_pins(points: &[(f64, f64)]) -> World {
        let pins = points
            .iter()
            .map(|&(x, y)| Pin::new(DVec2::new(x, y), 8.0))
            .collect();
        World::from_bodies(WorldSettings::default(), Vec::new(), pins).unwrap()
    }

    #[test]
    fn test_hit_test_uses_margin_radius() {
        let world = world_with_pins(&[(100.0, 100.0)]);
        // Outside the pin itself but inside pin + margin
        assert_eq!(hit_test(&world, DVec2::new(111.0, 100.0)), Some(0));
        assert_eq!(hit_test(&world, DVec2::new(112.0, 100.0)), None);
    }

    #[test]
    fn test_hit_test_picks_first_overlap() {
        let world = world_with_pins(&[(100.0, 100.0), (105.0, 100.0)]);
        assert_eq!(hit_test(&world, DVec2::new(103.0, 100.0)), Some(0));
    }

    #[test]
    fn test_two_click_relocation() {
        let mut world = world_with_pins(&[(100.0, 100.0), (300.0, 300.0)]);
        let mut selector = PinSelector::new();

        let outcome = selector.click(&mut world, DVec2::new(301.0, 299.0));
        assert_eq!(outcome, ClickOutcome::Armed(1));
        assert_eq!(selector.selected(), Some(1));
        assert!(world.pins[1].is_movable);
        assert_eq!(world.pins[1].color, Pin::ARMED_COLOR);
        assert_eq!(world.pins[1].pos(), DVec2::new(300.0, 300.0));

        let target = DVec2::new(500.0, 50.0);
        let outcome = selector.click(&mut world, target);
        assert_eq!(outcome, ClickOutcome::Relocated(1));
        assert_eq!(selector.selected(), None);
        assert_eq!(world.pins[1].pos(), target);
        assert!(!world.pins[1].is_movable);
        assert_eq!(world.pins[1].color, Pin::LOCKED_COLOR);
        assert_eq!(world.pins[0].pos(), DVec2::new(100.0, 100.0));
    }

    #[test]
    fn test_miss_leaves_everything() {
        let mut world = world_with_pins(&[(100.0, 100.0)]);
        let mut selector = PinSelector::new();
        assert_eq!(selector.click(&mut world, DVec2::new(400.0, 400.0)), ClickOutcome::Missed);
        assert_eq!(selector.selected(), None);
        assert!(!world.pins[0].is_movable);
    }

    #[test]
    fn test_relocating_onto_another_pin_does_not_rearm() {
        let mut world = world_with_pins(&[(100.0, 100.0), (300.0, 300.0)]);
        let mut selector = PinSelector::new();

        selector.click(&mut world, DVec2::new(100.0, 100.0));
        let outcome = selector.click(&mut world, DVec2::new(300.0, 300.0));
        assert_eq!(outcome, ClickOutcome::Relocated(0));
        assert!(world.pins.iter().all(|p| !p.is_movable));
    }

    #[test]
    fn test_pin_armed_outside_selector_is_relocated() {
        let mut world = world_with_pins(&[(100.0, 100.0), (300.0, 300.0)]);
        let mut selector = PinSelector::new();
        world.toggle_pin(0);

        let target = DVec2::new(500.0, 500.0);
        assert_eq!(selector.click(&mut world, target), ClickOutcome::Relocated(0));
        assert_eq!(world.pins[0].pos(), target);
        assert!(!world.pins[0].is_movable);

        // A following click on the other pin arms it alone
        assert_eq!(
            selector.click(&mut world, DVec2::new(300.0, 300.0)),
            ClickOutcome::Armed(1)
        );
        let armed: Vec<bool> = world.pins.iter().map(|p| p.is_movable).collect();
        assert_eq!(armed, vec![false, true]);
    }

    #[test]
    fn test_stale_selection_falls_back_to_hit_test() {
        let mut world = world_with_pins(&[(100.0, 100.0)]);
        let mut selector = PinSelector::new();

        selector.click(&mut world, DVec2::new(100.0, 100.0));
        // Someone else locks the pin again
        world.toggle_pin(0);

        let outcome = selector.click(&mut world, DVec2::new(100.0, 100.0));
        assert_eq!(outcome, ClickOutcome::Armed(0));
        assert!(world.pins[0].is_movable);
    }
}
