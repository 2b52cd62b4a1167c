//! Combat capabilities
//!
//! Hit-testing and torpedo launch are written once here as default trait
//! methods. Entity types supply only their occupancy and pick up the rest
//! by implementing the traits with empty bodies.

use crate::models::coordinate::{Coordinate, Orientation};
use crate::models::errors::FleetResult;
use crate::models::occupancy::Occupancy;
use crate::models::torpedo_result::TorpedoResult;

/// Something that occupies grid cells and can be fired upon.
pub trait Targetable {
    /// Cells this entity covers.
    fn occupancy(&self) -> &Occupancy;

    /// `Hit` iff `at` is one of this entity's cells.
    ///
    /// Pure query: repeated calls return the same answer and nothing
    /// about the entity changes.
    fn test_for_hit(&self, at: Coordinate) -> TorpedoResult {
        if self.occupancy().contains(at) {
            TorpedoResult::Hit
        } else {
            TorpedoResult::Miss
        }
    }
}

/// Something that can fire torpedoes.
pub trait TorpedoLauncher {
    /// Fires at `at` on `target`. The result is whatever the target's
    /// hit-test reports; the launcher's own state plays no part.
    fn launch_torpedo(&self, target: &dyn Targetable, at: Coordinate) -> TorpedoResult {
        let result = target.test_for_hit(at);
        tracing::debug!(x = at.x, y = at.y, result = result.message(), "torpedo launched");
        result
    }
}

/// Something that can be built from an occupancy.
pub trait Deployable {
    fn from_occupancy(occupancy: Occupancy) -> Self
    where
        Self: Sized;

    /// Lays out `length` cells from `origin` and wraps them in `Self`.
    ///
    /// # Errors
    ///
    /// `FleetError::InvalidLength` when the occupancy cannot be built.
    fn deploy(origin: Coordinate, orientation: Orientation, length: i32) -> FleetResult<Self>
    where
        Self: Sized,
    {
        Occupancy::build(origin, orientation, length).map(Self::from_occupancy)
    }
}

/// Can both be targeted and fire. Implemented for every type that is
/// both, so entity types never implement it by hand.
pub trait Combatant: Targetable + TorpedoLauncher {
    /// This entity viewed as a target, for handing to `launch_torpedo`
    /// from behind a `dyn Combatant`.
    fn as_target(&self) -> &dyn Targetable;
}

impl<T: Targetable + TorpedoLauncher> Combatant for T {
    fn as_target(&self) -> &dyn Targetable {
        self
    }
}

/// Free-function form of [`Targetable::test_for_hit`].
pub fn test_for_hit(entity: &dyn Targetable, at: Coordinate) -> TorpedoResult {
    entity.test_for_hit(at)
}

/// Free-function form of [`TorpedoLauncher::launch_torpedo`].
pub fn launch_torpedo(
    firing: &dyn TorpedoLauncher,
    target: &dyn Targetable,
    at: Coordinate,
) -> TorpedoResult {
    firing.launch_torpedo(target, at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::errors::FleetError;

    /// Minimal target-only type: can be hit but has no launcher.
    struct Buoy {
        occupancy: Occupancy,
    }

    impl Targetable for Buoy {
        fn occupancy(&self) -> &Occupancy {
            &self.occupancy
        }
    }

    impl Deployable for Buoy {
        fn from_occupancy(occupancy: Occupancy) -> Self {
            Buoy { occupancy }
        }
    }

    /// Launcher-only type with no cells of its own.
    struct ShoreBattery;

    impl TorpedoLauncher for ShoreBattery {}

    #[test]
    fn hit_only_on_occupied_cells() {
        let buoy = Buoy::deploy(Coordinate::new(0, 0), Orientation::Horizontal, 2).unwrap();

        assert_eq!(buoy.test_for_hit(Coordinate::new(0, 0)), TorpedoResult::Hit);
        assert_eq!(buoy.test_for_hit(Coordinate::new(1, 0)), TorpedoResult::Hit);
        assert_eq!(buoy.test_for_hit(Coordinate::new(2, 0)), TorpedoResult::Miss);
        assert_eq!(buoy.test_for_hit(Coordinate::new(0, 1)), TorpedoResult::Miss);
    }

    #[test]
    fn launcher_without_occupancy_can_fire() {
        let buoy = Buoy::deploy(Coordinate::new(5, 5), Orientation::Vertical, 3).unwrap();

        assert_eq!(
            ShoreBattery.launch_torpedo(&buoy, Coordinate::new(5, 7)),
            TorpedoResult::Hit
        );
        assert_eq!(
            launch_torpedo(&ShoreBattery, &buoy, Coordinate::new(6, 7)),
            TorpedoResult::Miss
        );
    }

    #[test]
    fn deploy_propagates_invalid_length() {
        let result = Buoy::deploy(Coordinate::new(0, 0), Orientation::Vertical, 0);
        assert!(matches!(result, Err(FleetError::InvalidLength { length: 0 })));
    }

    #[test]
    fn mixed_fleet_behind_dyn_combatant() {
        struct Frigate(Occupancy);
        impl Targetable for Frigate {
            fn occupancy(&self) -> &Occupancy {
                &self.0
            }
        }
        impl TorpedoLauncher for Frigate {}

        let fleet: Vec<Box<dyn Combatant>> = vec![
            Box::new(Frigate(Occupancy::build(Coordinate::new(0, 0), Orientation::Horizontal, 2).unwrap())),
            Box::new(Frigate(Occupancy::build(Coordinate::new(9, 9), Orientation::Vertical, 1).unwrap())),
        ];

        assert_eq!(
            fleet[0].launch_torpedo(fleet[1].as_target(), Coordinate::new(9, 9)),
            TorpedoResult::Hit
        );
        assert_eq!(
            fleet[1].launch_torpedo(fleet[0].as_target(), Coordinate::new(2, 0)),
            TorpedoResult::Miss
        );
    }

    #[test]
    fn free_test_for_hit_matches_method() {
        let buoy = Buoy::deploy(Coordinate::new(-1, -1), Orientation::Horizontal, 4).unwrap();
        for x in -3..5 {
            let at = Coordinate::new(x, -1);
            assert_eq!(test_for_hit(&buoy, at), buoy.test_for_hit(at));
        }
    }
}
