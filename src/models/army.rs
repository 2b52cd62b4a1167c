use super::occupancy::Occupancy;
use crate::services::combat::{Deployable, Targetable, TorpedoLauncher};

/// A land force holding a line of cells.
/// Shares no code with `Battleship`; both get combat through the traits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Army {
    occupancy: Occupancy,
}

impl Targetable for Army {
    fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }
}

impl TorpedoLauncher for Army {}

impl Deployable for Army {
    fn from_occupancy(occupancy: Occupancy) -> Self {
        Army { occupancy }
    }
}
