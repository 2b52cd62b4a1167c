use super::occupancy::Occupancy;
use crate::services::combat::{Deployable, Targetable, TorpedoLauncher};

/// A ship laid out in a straight line on the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Battleship {
    occupancy: Occupancy,
}

impl Targetable for Battleship {
    fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }
}

impl TorpedoLauncher for Battleship {}

impl Deployable for Battleship {
    fn from_occupancy(occupancy: Occupancy) -> Self {
        Battleship { occupancy }
    }
}
