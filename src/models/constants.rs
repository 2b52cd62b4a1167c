use super::coordinate::{Coordinate, Orientation};

pub const HIT_MESSAGE: &str = "Hit!";
pub const MISS_MESSAGE: &str = "Miss!";

/// Smallest number of cells an entity may occupy.
pub const MIN_LENGTH: i32 = 1;

/// Layout of one entity in the demo fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deployment {
    pub name: &'static str,
    pub origin: Coordinate,
    pub orientation: Orientation,
    pub length: i32,
}

pub const ALPHA: Deployment = Deployment {
    name: "BATTLESHIP ALPHA",
    origin: Coordinate { x: 2, y: 1 },
    orientation: Orientation::Vertical,
    length: 3,
};

pub const BRAVO: Deployment = Deployment {
    name: "BATTLESHIP BRAVO",
    origin: Coordinate { x: 6, y: 4 },
    orientation: Orientation::Horizontal,
    length: 5,
};

pub const CHARLIE: Deployment = Deployment {
    name: "ARMY CHARLIE",
    origin: Coordinate { x: 2, y: 6 },
    orientation: Orientation::Vertical,
    length: 20,
};
