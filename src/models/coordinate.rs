use std::fmt;

/// A single cell on the grid.
/// No bounds apply: negative and arbitrarily large values are valid.
/// X increases left-to-right, Y increases top-to-bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub fn new(x: i32, y: i32) -> Self {
        Coordinate { x, y }
    }

    /// Offset this coordinate by `steps` cells along `orientation`.
    /// Returns None if the result leaves the i32 range.
    pub fn offset(self, orientation: Orientation, steps: i32) -> Option<Coordinate> {
        let (dx, dy) = orientation.step();
        Some(Coordinate {
            x: self.x.checked_add(dx.checked_mul(steps)?)?,
            y: self.y.checked_add(dy.checked_mul(steps)?)?,
        })
    }
}

/// Axis along which an occupancy extends from its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Unit (dx, dy) delta between consecutive cells.
    pub fn step(&self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "HORIZONTAL",
            Orientation::Vertical => "VERTICAL",
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
