use super::constants::MIN_LENGTH;
use super::coordinate::{Coordinate, Orientation};
use super::errors::{FleetError, FleetResult};

/// The ordered run of cells an entity covers.
///
/// Always non-empty. Cells are only exposed read-only so the layout
/// cannot change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupancy {
    cells: Vec<Coordinate>,
}

impl Occupancy {
    /// Lays out `length` consecutive cells starting at `origin`, stepping
    /// by one along `orientation`.
    ///
    /// # Errors
    ///
    /// * `FleetError::InvalidLength` if `length < 1`
    /// * `FleetError::InvalidLength` if the last cell would fall outside the i32 range
    pub fn build(origin: Coordinate, orientation: Orientation, length: i32) -> FleetResult<Self> {
        if length < MIN_LENGTH {
            tracing::warn!(length, "rejected occupancy with non-positive length");
            return Err(FleetError::InvalidLength { length });
        }

        // Checking the far end is enough: every earlier cell lies between it and the origin.
        if origin.offset(orientation, length - 1).is_none() {
            tracing::warn!(length, x = origin.x, y = origin.y, "occupancy would leave coordinate range");
            return Err(FleetError::InvalidLength { length });
        }

        let (dx, dy) = orientation.step();
        let cells = (0..length)
            .map(|i| Coordinate {
                x: origin.x + dx * i,
                y: origin.y + dy * i,
            })
            .collect();

        tracing::debug!(
            x = origin.x,
            y = origin.y,
            orientation = orientation.name(),
            length,
            "built occupancy"
        );
        Ok(Occupancy { cells })
    }

    /// Wraps an arbitrary, non-empty set of cells.
    pub fn from_cells(cells: Vec<Coordinate>) -> FleetResult<Self> {
        if cells.is_empty() {
            return Err(FleetError::InvalidLength { length: 0 });
        }
        Ok(Occupancy { cells })
    }

    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.cells.iter()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; kept alongside `len` for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// First cell of the run.
    pub fn origin(&self) -> Coordinate {
        self.cells[0]
    }

    pub fn contains(&self, at: Coordinate) -> bool {
        self.cells.contains(&at)
    }
}

impl<'a> IntoIterator for &'a Occupancy {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
