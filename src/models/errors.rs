use thiserror::Error;

/// Errors raised while laying out an entity on the grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FleetError {
    /// Requested length is below one, or the run of cells would leave
    /// the coordinate range.
    #[error("Invalid length {length}: an occupancy needs at least one cell within grid range")]
    InvalidLength { length: i32 },
}

/// Type alias for Results using FleetError
pub type FleetResult<T> = Result<T, FleetError>;
