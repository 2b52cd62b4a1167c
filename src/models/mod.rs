//! Domain models
//!
//! Grid cells, occupancy layout, torpedo results and the concrete
//! entity types. Models are plain data with minimal logic.

pub mod army;
pub mod battleship;
pub mod constants;
pub mod coordinate;
pub mod errors;
pub mod occupancy;
pub mod torpedo_result;
