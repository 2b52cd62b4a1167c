//! Battlegrid
//!
//! A small combat core over a discrete 2D grid: entities occupy straight
//! runs of cells and fire torpedoes at one another's cells.
//!
//! # Overview
//!
//! An entity's cells are laid out from an origin, an orientation and a
//! length. Any type that exposes those cells gets hit-testing and torpedo
//! launch for free through the traits in [`services::combat`]; concrete
//! types such as [`Battleship`] and [`Army`] share nothing else.
//!
//! # Modules
//!
//! - [`models`] - Coordinates, occupancy, torpedo results and entity types
//! - [`services`] - Combat capability traits
//! - [`io`] - Output abstraction for testing
//! - [`ui`] - Presentation of fleets and torpedo reports
//! - [`cli`] - Demo binary arguments
//!
//! # Example
//!
//! ```rust
//! use battlegrid::{Battleship, Coordinate, Deployable, Orientation, TorpedoLauncher, TorpedoResult};
//!
//! let a = Battleship::deploy(Coordinate::new(2, 1), Orientation::Vertical, 3).unwrap();
//! let b = Battleship::deploy(Coordinate::new(6, 4), Orientation::Horizontal, 5).unwrap();
//! assert_eq!(b.launch_torpedo(&a, Coordinate::new(2, 2)), TorpedoResult::Hit);
//! ```

pub mod cli;
pub mod io;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use models::army::Army;
pub use models::battleship::Battleship;
pub use models::coordinate::{Coordinate, Orientation};
pub use models::errors::{FleetError, FleetResult};
pub use models::occupancy::Occupancy;
pub use models::torpedo_result::TorpedoResult;
pub use services::combat::{Combatant, Deployable, Targetable, TorpedoLauncher};
