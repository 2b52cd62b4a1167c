//! Game services
//!
//! Capability traits and the shared hit-test and torpedo logic.

pub mod combat;
