//! User interface and presentation
//!
//! Presenters turn entities and torpedo results into report lines,
//! keeping formatting out of the combat logic.

pub mod presenters;
