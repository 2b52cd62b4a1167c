//! Command-line arguments for the demo binary.

pub mod args;
