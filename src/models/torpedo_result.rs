use std::fmt;

use super::constants::{HIT_MESSAGE, MISS_MESSAGE};

/// Outcome of a torpedo aimed at a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TorpedoResult {
    Hit,
    Miss,
}

impl TorpedoResult {
    pub fn message(&self) -> &'static str {
        match self {
            TorpedoResult::Hit => HIT_MESSAGE,
            TorpedoResult::Miss => MISS_MESSAGE,
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, TorpedoResult::Hit)
    }
}

impl fmt::Display for TorpedoResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.message())
    }
}
