//! Monotonic fetch epoch.

use std::fmt;

/// Counter bumped by every intent that must refresh the list.
///
/// Each fetch is tagged with the value current when it was issued; only a
/// result carrying the latest value may touch visible state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTrigger(u64);

impl FetchTrigger {
    pub fn new() -> Self {
        Self(0)
    }

    /// Advance and return the new value.
    pub fn bump(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn current(&self) -> u64 {
        self.0
    }

    pub fn is_current(&self, value: u64) -> bool {
        self.0 == value
    }
}

impl fmt::Display for FetchTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
