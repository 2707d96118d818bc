//! Unit identification.
//!
//! Every unit placed on a board gets a `UnitId` from that board. The grid
//! stores ids rather than units, so a unit can be referenced from the
//! occupant grid, the selection, the enemy queue and the move history
//! without ever being duplicated.
//!
//! ```
//! use rust_tactics::core::UnitId;
//!
//! let id = UnitId(3);
//! assert_eq!(id.raw(), 3);
//! assert_eq!(id.to_string(), "Unit(3)");
//! ```

use serde::{Deserialize, Serialize};

/// Board-unique identifier for a unit.
///
/// Ids are never reused within a board, so a stale id simply fails to
/// resolve once its unit has been captured or has left through a goal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId(pub u32);

impl UnitId {
    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The id following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u32> for UnitId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unit({})", self.0)
    }
}
