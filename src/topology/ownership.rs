//! Ownership attribute of a cell after partitioning.
//!
//! Import and export lists returned by the partitioner tag every cell with
//! the role it plays on the receiving process.

use serde::{Deserialize, Serialize};

/// Role of a cell on a process.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum AttributeSet {
    /// The process owns the cell.
    Owner = 1,
    /// Overlap cell, updated by the owner.
    Overlap = 2,
    /// Ghost copy.
    Copy = 3,
}

impl AttributeSet {
    /// Returns true for [`AttributeSet::Owner`].
    pub fn is_owner(self) -> bool {
        matches!(self, AttributeSet::Owner)
    }
}

impl TryFrom<u8> for AttributeSet {
    type Error = u8;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            1 => Ok(AttributeSet::Owner),
            2 => Ok(AttributeSet::Overlap),
            3 => Ok(AttributeSet::Copy),
            other => Err(other),
        }
    }
}
