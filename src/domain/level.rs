//! Coarseness classification of a region

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Level of a region in the hierarchy, ordered `World < Country < Province`.
///
/// Persisted as its rank: 1 = world, 2 = country, 3 = province.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Level {
    World = 1,
    Country = 2,
    /// Could be a province, a state, or a city
    Province = 3,
}

impl Level {
    /// Next coarser level, clamped at `World`.
    pub fn parent(self) -> Level {
        match self {
            Level::Province => Level::Country,
            Level::Country | Level::World => Level::World,
        }
    }

    pub fn rank(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Level {
    type Error = DomainError;

    fn try_from(rank: u8) -> Result<Self, Self::Error> {
        match rank {
            1 => Ok(Level::World),
            2 => Ok(Level::Country),
            3 => Ok(Level::Province),
            other => Err(DomainError::InvalidLevel(other)),
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.rank()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Level::World => "world",
            Level::Country => "country",
            Level::Province => "province",
        };
        f.write_str(label)
    }
}
