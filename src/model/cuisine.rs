//! The cuisine filter: the single dimension restaurants can be narrowed by.

use crate::framework::SyncError;
use crate::model::Restaurant;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe cuisine selector.
///
/// Only the codes offered by the selection control are valid. Code `0` is the sentinel
/// meaning "no filter".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct CuisineFilter(u32);

impl CuisineFilter {
    pub const ALL: Self = Self(0);
    pub const PERUVIAN: Self = Self(1);
    pub const ITALIAN: Self = Self(2);
    pub const CHILEAN: Self = Self(3);

    /// Every selectable filter, in selection-control order.
    pub const OPTIONS: [Self; 4] = [Self::ALL, Self::PERUVIAN, Self::ITALIAN, Self::CHILEAN];

    pub fn code(self) -> u32 {
        self.0
    }

    pub fn is_all(self) -> bool {
        self == Self::ALL
    }

    /// Whether `restaurant` belongs in the result set for this filter.
    pub fn matches(self, restaurant: &Restaurant) -> bool {
        self.is_all() || restaurant.cuisine == self.0
    }
}

impl Default for CuisineFilter {
    fn default() -> Self {
        Self::ALL
    }
}

impl TryFrom<u32> for CuisineFilter {
    type Error = SyncError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        Self::OPTIONS
            .into_iter()
            .find(|option| option.0 == code)
            .ok_or(SyncError::UnknownFilter(code))
    }
}

impl From<CuisineFilter> for u32 {
    fn from(filter: CuisineFilter) -> Self {
        filter.0
    }
}

impl Display for CuisineFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match *self {
            Self::ALL => "all",
            Self::PERUVIAN => "peruvian",
            Self::ITALIAN => "italian",
            Self::CHILEAN => "chilean",
            _ => "unknown",
        };
        f.write_str(name)
    }
}
