//! Status codes for users domain entities
//!
//! Statuses travel as opaque integer codes; this enum names the values the
//! application knows about. No transition rules apply — any code may be set.

use serde::{Deserialize, Serialize};

/// Known user account statuses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    /// Integer code stored on the aggregate
    pub fn id(self) -> i32 {
        match self {
            Self::Active => 1,
            Self::Inactive => 2,
        }
    }

    /// Map a stored integer code back to a known status
    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            1 => Some(Self::Active),
            2 => Some(Self::Inactive),
            _ => None,
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Inactive => write!(f, "inactive"),
        }
    }
}
