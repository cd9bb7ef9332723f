//! Domain events emitted by the User aggregate
//!
//! Events accumulate on the aggregate during a unit of work; the application
//! layer drains and publishes them afterwards. The aggregate never dispatches
//! events itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Events recorded by User aggregate operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UserEvent {
    /// A new user was created
    UserCreated {
        user_id: Uuid,
        occurred_at: DateTime<Utc>,
    },

    /// Profile fields were overwritten
    UserUpdated {
        user_id: Uuid,
        occurred_at: DateTime<Utc>,
    },

    /// A password login succeeded
    UserLoggedIn {
        user_id: Uuid,
        occurred_at: DateTime<Utc>,
    },
}

impl UserEvent {
    /// Identifier of the user the event belongs to
    pub fn user_id(&self) -> Uuid {
        match self {
            Self::UserCreated { user_id, .. }
            | Self::UserUpdated { user_id, .. }
            | Self::UserLoggedIn { user_id, .. } => *user_id,
        }
    }

    /// When the event was recorded
    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            Self::UserCreated { occurred_at, .. }
            | Self::UserUpdated { occurred_at, .. }
            | Self::UserLoggedIn { occurred_at, .. } => *occurred_at,
        }
    }
}
