//! Domain entities for the Crewbase users domain
//!
//! The User aggregate owns its identity, profile, password credential,
//! status, role assignments, and a buffer of domain events. All mutation
//! goes through its own operations; the surrounding application layer drains
//! the event buffer after each unit of work.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crewbase_common::{Error, PasswordHasher, Result};

use crate::domain::auth::{AuthError, LoginResult, LOGIN_SUCCESS_MESSAGE};
use crate::domain::events::UserEvent;
use crate::domain::state::UserStatus;

/// Role assignment entity - association between a User and a role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub role_id: Uuid,
    pub assigned_at: DateTime<Utc>,
}

impl RoleAssignment {
    /// Create a new role assignment
    pub fn new(role_id: Uuid) -> Self {
        RoleAssignment {
            role_id,
            assigned_at: Utc::now(),
        }
    }
}

/// User aggregate
#[derive(Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub password_hash: String,
    pub status_id: i32,
    pub roles: Vec<RoleAssignment>,
    pub created_at: DateTime<Utc>,
    domain_events: Vec<UserEvent>,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("phone_number", &self.phone_number)
            .field("password_hash", &"[REDACTED]")
            .field("status_id", &self.status_id)
            .field("roles", &self.roles)
            .field("created_at", &self.created_at)
            .field("domain_events", &self.domain_events)
            .finish()
    }
}

impl User {
    /// Create a new user with a freshly hashed credential.
    ///
    /// The plaintext password is hashed through the injected capability and
    /// never stored. New users start Active with no role assignments, and a
    /// `UserCreated` event is recorded.
    pub fn create(
        id: Uuid,
        first_name: String,
        last_name: String,
        email: String,
        phone_number: String,
        plaintext_password: &str,
        hasher: &dyn PasswordHasher,
    ) -> Result<Self> {
        let password_hash = hasher.hash(plaintext_password)?;
        let now = Utc::now();

        let mut user = User {
            id,
            first_name,
            last_name,
            email,
            phone_number,
            password_hash,
            status_id: UserStatus::Active.id(),
            roles: Vec::new(),
            created_at: now,
            domain_events: Vec::new(),
        };

        user.record(UserEvent::UserCreated {
            user_id: id,
            occurred_at: now,
        });

        Ok(user)
    }

    /// Overwrite the profile fields and record a `UserUpdated` event.
    ///
    /// Fields are replaced unconditionally; this layer does not validate
    /// formats.
    pub fn update(
        &mut self,
        first_name: String,
        last_name: String,
        email: String,
        phone_number: String,
    ) {
        self.first_name = first_name;
        self.last_name = last_name;
        self.email = email;
        self.phone_number = phone_number;

        self.record(UserEvent::UserUpdated {
            user_id: self.id,
            occurred_at: Utc::now(),
        });
    }

    /// Set the status code. Any integer is accepted; no event is recorded.
    pub fn status_change(&mut self, new_status_id: i32) {
        self.status_id = new_status_id;
    }

    /// Current status, if the stored code maps to a known one
    pub fn status(&self) -> Option<UserStatus> {
        UserStatus::from_id(self.status_id)
    }

    /// Check if the account is active
    pub fn is_active(&self) -> bool {
        self.status_id == UserStatus::Active.id()
    }

    /// Add a role assignment. Assigning a role the user already holds is a
    /// no-op.
    pub fn assign_role(&mut self, role_id: Uuid) {
        if self.has_role(role_id) {
            return;
        }
        self.roles.push(RoleAssignment::new(role_id));
    }

    /// Remove the role assignment matching `role_id`, if present
    pub fn remove_role(&mut self, role_id: Uuid) {
        self.roles.retain(|r| r.role_id != role_id);
    }

    /// Check if the user holds a role
    pub fn has_role(&self, role_id: Uuid) -> bool {
        self.roles.iter().any(|r| r.role_id == role_id)
    }

    /// Attempt a password login.
    ///
    /// The status gate runs before password verification: an inactive
    /// account fails with `Autentication.NotActive` even when the password
    /// is correct. A `UserLoggedIn` event is recorded only on success.
    pub fn login(&mut self, plaintext_password: &str, hasher: &dyn PasswordHasher) -> LoginResult {
        if !self.is_active() {
            tracing::warn!(user_id = %self.id, "login rejected: account not active");
            return Err(AuthError::NotActive);
        }

        if !hasher.verify(plaintext_password, &self.password_hash) {
            tracing::warn!(user_id = %self.id, "login rejected: password mismatch");
            return Err(AuthError::PasswordMismatch);
        }

        self.record(UserEvent::UserLoggedIn {
            user_id: self.id,
            occurred_at: Utc::now(),
        });
        tracing::debug!(user_id = %self.id, "login succeeded");

        Ok(LOGIN_SUCCESS_MESSAGE)
    }

    /// Events recorded since the last drain, in emission order
    pub fn domain_events(&self) -> &[UserEvent] {
        &self.domain_events
    }

    /// Drain the event buffer for publication
    pub fn take_events(&mut self) -> Vec<UserEvent> {
        std::mem::take(&mut self.domain_events)
    }

    fn record(&mut self, event: UserEvent) {
        self.domain_events.push(event);
    }

    /// Validate invariants
    pub fn validate(&self) -> Result<()> {
        if self.password_hash.is_empty() {
            return Err(Error::Validation(
                "Password hash cannot be empty".to_string(),
            ));
        }

        for (i, role) in self.roles.iter().enumerate() {
            if self.roles[i + 1..]
                .iter()
                .any(|other| other.role_id == role.role_id)
            {
                return Err(Error::Validation(format!(
                    "Duplicate role assignment: {}",
                    role.role_id
                )));
            }
        }

        Ok(())
    }
}
