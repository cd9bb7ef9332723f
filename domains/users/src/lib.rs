//! Users domain: the User aggregate, role assignments, status, and login

pub mod domain;

// Re-export domain types at the crate root for convenience
pub use domain::auth::{AuthError, LoginResult, LOGIN_SUCCESS_MESSAGE};
pub use domain::entities::{RoleAssignment, User};
pub use domain::events::UserEvent;
pub use domain::state::UserStatus;
