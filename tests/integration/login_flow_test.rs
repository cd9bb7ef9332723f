//! Password login integration tests
//!
//! Drives the status-gated login policy through the public API with the
//! production Argon2 hasher, checking the stable error codes an API layer
//! would translate into responses.

use uuid::Uuid;

use crewbase_common::{Argon2Hasher, Config, PasswordHasher};
use crewbase_users::{AuthError, User, UserEvent, UserStatus, LOGIN_SUCCESS_MESSAGE};

fn create_user(password: &str, hasher: &dyn PasswordHasher) -> User {
    User::create(
        Uuid::new_v4(),
        "John".to_string(),
        "Doe".to_string(),
        "john.doe@example.com".to_string(),
        "1234567890".to_string(),
        password,
        hasher,
    )
    .unwrap()
}

#[test_log::test]
fn test_active_user_logs_in_with_correct_password() {
    let hasher = Argon2Hasher::new();
    let mut user = create_user("password123", &hasher);

    assert_eq!(user.status_id, 1);

    let result = user.login("password123", &hasher);
    assert_eq!(result, Ok(LOGIN_SUCCESS_MESSAGE));
    assert_eq!(result.unwrap(), "Autenticado correctamente");

    let events = user.take_events();
    assert_eq!(
        events
            .iter()
            .filter(|e| matches!(e, UserEvent::UserLoggedIn { .. }))
            .count(),
        1
    );
}

#[test_log::test]
fn test_wrong_password_is_rejected() {
    let hasher = Argon2Hasher::new();
    let mut user = create_user("correct_password", &hasher);

    let result = user.login("wrong_password", &hasher);

    let err = result.unwrap_err();
    assert_eq!(err, AuthError::PasswordMismatch);
    assert_eq!(err.code(), "Autentication.NotMatchPassword");
    assert!(!err.to_string().is_empty());
}

#[test_log::test]
fn test_inactive_user_is_rejected_before_password_check() {
    let hasher = Argon2Hasher::new();
    let mut user = create_user("password123", &hasher);

    user.status_change(UserStatus::Inactive.id());

    // Correct password makes no difference once the account is inactive
    let result = user.login("password123", &hasher);
    assert_eq!(result.unwrap_err().code(), "Autentication.NotActive");

    // Reactivating restores the normal flow
    user.status_change(UserStatus::Active.id());
    assert!(user.login("password123", &hasher).is_ok());
}

#[test_log::test]
fn test_failed_logins_emit_no_events() {
    let hasher = Argon2Hasher::new();
    let mut user = create_user("password123", &hasher);
    user.take_events();

    let _ = user.login("wrong_password", &hasher);
    user.status_change(UserStatus::Inactive.id());
    let _ = user.login("password123", &hasher);

    assert!(user.domain_events().is_empty());
}

#[test_log::test]
fn test_login_with_config_tuned_hasher() {
    // A hasher built from configuration verifies credentials it produced
    let config = Config {
        log_level: "info".to_string(),
        rust_log: "crewbase=debug".to_string(),
        argon2_memory_kib: 8192,
        argon2_iterations: 1,
        argon2_parallelism: 1,
    };
    let hasher = Argon2Hasher::from_config(&config).unwrap();

    let mut user = create_user("password123", &hasher);
    assert_eq!(user.login("password123", &hasher), Ok(LOGIN_SUCCESS_MESSAGE));
    assert_eq!(
        user.login("PASSWORD123", &hasher).unwrap_err(),
        AuthError::PasswordMismatch
    );
}
