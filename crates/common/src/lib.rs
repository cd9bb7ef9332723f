//! Shared utilities, configuration, and error handling for Crewbase
//!
//! This crate provides common functionality used across the Crewbase
//! application:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Password hashing behind a capability trait

pub mod config;
pub mod crypto;
pub mod error;

pub use config::Config;
pub use crypto::{Argon2Hasher, PasswordHasher};
pub use error::{Error, Result};
