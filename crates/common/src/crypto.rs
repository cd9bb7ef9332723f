//! Cryptographic utilities shared across Crewbase crates
//!
//! Provides password hashing and verification behind a capability trait so
//! domain code depends on the contract, not the algorithm. The production
//! implementation uses Argon2id and stores credentials as PHC strings.

use argon2::password_hash::{rand_core::OsRng, PasswordHash, SaltString};
use argon2::{Algorithm, Argon2, Params, PasswordHasher as _, PasswordVerifier, Version};

use crate::config::Config;
use crate::error::{Error, Result};

/// Password hashing capability consumed by domain aggregates.
pub trait PasswordHasher {
    /// Hash a plaintext password into a storable credential string.
    fn hash(&self, plaintext: &str) -> Result<String>;

    /// Check a plaintext password against a stored credential string.
    ///
    /// A malformed stored credential verifies as `false`, never as an error.
    fn verify(&self, plaintext: &str, hash: &str) -> bool;
}

/// Argon2id implementation of [`PasswordHasher`].
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher {
    params: Params,
}

impl Argon2Hasher {
    /// Create a hasher with the library's recommended cost parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a hasher with cost parameters taken from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let params = Params::new(
            config.argon2_memory_kib,
            config.argon2_iterations,
            config.argon2_parallelism,
            None,
        )
        .map_err(|e| Error::Crypto(format!("Invalid Argon2 parameters: {}", e)))?;

        Ok(Self { params })
    }

    #[mutants::skip] // Delegates to Argon2::new with a fixed algorithm and version
    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, plaintext: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| Error::Crypto(format!("Password hashing failed: {}", e)))?;

        Ok(hash.to_string())
    }

    fn verify(&self, plaintext: &str, hash: &str) -> bool {
        let parsed = match PasswordHash::new(hash) {
            Ok(parsed) => parsed,
            Err(_) => {
                tracing::warn!("stored password hash is not a valid PHC string");
                return false;
            }
        };

        self.argon2()
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok()
    }
}
