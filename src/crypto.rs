//! Password hashing logic.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{
    PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
};
use argon2::{Argon2, Params, Version};
use validator::{ValidationError, ValidationErrors};

use crate::config::Argon2 as ArgonConfig;

type Result<T> = std::result::Result<T, CryptoError>;

#[derive(thiserror::Error, Debug)]
pub enum CryptoError {
    #[error("argon2 error: {0}")]
    Argon2(String),
}

/// Password manager that uses Argon2id and PHC string format for hashing and
/// verification.
pub struct PasswordManager {
    params: Params,
}

impl PasswordManager {
    /// Create a new [`PasswordManager`].
    pub fn new(config: Option<ArgonConfig>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let params = Params::new(
            config.memory_cost,
            config.iterations,
            config.parallelism,
            Some(config.hash_length),
        )
        .map_err(|err| CryptoError::Argon2(err.to_string()))?;

        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2 {
        Argon2::new(
            argon2::Algorithm::Argon2id,
            Version::V0x13,
            self.params.clone(),
        )
    }

    /// Hash password using Argon2id.
    pub fn hash_password(&self, password: impl AsRef<[u8]>) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()
            .hash_password(password.as_ref(), &salt)
            .map_err(|e| CryptoError::Argon2(e.to_string()))?;

        Ok(hash.to_string())
    }

    fn invalid_password() -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        errors.add(
            "password",
            ValidationError::new("invalid_password")
                .with_message("Invalid password.".into()),
        );
        errors
    }

    /// Verify password against a PHC.
    pub fn verify_password(
        &self,
        password: impl AsRef<[u8]>,
        phc_hash: impl ToString,
    ) -> std::result::Result<(), ValidationErrors> {
        let phc_hash = phc_hash.to_string();

        let parsed = PasswordHash::new(&phc_hash)
            .map_err(|_| Self::invalid_password())?;

        self.argon2()
            .verify_password(password.as_ref(), &parsed)
            .map_err(|_| Self::invalid_password())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_params() -> Option<ArgonConfig> {
        Some(ArgonConfig {
            memory_cost: 1024,
            iterations: 1,
            parallelism: 1,
            hash_length: 32,
        })
    }

    #[test]
    fn test_hash_then_verify() {
        let pwd = PasswordManager::new(fast_params()).unwrap();

        let hash = pwd.hash_password("password123").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(pwd.verify_password("password123", &hash).is_ok());
        assert!(pwd.verify_password("password124", &hash).is_err());
    }

    #[test]
    fn test_hashes_are_salted() {
        let pwd = PasswordManager::new(fast_params()).unwrap();

        let first = pwd.hash_password("adminpass").unwrap();
        let second = pwd.hash_password("adminpass").unwrap();
        assert_ne!(first, second);
        assert!(pwd.verify_password("adminpass", &first).is_ok());
        assert!(pwd.verify_password("adminpass", &second).is_ok());
    }

    #[test]
    fn test_garbage_hash_is_rejected() {
        let pwd = PasswordManager::new(fast_params()).unwrap();

        assert!(pwd.verify_password("password123", "not-a-phc").is_err());
    }
}
