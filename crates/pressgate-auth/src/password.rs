//! Password hashing and strength policy.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher as _, PasswordVerifier};
use zxcvbn::{zxcvbn, Score};

use pressgate_core::config::auth::AuthConfig;
use pressgate_core::{AppError, AppResult};

/// Argon2id password hashing with per-password salts.
#[derive(Debug, Clone, Default)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hash a password into PHC string format.
    pub fn hash(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;
        Ok(hash.to_string())
    }

    /// Verify a password against a stored PHC hash.
    pub fn verify(&self, password: &str, stored_hash: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(stored_hash)
            .map_err(|e| AppError::internal(format!("Stored password hash is invalid: {e}")))?;
        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

/// Password acceptance rules applied at registration.
///
/// A password must meet the configured minimum length, mix character
/// classes, and score at least 3 out of 4 on the zxcvbn strength estimate.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    min_length: usize,
}

impl PasswordPolicy {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Validate a candidate password, with the user's email fed to the
    /// strength estimator so derived passwords are penalized.
    pub fn validate(&self, password: &str, email: &str) -> AppResult<()> {
        if password.len() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.min_length
            )));
        }
        if !password.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(AppError::validation(
                "Password must contain an uppercase letter",
            ));
        }
        if !password.chars().any(|c| c.is_ascii_lowercase()) {
            return Err(AppError::validation(
                "Password must contain a lowercase letter",
            ));
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(AppError::validation("Password must contain a digit"));
        }

        let estimate = zxcvbn(password, &[email]);
        if estimate.score() < Score::Three {
            return Err(AppError::validation(
                "Password is too weak; avoid common words and patterns",
            ));
        }
        Ok(())
    }
}
