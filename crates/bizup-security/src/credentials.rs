//! Admin credential verification

use std::sync::Arc;

use bizup_shared::config::AuthSettings;
use tracing::info;

use crate::error::SecurityError;
use crate::password::PasswordService;

pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Compares against configured plaintext credentials.
pub struct StaticCredentialVerifier {
    username: String,
    password: String,
}

impl StaticCredentialVerifier {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl CredentialVerifier for StaticCredentialVerifier {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

/// Verifies the password against an Argon2 PHC string.
pub struct HashedCredentialVerifier {
    username: String,
    password_hash: String,
}

impl HashedCredentialVerifier {
    /// Fails when `password_hash` is not a PHC string.
    pub fn new(
        username: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Result<Self, SecurityError> {
        let password_hash = password_hash.into();
        PasswordService::parse(&password_hash)?;
        Ok(Self {
            username: username.into(),
            password_hash,
        })
    }
}

impl CredentialVerifier for HashedCredentialVerifier {
    fn verify(&self, username: &str, password: &str) -> bool {
        if username != self.username {
            return false;
        }
        match PasswordService::parse(&self.password_hash) {
            Ok(hash) => PasswordService::verify(password, &hash),
            Err(_) => false,
        }
    }
}

/// Hashed verification when a hash is configured, plaintext otherwise.
pub fn verifier_from_settings(
    settings: &AuthSettings,
) -> Result<Arc<dyn CredentialVerifier>, SecurityError> {
    match settings.admin_password_hash.as_deref().filter(|h| !h.is_empty()) {
        Some(hash) => {
            info!("Admin login uses hashed password");
            Ok(Arc::new(HashedCredentialVerifier::new(
                settings.admin_username.clone(),
                hash,
            )?))
        }
        None => Ok(Arc::new(StaticCredentialVerifier::new(
            settings.admin_username.clone(),
            settings.admin_password.clone(),
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(hash: Option<String>) -> AuthSettings {
        AuthSettings {
            admin_username: "admin".to_string(),
            admin_password: "bizup1234".to_string(),
            admin_password_hash: hash,
            token_prefix: "bizup-token-".to_string(),
        }
    }

    #[test]
    fn test_static_verifier() {
        let verifier = verifier_from_settings(&settings(None)).unwrap();
        assert!(verifier.verify("admin", "bizup1234"));
        assert!(!verifier.verify("admin", "wrong"));
        assert!(!verifier.verify("root", "bizup1234"));
    }

    #[test]
    fn test_hash_takes_precedence() {
        let hash = PasswordService::hash("s3cret").unwrap();
        let verifier = verifier_from_settings(&settings(Some(hash))).unwrap();
        assert!(verifier.verify("admin", "s3cret"));
        assert!(!verifier.verify("admin", "bizup1234"));
    }

    #[test]
    fn test_invalid_hash_is_rejected_at_startup() {
        assert!(verifier_from_settings(&settings(Some("plain".to_string()))).is_err());
    }
}
