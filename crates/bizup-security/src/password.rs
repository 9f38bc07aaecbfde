//! Password hashing with Argon2

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::SecurityError;

pub struct PasswordService;

impl PasswordService {
    /// Hashes into a PHC string suitable for `auth.admin_password_hash`.
    pub fn hash(password: &str) -> Result<String, SecurityError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| SecurityError::HashError(e.to_string()))
    }

    pub fn parse(hash: &str) -> Result<PasswordHash<'_>, SecurityError> {
        PasswordHash::new(hash).map_err(|e| SecurityError::InvalidHash(e.to_string()))
    }

    pub fn verify(password: &str, hash: &PasswordHash<'_>) -> bool {
        Argon2::default()
            .verify_password(password.as_bytes(), hash)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let phc = PasswordService::hash("bizup1234").unwrap();
        let parsed = PasswordService::parse(&phc).unwrap();
        assert!(PasswordService::verify("bizup1234", &parsed));
        assert!(!PasswordService::verify("bizup12345", &parsed));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            PasswordService::parse("not-a-hash"),
            Err(SecurityError::InvalidHash(_))
        ));
    }
}
