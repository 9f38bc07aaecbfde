//! # Bizup Security
//!
//! Admin credential verification, password hashing and access tokens.

pub mod credentials;
pub mod error;
pub mod password;
pub mod token;

pub use credentials::{
    verifier_from_settings, CredentialVerifier, HashedCredentialVerifier,
    StaticCredentialVerifier,
};
pub use error::SecurityError;
pub use password::PasswordService;
pub use token::{StaticTokenIssuer, TokenIssuer};
