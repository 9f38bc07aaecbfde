//! Security errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SecurityError {
    #[error("Hash error: {0}")]
    HashError(String),

    #[error("Invalid password hash: {0}")]
    InvalidHash(String),
}
