//! # Bizup Core
//!
//! Domain entities, the menu CSV parser, repository traits, and the
//! back-office services built on them.

pub mod csv;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

#[cfg(any(test, feature = "test-helpers"))]
pub mod testing;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
