//! # Bizup API
//!
//! HTTP handlers, DTOs, error mapping, and the router for the back office.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
