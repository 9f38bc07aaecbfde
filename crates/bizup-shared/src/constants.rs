//! Application-wide constants

pub const SERVICE_NAME: &str = "BIZUP API";
pub const DEFAULT_API_PREFIX: &str = "/api/v1";
pub const DEFAULT_PAGE_SIZE: u32 = 1000;
pub const MAX_PAGE_SIZE: u32 = 10_000;
pub const DEFAULT_TOKEN_PREFIX: &str = "bizup-token-";
pub const LOG_PREVIEW_CHARS: usize = 500;
