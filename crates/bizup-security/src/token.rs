//! Access tokens handed out on admin login

pub trait TokenIssuer: Send + Sync {
    fn issue(&self, username: &str) -> String;
}

/// Deterministic `{prefix}{username}` tokens.
pub struct StaticTokenIssuer {
    prefix: String,
}

impl StaticTokenIssuer {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl TokenIssuer for StaticTokenIssuer {
    fn issue(&self, username: &str) -> String {
        format!("{}{}", self.prefix, username)
    }
}
