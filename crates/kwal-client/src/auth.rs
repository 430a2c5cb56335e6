//! Bearer token seam.
//!
//! The identity provider lives outside this workspace. Anything that can hand
//! out a bearer token implements [`TokenProvider`] and is passed explicitly to
//! the services that need it.

use async_trait::async_trait;
use thiserror::Error;

/// The identity provider could not produce a token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("token unavailable: {0}")]
pub struct TokenError(pub String);

/// Source of bearer tokens.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Current token, or `None` when signed out.
    async fn token(&self) -> Result<Option<String>, TokenError>;
}

/// A fixed token, e.g. from `KWAL_API_TOKEN`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticToken(Option<String>);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

#[async_trait]
impl TokenProvider for StaticToken {
    async fn token(&self) -> Result<Option<String>, TokenError> {
        Ok(self.0.clone())
    }
}
