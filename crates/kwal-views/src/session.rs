//! Session and navigation seams.
//!
//! Both are injected explicitly; nothing in this crate reads ambient global
//! auth or routing state.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use kwal_client::{TokenError, TokenProvider};

/// The signed-in identity, as reported by the external identity provider.
///
/// Every session is also the token provider for authenticated requests.
pub trait Session: TokenProvider {
    /// False until the identity provider has finished loading.
    fn is_loaded(&self) -> bool;

    fn is_signed_in(&self) -> bool;

    /// Primary email of the signed-in account.
    fn email(&self) -> Option<String>;
}

/// A session with fixed values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticSession {
    loaded: bool,
    token: Option<String>,
    email: Option<String>,
}

impl StaticSession {
    pub fn signed_in(token: impl Into<String>) -> Self {
        Self {
            loaded: true,
            token: Some(token.into()),
            email: None,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            loaded: true,
            token: None,
            email: None,
        }
    }

    /// Identity provider still initializing.
    pub fn loading() -> Self {
        Self::default()
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

#[async_trait]
impl TokenProvider for StaticSession {
    async fn token(&self) -> Result<Option<String>, TokenError> {
        Ok(self.token.clone())
    }
}

impl Session for StaticSession {
    fn is_loaded(&self) -> bool {
        self.loaded
    }

    fn is_signed_in(&self) -> bool {
        self.loaded && self.token.is_some()
    }

    fn email(&self) -> Option<String> {
        self.email.clone()
    }
}

/// Client-side navigation.
pub trait Navigator: Send + Sync {
    /// Go to `route`, replacing the current history entry.
    fn replace(&self, route: &str);
}

/// Keeps every route it was sent to.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    history: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<String> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn current(&self) -> Option<String> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn replace(&self, route: &str) {
        tracing::debug!(route, "Navigating");
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route.to_string());
    }
}
