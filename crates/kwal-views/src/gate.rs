//! Employer-only access check.
//!
//! `Checking` until the identity provider has loaded and the current user's
//! role is known. Signed-out visitors are sent to sign-in with a return path;
//! anyone who cannot manage jobs is sent home.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use kwal_client::UsersService;

use crate::context::AppContext;
use crate::error::{ViewError, ViewResult};
use crate::routes;
use crate::session::{Navigator, Session};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GateState {
    #[default]
    Checking,
    Allowed,
    Denied,
}

/// What a gated view produces for the current state.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered<T> {
    Placeholder,
    Nothing,
    Children(T),
}

impl<T> Rendered<T> {
    pub fn children(self) -> Option<T> {
        match self {
            Self::Children(children) => Some(children),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Rendered<U> {
        match self {
            Self::Placeholder => Rendered::Placeholder,
            Self::Nothing => Rendered::Nothing,
            Self::Children(children) => Rendered::Children(f(children)),
        }
    }
}

pub struct EmployerGate {
    users: UsersService,
    session: Arc<dyn Session>,
    navigator: Arc<dyn Navigator>,
    current_path: String,
    state: watch::Sender<GateState>,
}

impl EmployerGate {
    pub fn new(ctx: &AppContext, current_path: impl Into<String>) -> Self {
        let (state, _) = watch::channel(GateState::Checking);
        Self {
            users: ctx.users.clone(),
            session: Arc::clone(&ctx.session),
            navigator: Arc::clone(&ctx.navigator),
            current_path: current_path.into(),
            state,
        }
    }

    pub fn state(&self) -> GateState {
        *self.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<GateState> {
        self.state.subscribe()
    }

    /// Resolve the gate. Safe to call again once the session has loaded.
    pub async fn check(&self) -> GateState {
        if !self.session.is_loaded() {
            debug!(path = %self.current_path, "Session still loading");
            return self.set(GateState::Checking);
        }

        if !self.session.is_signed_in() {
            info!(path = %self.current_path, "Signed out; redirecting to sign-in");
            self.navigator.replace(&routes::sign_in(&self.current_path));
            return self.set(GateState::Checking);
        }

        let allowed = match self.users.me().await {
            Ok(Some(user)) => user.can_manage_jobs(),
            Ok(None) => false,
            Err(e) => {
                warn!(error = %e, "Failed to load current user for employer check");
                false
            }
        };

        if allowed {
            self.set(GateState::Allowed)
        } else {
            info!(path = %self.current_path, "Not an employer; redirecting home");
            self.navigator.replace(routes::HOME);
            self.set(GateState::Denied)
        }
    }

    /// Build `children` only once access is allowed.
    pub fn render<T>(&self, children: impl FnOnce() -> T) -> Rendered<T> {
        match self.state() {
            GateState::Checking => Rendered::Placeholder,
            GateState::Denied => Rendered::Nothing,
            GateState::Allowed => Rendered::Children(children()),
        }
    }

    pub fn ensure_allowed(&self) -> ViewResult<()> {
        match self.state() {
            GateState::Allowed => Ok(()),
            _ => Err(ViewError::Forbidden),
        }
    }

    fn set(&self, state: GateState) -> GateState {
        self.state.send_replace(state);
        state
    }
}
