//! Loading and error state shared by a group of write operations.

use std::fmt;
use std::future::Future;

use tokio::sync::watch;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MutationState {
    pub loading: bool,
    pub error: Option<String>,
}

/// Wraps write calls: loading is set for the duration of each call, the last
/// failure message is kept, and the error is still returned to the caller.
#[derive(Debug)]
pub struct Mutation {
    name: &'static str,
    state: watch::Sender<MutationState>,
}

impl Mutation {
    pub fn new(name: &'static str) -> Self {
        let (state, _) = watch::channel(MutationState::default());
        Self { name, state }
    }

    pub async fn run<T, E, Fut>(&self, fut: Fut) -> Result<T, E>
    where
        Fut: Future<Output = Result<T, E>>,
        E: fmt::Display,
    {
        self.state.send_modify(|state| {
            state.loading = true;
            state.error = None;
        });

        let result = fut.await;

        self.state.send_modify(|state| {
            if let Err(e) = &result {
                debug!(mutation = self.name, error = %e, "Mutation failed");
                state.error = Some(e.to_string());
            }
            state.loading = false;
        });
        result
    }

    pub fn clear_error(&self) {
        self.state.send_modify(|state| state.error = None);
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn snapshot(&self) -> MutationState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<MutationState> {
        self.state.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_loading_only_during_call() {
        let mutation = Mutation::new("test");
        let result: Result<u8, String> = mutation
            .run(async {
                assert!(mutation.is_loading());
                Ok(7)
            })
            .await;
        assert_eq!(result, Ok(7));
        assert_eq!(mutation.snapshot(), MutationState::default());
    }

    #[tokio::test]
    async fn test_failure_is_stored_and_returned() {
        let mutation = Mutation::new("test");
        let result: Result<(), String> = mutation.run(async { Err("boom".to_string()) }).await;
        assert_eq!(result, Err("boom".to_string()));

        let state = mutation.snapshot();
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("boom"));

        let _: Result<(), String> = mutation.run(async { Ok(()) }).await;
        assert_eq!(mutation.snapshot().error, None);

        let _: Result<(), String> = mutation.run(async { Err("again".to_string()) }).await;
        mutation.clear_error();
        assert_eq!(mutation.snapshot().error, None);
    }
}
