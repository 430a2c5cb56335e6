use std::sync::Arc;

use kwal_models::{ProfilePayload, User, UserId};

use super::segment;
use crate::auth::TokenProvider;
use crate::client::ApiClient;
use crate::error::ApiResult;

/// `/api/users` endpoints.
#[derive(Clone)]
pub struct UsersService {
    client: ApiClient,
    auth: Arc<dyn TokenProvider>,
}

impl UsersService {
    pub fn new(client: ApiClient, auth: Arc<dyn TokenProvider>) -> Self {
        Self { client, auth }
    }

    fn token(&self) -> Option<Arc<dyn TokenProvider>> {
        Some(Arc::clone(&self.auth))
    }

    /// The signed-in account; `None` until a profile has been created.
    pub async fn me(&self) -> ApiResult<Option<User>> {
        self.client.get("users.me", "/api/users/me", self.token()).await
    }

    pub async fn create_me(&self, payload: &ProfilePayload) -> ApiResult<Option<User>> {
        self.client
            .post("users.create_me", "/api/users/me", payload, self.token())
            .await
    }

    pub async fn update_me(&self, payload: &ProfilePayload) -> ApiResult<Option<User>> {
        self.client
            .put("users.update_me", "/api/users/me", payload, self.token())
            .await
    }

    /// Public profile of another user.
    pub async fn get(&self, id: &UserId) -> ApiResult<Option<User>> {
        let path = format!("/api/users/{}", segment(id));
        self.client.get("users.get", &path, None).await
    }
}
