use std::sync::Arc;

use serde_json::Value;

use kwal_models::{
    Application, ApplicationId, ApplicationPage, ApplicationStatus, ApplicationStatusUpdate,
    NewApplication, PageRequest, ToQueryKey,
};

use super::segment;
use crate::auth::TokenProvider;
use crate::client::ApiClient;
use crate::error::ApiResult;

/// `/api/applications` endpoints. All of them require a token.
#[derive(Clone)]
pub struct ApplicationsService {
    client: ApiClient,
    auth: Arc<dyn TokenProvider>,
}

impl ApplicationsService {
    pub fn new(client: ApiClient, auth: Arc<dyn TokenProvider>) -> Self {
        Self { client, auth }
    }

    fn token(&self) -> Option<Arc<dyn TokenProvider>> {
        Some(Arc::clone(&self.auth))
    }

    pub async fn apply(&self, payload: &NewApplication) -> ApiResult<Option<Application>> {
        self.client
            .post("applications.apply", "/api/applications", payload, self.token())
            .await
    }

    /// The signed-in user's applications; page and limit are always sent.
    pub async fn list_mine(&self, page: &PageRequest) -> ApiResult<Option<ApplicationPage>> {
        let path = page.query_key().append_to("/api/applications/me");
        self.client
            .get("applications.list_mine", &path, self.token())
            .await
    }

    pub async fn get(&self, id: &ApplicationId) -> ApiResult<Option<Application>> {
        let path = format!("/api/applications/{}", segment(id));
        self.client.get("applications.get", &path, self.token()).await
    }

    pub async fn update_status(
        &self,
        id: &ApplicationId,
        status: ApplicationStatus,
    ) -> ApiResult<Option<Application>> {
        let path = format!("/api/applications/{}/status", segment(id));
        self.client
            .patch(
                "applications.update_status",
                &path,
                &ApplicationStatusUpdate { status },
                self.token(),
            )
            .await
    }

    pub async fn withdraw(&self, id: &ApplicationId) -> ApiResult<Option<Value>> {
        let path = format!("/api/applications/{}", segment(id));
        self.client
            .delete("applications.withdraw", &path, self.token())
            .await
    }
}
