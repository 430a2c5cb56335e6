use std::sync::Arc;

use serde_json::Value;

use kwal_models::{
    ApplicationPage, JobFilters, JobId, JobListing, JobPage, JobPayload, SearchCriteria,
    ToQueryKey,
};

use super::segment;
use crate::auth::TokenProvider;
use crate::client::ApiClient;
use crate::error::ApiResult;

/// `/api/jobs` endpoints.
#[derive(Clone)]
pub struct JobsService {
    client: ApiClient,
    auth: Arc<dyn TokenProvider>,
}

impl JobsService {
    pub fn new(client: ApiClient, auth: Arc<dyn TokenProvider>) -> Self {
        Self { client, auth }
    }

    fn token(&self) -> Option<Arc<dyn TokenProvider>> {
        Some(Arc::clone(&self.auth))
    }

    /// Public listing with filters.
    pub async fn list(&self, filters: &JobFilters) -> ApiResult<Option<JobPage>> {
        let path = filters.query_key().append_to("/api/jobs");
        self.client.get("jobs.list", &path, None).await
    }

    pub async fn get(&self, id: &JobId) -> ApiResult<Option<JobListing>> {
        let path = format!("/api/jobs/{}", segment(id));
        self.client.get("jobs.get", &path, None).await
    }

    pub async fn create(&self, payload: &JobPayload) -> ApiResult<Option<JobListing>> {
        self.client
            .post("jobs.create", "/api/jobs", payload, self.token())
            .await
    }

    pub async fn update(&self, id: &JobId, payload: &JobPayload) -> ApiResult<Option<JobListing>> {
        let path = format!("/api/jobs/{}", segment(id));
        self.client
            .put("jobs.update", &path, payload, self.token())
            .await
    }

    /// Soft delete; the backend closes the listing.
    pub async fn delete(&self, id: &JobId) -> ApiResult<Option<Value>> {
        let path = format!("/api/jobs/{}", segment(id));
        self.client.delete("jobs.delete", &path, self.token()).await
    }

    /// Applications received for one of the employer's listings.
    pub async fn applications(&self, job_id: &JobId) -> ApiResult<Option<ApplicationPage>> {
        let path = format!("/api/jobs/{}/applications", segment(job_id));
        self.client
            .get("jobs.applications", &path, self.token())
            .await
    }

    /// Listings owned by the signed-in employer.
    pub async fn my_jobs(&self, filters: &JobFilters) -> ApiResult<Option<JobPage>> {
        let path = filters.query_key().append_to("/api/jobs/employer/my-jobs");
        self.client.get("jobs.my_jobs", &path, self.token()).await
    }

    pub async fn search(&self, criteria: &SearchCriteria) -> ApiResult<Option<JobPage>> {
        self.client
            .post("jobs.search", "/api/jobs/search", criteria, None)
            .await
    }
}
