//! Queries and mutations bound to the resource services.

use serde_json::Value;
use tokio::sync::watch;

use kwal_client::{ApiResult, ApplicationsService, JobsService, UsersService};
use kwal_models::{
    Application, ApplicationId, ApplicationPage, ApplicationStatus, JobFilters, JobId,
    JobListing, JobPage, JobPayload, NewApplication, PageRequest, User, UserId,
};

use crate::mutation::{Mutation, MutationState};
use crate::query::Query;

pub fn jobs_query(jobs: JobsService) -> Query<JobFilters, JobPage> {
    Query::from_fn("jobs", move |filters: JobFilters| {
        let jobs = jobs.clone();
        async move { jobs.list(&filters).await }
    })
}

pub fn job_query(jobs: JobsService) -> Query<JobId, JobListing> {
    Query::from_fn("job", move |id: JobId| {
        let jobs = jobs.clone();
        async move { jobs.get(&id).await }
    })
}

pub fn my_jobs_query(jobs: JobsService) -> Query<JobFilters, JobPage> {
    Query::from_fn("my_jobs", move |filters: JobFilters| {
        let jobs = jobs.clone();
        async move { jobs.my_jobs(&filters).await }
    })
}

pub fn job_applications_query(jobs: JobsService) -> Query<JobId, ApplicationPage> {
    Query::from_fn("job_applications", move |id: JobId| {
        let jobs = jobs.clone();
        async move { jobs.applications(&id).await }
    })
}

pub fn my_applications_query(
    applications: ApplicationsService,
) -> Query<PageRequest, ApplicationPage> {
    Query::from_fn("my_applications", move |page: PageRequest| {
        let applications = applications.clone();
        async move { applications.list_mine(&page).await }
    })
}

pub fn me_query(users: UsersService) -> Query<(), User> {
    Query::from_fn("me", move |()| {
        let users = users.clone();
        async move { users.me().await }
    })
}

pub fn user_query(users: UsersService) -> Query<UserId, User> {
    Query::from_fn("user", move |id: UserId| {
        let users = users.clone();
        async move { users.get(&id).await }
    })
}

/// Listing writes for employers.
pub struct JobMutations {
    jobs: JobsService,
    mutation: Mutation,
}

impl JobMutations {
    pub fn new(jobs: JobsService) -> Self {
        Self {
            jobs,
            mutation: Mutation::new("jobs"),
        }
    }

    pub async fn create(&self, payload: &JobPayload) -> ApiResult<Option<JobListing>> {
        self.mutation.run(self.jobs.create(payload)).await
    }

    pub async fn update(&self, id: &JobId, payload: &JobPayload) -> ApiResult<Option<JobListing>> {
        self.mutation.run(self.jobs.update(id, payload)).await
    }

    pub async fn delete(&self, id: &JobId) -> ApiResult<Option<Value>> {
        self.mutation.run(self.jobs.delete(id)).await
    }

    pub async fn applications(&self, id: &JobId) -> ApiResult<Option<ApplicationPage>> {
        self.mutation.run(self.jobs.applications(id)).await
    }

    pub fn state(&self) -> MutationState {
        self.mutation.snapshot()
    }

    pub fn clear_error(&self) {
        self.mutation.clear_error();
    }

    pub fn subscribe(&self) -> watch::Receiver<MutationState> {
        self.mutation.subscribe()
    }
}

/// Application writes for job seekers and employers.
pub struct ApplicationMutations {
    applications: ApplicationsService,
    mutation: Mutation,
}

impl ApplicationMutations {
    pub fn new(applications: ApplicationsService) -> Self {
        Self {
            applications,
            mutation: Mutation::new("applications"),
        }
    }

    pub async fn apply(&self, payload: &NewApplication) -> ApiResult<Option<Application>> {
        self.mutation.run(self.applications.apply(payload)).await
    }

    pub async fn withdraw(&self, id: &ApplicationId) -> ApiResult<Option<Value>> {
        self.mutation.run(self.applications.withdraw(id)).await
    }

    pub async fn update_status(
        &self,
        id: &ApplicationId,
        status: ApplicationStatus,
    ) -> ApiResult<Option<Application>> {
        self.mutation
            .run(self.applications.update_status(id, status))
            .await
    }

    pub fn state(&self) -> MutationState {
        self.mutation.snapshot()
    }

    pub fn clear_error(&self) {
        self.mutation.clear_error();
    }

    pub fn subscribe(&self) -> watch::Receiver<MutationState> {
        self.mutation.subscribe()
    }
}
