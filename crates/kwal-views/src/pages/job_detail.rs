use std::sync::Arc;

use kwal_models::{Application, ApplyForm, JobId, JobListing};

use crate::cards::JobDetail;
use crate::context::AppContext;
use crate::error::{ViewError, ViewResult};
use crate::hooks::{job_query, ApplicationMutations};
use crate::mutation::MutationState;
use crate::query::Query;
use crate::routes;
use crate::session::{Navigator, Session};

pub const APPLIED_MESSAGE: &str = "Application submitted successfully";

#[derive(Debug, Clone, PartialEq)]
pub struct JobDetailView {
    pub job: Option<JobDetail>,
    pub not_found: bool,
    pub loading: bool,
    pub error: Option<String>,
    pub notice: Option<&'static str>,
    pub apply: MutationState,
}

/// A single listing at `/jobs/{id}` with the apply form.
pub struct JobDetailPage {
    id: JobId,
    query: Query<JobId, JobListing>,
    mutations: ApplicationMutations,
    session: Arc<dyn Session>,
    navigator: Arc<dyn Navigator>,
    notice: Option<&'static str>,
}

impl JobDetailPage {
    pub fn new(ctx: &AppContext, id: JobId) -> Self {
        Self {
            id,
            query: job_query(ctx.jobs.clone()),
            mutations: ApplicationMutations::new(ctx.applications.clone()),
            session: Arc::clone(&ctx.session),
            navigator: Arc::clone(&ctx.navigator),
            notice: None,
        }
    }

    pub fn query(&self) -> &Query<JobId, JobListing> {
        &self.query
    }

    pub async fn load(&self) {
        self.query.mount(self.id.clone()).await;
    }

    /// Validate and submit an application for this listing.
    ///
    /// Signed-out visitors are sent to sign-in and nothing is submitted.
    pub async fn apply(&mut self, form: &ApplyForm) -> ViewResult<Option<Application>> {
        self.notice = None;
        if !self.session.is_signed_in() {
            self.navigator
                .replace(&routes::sign_in(&routes::job(&self.id)));
            return Err(ViewError::SignedOut);
        }

        let payload = form.validate(&self.id)?;
        let application = self.mutations.apply(&payload).await?;
        self.notice = Some(APPLIED_MESSAGE);
        Ok(application)
    }

    pub fn view(&self) -> JobDetailView {
        self.query.with_state(|state| JobDetailView {
            job: state.data.as_ref().map(JobDetail::from),
            not_found: state.is_empty() && self.query.key().is_some(),
            loading: state.loading,
            error: state.error.clone(),
            notice: self.notice,
            apply: self.mutations.state(),
        })
    }
}
