//! Employer dashboard pages. All of them sit behind the [`EmployerGate`].

use std::sync::Arc;

use kwal_models::{
    ApplicationId, ApplicationPage, ApplicationStatus, JobFilters, JobForm, JobId, JobListing,
    JobPage, Pager, DASHBOARD_PAGE_SIZE,
};

use super::{first_error, visible_pager};
use crate::cards::{ApplicantRow, JobCard};
use crate::context::AppContext;
use crate::error::ViewResult;
use crate::gate::{EmployerGate, GateState, Rendered};
use crate::hooks::{
    job_applications_query, job_query, my_jobs_query, ApplicationMutations, JobMutations,
};
use crate::mutation::MutationState;
use crate::query::Query;
use crate::routes;
use crate::session::Navigator;

pub const NO_POSTED_JOBS_MESSAGE: &str = "You haven't posted any jobs yet.";
pub const NO_APPLICANTS_MESSAGE: &str = "No applications yet.";

#[derive(Debug, Clone, PartialEq)]
pub struct EmployerJobsView {
    pub cards: Vec<JobCard>,
    pub pager: Option<Pager>,
    pub empty_message: Option<&'static str>,
    pub error: Option<String>,
    pub loading: bool,
}

/// The employer's own listings at `/dashboard/jobs`.
pub struct EmployerJobsPage {
    gate: EmployerGate,
    filters: JobFilters,
    query: Query<JobFilters, JobPage>,
    mutations: JobMutations,
}

impl EmployerJobsPage {
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            gate: EmployerGate::new(ctx, routes::MY_JOBS),
            filters: JobFilters::with_limit(DASHBOARD_PAGE_SIZE),
            query: my_jobs_query(ctx.jobs.clone()),
            mutations: JobMutations::new(ctx.jobs.clone()),
        }
    }

    pub fn gate(&self) -> &EmployerGate {
        &self.gate
    }

    pub fn query(&self) -> &Query<JobFilters, JobPage> {
        &self.query
    }

    /// Run the gate and, once allowed, load the listings.
    pub async fn open(&self) -> GateState {
        let state = self.gate.check().await;
        if state == GateState::Allowed {
            self.query.mount(self.filters.clone()).await;
        }
        state
    }

    pub async fn go_to_page(&mut self, page: u32) -> ViewResult<bool> {
        self.gate.ensure_allowed()?;
        let page = page.clamp(1, self.pager().total_pages);
        self.filters = self.filters.with_page(page);
        Ok(self.query.set_key(self.filters.clone()).await)
    }

    /// Close a listing, then reload the list.
    pub async fn close_job(&self, id: &JobId) -> ViewResult<()> {
        self.gate.ensure_allowed()?;
        self.mutations.delete(id).await?;
        self.query.refetch().await;
        Ok(())
    }

    pub fn pager(&self) -> Pager {
        let total_pages = self
            .query
            .with_state(|state| {
                state
                    .data
                    .as_ref()
                    .map(|page| page.total_pages(self.filters.limit))
            })
            .unwrap_or(1);
        Pager::new(self.filters.page, total_pages)
    }

    pub fn view(&self) -> Rendered<EmployerJobsView> {
        self.gate.render(|| {
            let pager = visible_pager(self.pager());
            let mutation = self.mutations.state();
            self.query.with_state(|state| {
                let cards: Vec<JobCard> = state
                    .data
                    .as_ref()
                    .map(|page| page.jobs.iter().map(JobCard::from).collect())
                    .unwrap_or_default();
                let empty = !state.loading && state.error.is_none() && cards.is_empty();
                EmployerJobsView {
                    pager,
                    empty_message: empty.then_some(NO_POSTED_JOBS_MESSAGE),
                    error: first_error(state.error.clone(), mutation.error),
                    loading: state.loading,
                    cards,
                }
            })
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApplicantsView {
    pub rows: Vec<ApplicantRow>,
    pub empty_message: Option<&'static str>,
    pub error: Option<String>,
    pub loading: bool,
    pub updating: bool,
}

/// Applications received for one listing.
pub struct JobApplicantsPage {
    gate: EmployerGate,
    job_id: JobId,
    query: Query<JobId, ApplicationPage>,
    mutations: ApplicationMutations,
}

impl JobApplicantsPage {
    pub fn new(ctx: &AppContext, job_id: JobId) -> Self {
        Self {
            gate: EmployerGate::new(ctx, routes::job_applicants(&job_id)),
            job_id,
            query: job_applications_query(ctx.jobs.clone()),
            mutations: ApplicationMutations::new(ctx.applications.clone()),
        }
    }

    pub fn gate(&self) -> &EmployerGate {
        &self.gate
    }

    pub fn query(&self) -> &Query<JobId, ApplicationPage> {
        &self.query
    }

    pub async fn open(&self) -> GateState {
        let state = self.gate.check().await;
        if state == GateState::Allowed {
            self.query.mount(self.job_id.clone()).await;
        }
        state
    }

    /// Move an application to `status`, then reload.
    pub async fn update_status(
        &self,
        id: &ApplicationId,
        status: ApplicationStatus,
    ) -> ViewResult<()> {
        self.gate.ensure_allowed()?;
        self.mutations.update_status(id, status).await?;
        self.query.refetch().await;
        Ok(())
    }

    pub fn view(&self) -> Rendered<ApplicantsView> {
        self.gate.render(|| {
            let mutation = self.mutations.state();
            self.query.with_state(|state| {
                let mut applications: Vec<_> = state
                    .data
                    .as_ref()
                    .map(|page| page.data.iter().collect())
                    .unwrap_or_default();
                // Newest first; undated entries last.
                applications.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
                let rows: Vec<ApplicantRow> =
                    applications.into_iter().map(ApplicantRow::from).collect();
                let empty = !state.loading && state.error.is_none() && rows.is_empty();
                ApplicantsView {
                    empty_message: empty.then_some(NO_APPLICANTS_MESSAGE),
                    error: first_error(state.error.clone(), mutation.error),
                    loading: state.loading,
                    updating: mutation.loading,
                    rows,
                }
            })
        })
    }
}

/// Create form at `/dashboard/jobs/new`, edit form at `/dashboard/jobs/{id}/edit`.
pub struct JobEditorPage {
    gate: EmployerGate,
    editing: Option<JobId>,
    query: Query<JobId, JobListing>,
    mutations: JobMutations,
    navigator: Arc<dyn Navigator>,
    form: JobForm,
}

impl JobEditorPage {
    pub fn create(ctx: &AppContext) -> Self {
        Self::build(ctx, None, routes::NEW_JOB.to_string())
    }

    pub fn edit(ctx: &AppContext, id: JobId) -> Self {
        let path = routes::edit_job(&id);
        Self::build(ctx, Some(id), path)
    }

    fn build(ctx: &AppContext, editing: Option<JobId>, path: String) -> Self {
        Self {
            gate: EmployerGate::new(ctx, path),
            editing,
            query: job_query(ctx.jobs.clone()),
            mutations: JobMutations::new(ctx.jobs.clone()),
            navigator: Arc::clone(&ctx.navigator),
            form: JobForm::default(),
        }
    }

    pub fn gate(&self) -> &EmployerGate {
        &self.gate
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Run the gate; when editing, load the listing into the form.
    pub async fn open(&mut self) -> GateState {
        let state = self.gate.check().await;
        if state != GateState::Allowed {
            return state;
        }
        if let Some(id) = self.editing.clone() {
            self.query.mount(id).await;
            if let Some(form) = self
                .query
                .with_state(|s| s.data.as_ref().map(JobForm::from_listing))
            {
                self.form = form;
            }
        }
        state
    }

    pub fn form(&self) -> &JobForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut JobForm {
        &mut self.form
    }

    /// Error loading the listing being edited.
    pub fn load_error(&self) -> Option<String> {
        self.query.with_state(|s| s.error.clone())
    }

    pub fn state(&self) -> MutationState {
        self.mutations.state()
    }

    /// Validate, save, and go back to the dashboard.
    pub async fn submit(&self) -> ViewResult<Option<JobListing>> {
        self.gate.ensure_allowed()?;
        let payload = self.form.validate()?;
        let saved = match &self.editing {
            Some(id) => self.mutations.update(id, &payload).await?,
            None => self.mutations.create(&payload).await?,
        };
        self.navigator.replace(routes::MY_JOBS);
        Ok(saved)
    }
}
