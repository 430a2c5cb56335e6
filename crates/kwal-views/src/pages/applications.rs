use kwal_models::{ApplicationId, ApplicationPage, PageRequest, Pager, DASHBOARD_PAGE_SIZE};

use super::{first_error, visible_pager};
use crate::cards::ApplicationRow;
use crate::context::AppContext;
use crate::error::ViewResult;
use crate::hooks::{my_applications_query, ApplicationMutations};
use crate::query::Query;

pub const NO_APPLICATIONS_MESSAGE: &str = "No applications yet. Start by browsing jobs.";

#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationsView {
    pub rows: Vec<ApplicationRow>,
    pub pager: Option<Pager>,
    pub empty_message: Option<&'static str>,
    pub error: Option<String>,
    pub loading: bool,
    pub withdrawing: bool,
}

/// The job seeker's applications at `/dashboard/applications`.
pub struct MyApplicationsPage {
    request: PageRequest,
    query: Query<PageRequest, ApplicationPage>,
    mutations: ApplicationMutations,
}

impl MyApplicationsPage {
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            request: PageRequest::new(1, DASHBOARD_PAGE_SIZE),
            query: my_applications_query(ctx.applications.clone()),
            mutations: ApplicationMutations::new(ctx.applications.clone()),
        }
    }

    pub fn query(&self) -> &Query<PageRequest, ApplicationPage> {
        &self.query
    }

    pub fn mutations(&self) -> &ApplicationMutations {
        &self.mutations
    }

    pub fn request(&self) -> PageRequest {
        self.request
    }

    pub async fn load(&self) {
        self.query.mount(self.request).await;
    }

    pub async fn go_to_page(&mut self, page: u32) -> bool {
        let page = page.clamp(1, self.pager().total_pages);
        self.request = self.request.with_page(page);
        self.query.set_key(self.request).await
    }

    pub async fn next(&mut self) -> bool {
        let page = self.pager().next();
        self.go_to_page(page).await
    }

    pub async fn previous(&mut self) -> bool {
        let page = self.pager().previous();
        self.go_to_page(page).await
    }

    /// Withdraw an application, then reload the list.
    pub async fn withdraw(&self, id: &ApplicationId) -> ViewResult<()> {
        self.mutations.withdraw(id).await?;
        self.query.refetch().await;
        Ok(())
    }

    pub fn pager(&self) -> Pager {
        let total = self
            .query
            .with_state(|state| state.data.as_ref().map(|page| page.total))
            .unwrap_or(0);
        Pager::from_total(self.request.page, total, self.request.limit)
    }

    pub fn view(&self) -> ApplicationsView {
        let pager = visible_pager(self.pager());
        let mutation = self.mutations.state();
        self.query.with_state(|state| {
            let rows: Vec<ApplicationRow> = state
                .data
                .as_ref()
                .map(|page| page.data.iter().map(ApplicationRow::from).collect())
                .unwrap_or_default();
            let empty = !state.loading && state.error.is_none() && rows.is_empty();
            ApplicationsView {
                pager,
                empty_message: empty.then_some(NO_APPLICATIONS_MESSAGE),
                error: first_error(state.error.clone(), mutation.error),
                loading: state.loading,
                withdrawing: mutation.loading,
                rows,
            }
        })
    }
}
