use kwal_models::{
    FilterError, JobFilterField, JobFilters, JobPage, Pager, JOB_BOARD_PAGE_SIZE,
};

use super::visible_pager;
use crate::cards::JobCard;
use crate::context::AppContext;
use crate::hooks::jobs_query;
use crate::query::Query;

pub const NO_JOBS_MESSAGE: &str = "No jobs found matching your criteria.";

#[derive(Debug, Clone, PartialEq)]
pub struct JobBoardView {
    pub cards: Vec<JobCard>,
    pub total: u64,
    pub pager: Option<Pager>,
    pub empty_message: Option<&'static str>,
    pub error: Option<String>,
    pub loading: bool,
}

/// Public job search at `/jobs`.
pub struct JobBoardPage {
    filters: JobFilters,
    query: Query<JobFilters, JobPage>,
}

impl JobBoardPage {
    pub fn new(ctx: &AppContext) -> Self {
        Self::with_filters(ctx, JobFilters::with_limit(JOB_BOARD_PAGE_SIZE))
    }

    pub fn with_filters(ctx: &AppContext, filters: JobFilters) -> Self {
        Self {
            filters,
            query: jobs_query(ctx.jobs.clone()),
        }
    }

    pub fn filters(&self) -> &JobFilters {
        &self.filters
    }

    pub fn query(&self) -> &Query<JobFilters, JobPage> {
        &self.query
    }

    pub async fn load(&self) {
        self.query.mount(self.filters.clone()).await;
    }

    /// Change one filter control; the page goes back to 1.
    ///
    /// Returns whether a new fetch was issued.
    pub async fn set_filter(&mut self, field: JobFilterField, raw: &str) -> Result<bool, FilterError> {
        self.filters.set(field, raw)?;
        Ok(self.query.set_key(self.filters.clone()).await)
    }

    pub async fn reset(&mut self) -> bool {
        self.filters.reset();
        self.query.set_key(self.filters.clone()).await
    }

    /// Jump to `page`, clamped to the known page range.
    pub async fn go_to_page(&mut self, page: u32) -> bool {
        let page = page.clamp(1, self.pager().total_pages);
        self.filters = self.filters.with_page(page);
        self.query.set_key(self.filters.clone()).await
    }

    pub async fn next(&mut self) -> bool {
        let page = self.pager().next();
        self.go_to_page(page).await
    }

    pub async fn previous(&mut self) -> bool {
        let page = self.pager().previous();
        self.go_to_page(page).await
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

    pub fn view(&self) -> JobBoardView {
        let pager = visible_pager(self.pager());
        self.query.with_state(|state| {
            let cards: Vec<JobCard> = state
                .data
                .as_ref()
                .map(|page| page.jobs.iter().map(JobCard::from).collect())
                .unwrap_or_default();
            let empty = !state.loading && state.error.is_none() && cards.is_empty();
            JobBoardView {
                total: state.data.as_ref().map_or(0, |page| page.total),
                pager,
                empty_message: empty.then_some(NO_JOBS_MESSAGE),
                error: state.error.clone(),
                loading: state.loading,
                cards,
            }
        })
    }
}
