//! Page controllers.
//!
//! Each page owns its local filter or form state, drives the queries and
//! mutations it needs, and exposes a plain view model for rendering.

mod applications;
mod employer;
mod job_board;
mod job_detail;
mod profile;

pub use applications::{ApplicationsView, MyApplicationsPage};
pub use employer::{
    ApplicantsView, EmployerJobsPage, EmployerJobsView, JobApplicantsPage, JobEditorPage,
};
pub use job_board::{JobBoardPage, JobBoardView};
pub use job_detail::{JobDetailPage, JobDetailView};
pub use profile::{ProfilePage, ProfileView, PublicProfile, PublicProfilePage};

use kwal_models::Pager;

/// Pager for a list response, hidden when everything fits on one page.
pub(crate) fn visible_pager(pager: Pager) -> Option<Pager> {
    pager.is_visible().then_some(pager)
}

/// Error from the list query, or else from the last mutation.
pub(crate) fn first_error(query: Option<String>, mutation: Option<String>) -> Option<String> {
    query.or(mutation)
}
