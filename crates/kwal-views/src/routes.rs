//! Route paths used for navigation and redirects.

use kwal_models::{JobId, UserId};

pub const HOME: &str = "/";
pub const SIGN_IN: &str = "/sign-in";
pub const JOBS: &str = "/jobs";
pub const MY_APPLICATIONS: &str = "/dashboard/applications";
pub const MY_JOBS: &str = "/dashboard/jobs";
pub const NEW_JOB: &str = "/dashboard/jobs/new";
pub const PROFILE: &str = "/dashboard/profile";

/// Sign-in route that returns to `current_path` afterwards.
pub fn sign_in(current_path: &str) -> String {
    format!(
        "{}?redirect_url={}",
        SIGN_IN,
        urlencoding::encode(current_path)
    )
}

pub fn job(id: &JobId) -> String {
    format!("{}/{}", JOBS, id)
}

pub fn edit_job(id: &JobId) -> String {
    format!("{}/{}/edit", MY_JOBS, id)
}

pub fn job_applicants(id: &JobId) -> String {
    format!("{}/{}/applicants", MY_JOBS, id)
}

pub fn public_profile(id: &UserId) -> String {
    format!("/profiles/{}", id)
}
