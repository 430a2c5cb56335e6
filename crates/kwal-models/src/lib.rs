//! Shared data models for the Kwalifai job board client.
//!
//! This crate provides Serde-serializable types for:
//! - Job listings, applications, users and profiles
//! - Fixed value sets (job type, work mode, statuses, ...)
//! - Listing filters and their normalized query keys
//! - Pagination arithmetic
//! - Form drafts with client-side validation

mod de;

pub mod application;
pub mod enums;
pub mod filters;
pub mod forms;
pub mod ids;
pub mod job;
pub mod pagination;
pub mod user;

// Re-export common types
pub use application::{
    ApplicantSummary, Application, ApplicationPage, ApplicationStatusUpdate, JobSummary,
    NewApplication,
};
pub use enums::{
    ApplicationStatus, Availability, EducationLevel, ExperienceLevel, Gender, JobStatus, JobType,
    ParseEnumError, UserRole, UserType, WorkMode,
};
pub use filters::{
    FilterError, JobFilterField, JobFilters, PageRequest, QueryKey, ToQueryKey, DASHBOARD_PAGE_SIZE,
    JOB_BOARD_PAGE_SIZE,
};
pub use forms::{ApplyForm, FieldErrors, JobForm, ProfileForm, MAX_COVER_LETTER_CHARS};
pub use ids::{ApplicationId, JobId, UserId};
pub use job::{JobListing, JobPage, JobPayload, SearchCriteria};
pub use pagination::{total_pages, Pager};
pub use user::{Profile, ProfilePayload, User};
