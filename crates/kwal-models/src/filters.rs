//! Filter objects and their normalized query keys.
//!
//! A [`QueryKey`] is the ordered list of query-string pairs a filter object
//! produces once unset and blank values are dropped. Services build their
//! query strings from it and queries compare it by value to decide whether a
//! refetch is needed, so the two can never disagree.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{ExperienceLevel, JobId, JobStatus, JobType, ParseEnumError, UserId, WorkMode};

/// Default page size of the public job board.
pub const JOB_BOARD_PAGE_SIZE: u32 = 12;

/// Default page size of dashboard lists.
pub const DASHBOARD_PAGE_SIZE: u32 = 10;

/// Normalized, ordered query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<(&'static str, String)>);

impl QueryKey {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair unless the trimmed value is empty.
    pub fn push(&mut self, name: &'static str, value: impl fmt::Display) {
        let value = value.to_string();
        let value = value.trim();
        if !value.is_empty() {
            self.0.push((name, value.to_string()));
        }
    }

    pub fn push_opt<V: fmt::Display>(&mut self, name: &'static str, value: Option<V>) {
        if let Some(value) = value {
            self.push(name, value);
        }
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.0
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Form-encoded query string without the leading `?`.
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.0.iter().map(|(k, v)| (*k, v.as_str())))
            .finish()
    }

    /// `path` with the query string appended when there is one.
    pub fn append_to(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, self.to_query_string())
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

/// Anything that can drive a query.
pub trait ToQueryKey {
    fn query_key(&self) -> QueryKey;
}

impl ToQueryKey for () {
    fn query_key(&self) -> QueryKey {
        QueryKey::new()
    }
}

impl ToQueryKey for JobId {
    fn query_key(&self) -> QueryKey {
        let mut key = QueryKey::new();
        key.push("id", self);
        key
    }
}

impl ToQueryKey for UserId {
    fn query_key(&self) -> QueryKey {
        let mut key = QueryKey::new();
        key.push("id", self);
        key
    }
}

/// A filter control received a value it cannot hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error(transparent)]
    InvalidChoice(#[from] ParseEnumError),

    #[error("{field} must be a non-negative integer, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field} must be at least 1")]
    OutOfRange { field: &'static str },
}

/// Individually settable filter controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobFilterField {
    Query,
    Location,
    JobType,
    WorkMode,
    ExperienceLevel,
    MinSalary,
    MaxSalary,
    Status,
    Limit,
}

impl JobFilterField {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobFilterField::Query => "q",
            JobFilterField::Location => "location",
            JobFilterField::JobType => "jobType",
            JobFilterField::WorkMode => "workMode",
            JobFilterField::ExperienceLevel => "experienceLevel",
            JobFilterField::MinSalary => "minSalary",
            JobFilterField::MaxSalary => "maxSalary",
            JobFilterField::Status => "status",
            JobFilterField::Limit => "limit",
        }
    }
}

/// Filters of a job listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFilters {
    pub page: u32,
    pub limit: u32,
    pub q: String,
    pub location: String,
    pub job_type: Option<JobType>,
    pub work_mode: Option<WorkMode>,
    pub experience_level: Option<ExperienceLevel>,
    pub min_salary: Option<u64>,
    pub max_salary: Option<u64>,
    pub status: Option<JobStatus>,
    /// Page size restored when the limit control is cleared.
    #[serde(skip, default = "dashboard_page_size")]
    default_limit: u32,
}

fn dashboard_page_size() -> u32 {
    DASHBOARD_PAGE_SIZE
}

impl Default for JobFilters {
    fn default() -> Self {
        Self::with_limit(DASHBOARD_PAGE_SIZE)
    }
}

impl JobFilters {
    /// Page 1 with the given page size and no search fields.
    ///
    /// That page size is also what a cleared limit control falls back to.
    pub fn with_limit(limit: u32) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
            default_limit: limit.max(1),
            q: String::new(),
            location: String::new(),
            job_type: None,
            work_mode: None,
            experience_level: None,
            min_salary: None,
            max_salary: None,
            status: None,
        }
    }

    /// Update one control from its raw input and go back to the first page.
    ///
    /// Blank input clears the control.
    pub fn set(&mut self, field: JobFilterField, raw: &str) -> Result<(), FilterError> {
        let raw = raw.trim();
        match field {
            JobFilterField::Query => self.q = raw.to_string(),
            JobFilterField::Location => self.location = raw.to_string(),
            JobFilterField::JobType => self.job_type = parse_choice(raw)?,
            JobFilterField::WorkMode => self.work_mode = parse_choice(raw)?,
            JobFilterField::ExperienceLevel => self.experience_level = parse_choice(raw)?,
            JobFilterField::Status => self.status = parse_choice(raw)?,
            JobFilterField::MinSalary => self.min_salary = parse_amount(field, raw)?,
            JobFilterField::MaxSalary => self.max_salary = parse_amount(field, raw)?,
            JobFilterField::Limit => {
                let limit = parse_amount(field, raw)?.unwrap_or(u64::from(self.default_limit));
                self.limit = u32::try_from(limit)
                    .ok()
                    .filter(|l| *l >= 1)
                    .ok_or(FilterError::OutOfRange { field: field.as_str() })?;
            }
        }
        self.page = 1;
        Ok(())
    }

    /// Clear every search field, keeping the page size.
    pub fn reset(&mut self) {
        *self = Self {
            limit: self.limit,
            ..Self::with_limit(self.default_limit)
        };
    }

    /// Same filters on another page; page numbers below 1 become 1.
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    /// True when any search field is set.
    pub fn is_filtered(&self) -> bool {
        !self.q.trim().is_empty()
            || !self.location.trim().is_empty()
            || self.job_type.is_some()
            || self.work_mode.is_some()
            || self.experience_level.is_some()
            || self.min_salary.is_some()
            || self.max_salary.is_some()
            || self.status.is_some()
    }
}

impl ToQueryKey for JobFilters {
    fn query_key(&self) -> QueryKey {
        let mut key = QueryKey::new();
        key.push("page", self.page.max(1));
        key.push("limit", self.limit.max(1));
        key.push("q", &self.q);
        key.push("location", &self.location);
        key.push_opt("jobType", self.job_type);
        key.push_opt("workMode", self.work_mode);
        key.push_opt("experienceLevel", self.experience_level);
        key.push_opt("minSalary", self.min_salary);
        key.push_opt("maxSalary", self.max_salary);
        key.push_opt("status", self.status);
        key
    }
}

fn parse_choice<T>(raw: &str) -> Result<Option<T>, FilterError>
where
    T: std::str::FromStr<Err = ParseEnumError>,
{
    if raw.is_empty() {
        return Ok(None);
    }
    Ok(Some(raw.parse()?))
}

fn parse_amount(field: JobFilterField, raw: &str) -> Result<Option<u64>, FilterError> {
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<u64>()
        .map(Some)
        .map_err(|_| FilterError::InvalidNumber {
            field: field.as_str(),
            value: raw.to_string(),
        })
}

/// Page request for application lists. Both values are always sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DASHBOARD_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    pub fn with_page(self, page: u32) -> Self {
        Self::new(page, self.limit)
    }
}

impl ToQueryKey for PageRequest {
    fn query_key(&self) -> QueryKey {
        let mut key = QueryKey::new();
        key.push("page", self.page.max(1));
        key.push("limit", self.limit.max(1));
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filters_key() {
        let filters = JobFilters::default();
        assert_eq!(filters.query_key().to_query_string(), "page=1&limit=10");
        assert!(!filters.is_filtered());
    }

    #[test]
    fn test_key_omits_blank_values_and_trims() {
        let filters = JobFilters {
            q: "  rust dev ".into(),
            location: "   ".into(),
            job_type: Some(JobType::PartTime),
            min_salary: Some(50_000),
            ..JobFilters::with_limit(12)
        };
        let key = filters.query_key();
        assert_eq!(key.get("q"), Some("rust dev"));
        assert_eq!(key.get("location"), None);
        assert_eq!(
            key.to_query_string(),
            "page=1&limit=12&q=rust+dev&jobType=part_time&minSalary=50000"
        );
    }

    #[test]
    fn test_equal_filters_give_equal_keys() {
        let a = JobFilters {
            q: "rust".into(),
            ..Default::default()
        };
        let b = JobFilters {
            q: " rust ".into(),
            ..Default::default()
        };
        assert_eq!(a.query_key(), b.query_key());
        assert_ne!(a.query_key(), a.with_page(2).query_key());
    }

    #[test]
    fn test_set_resets_page() {
        let mut filters = JobFilters::default().with_page(4);
        filters.set(JobFilterField::WorkMode, "hybrid").unwrap();
        assert_eq!(filters.page, 1);
        assert_eq!(filters.work_mode, Some(WorkMode::Hybrid));

        filters.set(JobFilterField::WorkMode, "").unwrap();
        assert_eq!(filters.work_mode, None);
    }

    #[test]
    fn test_set_rejects_bad_input() {
        let mut filters = JobFilters::default().with_page(3);
        assert!(matches!(
            filters.set(JobFilterField::MinSalary, "-5"),
            Err(FilterError::InvalidNumber { field: "minSalary", .. })
        ));
        assert!(matches!(
            filters.set(JobFilterField::JobType, "weekly"),
            Err(FilterError::InvalidChoice(_))
        ));
        assert!(filters.set(JobFilterField::Limit, "0").is_err());
        assert_eq!(filters.page, 3);
    }

    #[test]
    fn test_reset_keeps_limit() {
        let mut filters = JobFilters::with_limit(12);
        filters.set(JobFilterField::Query, "golang").unwrap();
        filters = filters.with_page(2);
        filters.reset();
        assert_eq!(filters, JobFilters::with_limit(12));
    }

    #[test]
    fn test_blank_limit_restores_own_default() {
        let mut board = JobFilters::with_limit(12);
        board.set(JobFilterField::Limit, "30").unwrap();
        assert_eq!(board.limit, 30);
        board.set(JobFilterField::Limit, "").unwrap();
        assert_eq!(board.limit, 12);

        let mut dashboard = JobFilters::default();
        dashboard.set(JobFilterField::Limit, "50").unwrap();
        dashboard.reset();
        assert_eq!(dashboard.limit, 50);
        dashboard.set(JobFilterField::Limit, " ").unwrap();
        assert_eq!(dashboard.limit, DASHBOARD_PAGE_SIZE);
    }

    #[test]
    fn test_page_request_key_always_has_both() {
        assert_eq!(
            PageRequest::default().query_key().to_query_string(),
            "page=1&limit=10"
        );
        assert_eq!(PageRequest::new(0, 0), PageRequest { page: 1, limit: 1 });
    }

    #[test]
    fn test_append_to_path() {
        assert_eq!(QueryKey::new().append_to("/api/jobs"), "/api/jobs");
        assert_eq!(
            PageRequest::default().query_key().append_to("/api/applications/me"),
            "/api/applications/me?page=1&limit=10"
        );
    }
}
