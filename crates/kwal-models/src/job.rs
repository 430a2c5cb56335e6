//! Job listing records and payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::de::{null_as_default, opt_lenient_u64, string_list};
use crate::{total_pages, ExperienceLevel, JobId, JobStatus, JobType, WorkMode};

/// A posted position as returned by the jobs endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    pub id: JobId,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub requirements: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<JobType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_mode: Option<WorkMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<ExperienceLevel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, deserialize_with = "opt_lenient_u64", skip_serializing_if = "Option::is_none")]
    pub salary_range_min: Option<u64>,

    #[serde(default, deserialize_with = "opt_lenient_u64", skip_serializing_if = "Option::is_none")]
    pub salary_range_max: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_url: Option<String>,

    /// Kept as the backend sent it; some rows hold a date, some a timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_deadline: Option<String>,

    #[serde(default, deserialize_with = "string_list")]
    pub tech_stack: Vec<String>,

    #[serde(default, deserialize_with = "string_list")]
    pub benefits: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub status: JobStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_date: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub metadata: Value,
}

impl JobListing {
    /// Company name from the record or its metadata bag.
    pub fn company_name(&self) -> Option<&str> {
        self.company
            .as_deref()
            .or_else(|| self.metadata.get("company").and_then(Value::as_str))
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn has_salary(&self) -> bool {
        self.salary_range_min.is_some() || self.salary_range_max.is_some()
    }
}

/// Body of `POST /api/jobs` and `PUT /api/jobs/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPayload {
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub job_type: Option<JobType>,
    pub work_mode: Option<WorkMode>,
    pub experience_level: Option<ExperienceLevel>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_range_min: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_range_max: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_deadline: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tech_stack: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub benefits: Vec<String>,

    pub status: JobStatus,
}

/// One page of listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawJobPage")]
pub struct JobPage {
    pub jobs: Vec<JobListing>,
    pub total: u64,
    /// As reported by the backend; see [`JobPage::total_pages`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
    pub current_page: u32,
}

impl JobPage {
    /// Reported page count, or `max(1, ceil(total / limit))` when the
    /// backend sent only a total.
    pub fn total_pages(&self, limit: u32) -> u32 {
        self.pages
            .unwrap_or_else(|| total_pages(self.total, limit))
            .max(1)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawJobPage {
    Bare(Vec<JobListing>),
    Envelope(JobPageEnvelope),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JobPageEnvelope {
    #[serde(default, deserialize_with = "null_as_default")]
    jobs: Vec<JobListing>,
    #[serde(default)]
    total: Option<u64>,
    #[serde(default)]
    pages: Option<u32>,
    #[serde(default)]
    current_page: Option<u32>,
}

impl From<RawJobPage> for JobPage {
    fn from(raw: RawJobPage) -> Self {
        match raw {
            RawJobPage::Envelope(env) => Self {
                total: env.total.unwrap_or(env.jobs.len() as u64),
                pages: env.pages,
                current_page: env.current_page.unwrap_or(1).max(1),
                jobs: env.jobs,
            },
            RawJobPage::Bare(jobs) => Self {
                total: jobs.len() as u64,
                pages: Some(1),
                current_page: 1,
                jobs,
            },
        }
    }
}

/// Free-form body of `POST /api/jobs/search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tech_stack: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub job_types: Vec<JobType>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub work_modes: Vec<WorkMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_salary: Option<u64>,

    /// Extra criteria passed through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}
