//! Job applications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::de::{null_as_default, opt_from_str};
use crate::{ApplicationId, ApplicationStatus, JobId, UserId, UserType};

/// A job seeker's submission against a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: ApplicationId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_listing_id: Option<JobId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applicant_id: Option<UserId>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ApplicationStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub metadata: Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_listing: Option<JobSummary>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applicant: Option<ApplicantSummary>,
}

impl Application {
    /// Listing id from the foreign key or the embedded summary.
    pub fn job_id(&self) -> Option<&JobId> {
        self.job_listing_id
            .as_ref()
            .or_else(|| self.job_listing.as_ref().map(|job| &job.id))
    }

    /// Heading shown in application lists.
    pub fn title(&self) -> String {
        match self.job_listing.as_ref().map(|job| job.title.trim()) {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => format!("Application #{}", self.id),
        }
    }
}

/// Listing fields embedded in an application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    pub id: JobId,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Applicant fields embedded in an application for employers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantSummary {
    pub id: UserId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "opt_from_str", skip_serializing_if = "Option::is_none")]
    pub user_type: Option<UserType>,
}

/// One page of applications.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawApplicationPage")]
pub struct ApplicationPage {
    pub data: Vec<Application>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

impl ApplicationPage {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawApplicationPage {
    Bare(Vec<Application>),
    Envelope(ApplicationPageEnvelope),
}

#[derive(Deserialize)]
struct ApplicationPageEnvelope {
    #[serde(default, alias = "applications", deserialize_with = "null_as_default")]
    data: Vec<Application>,
    #[serde(default)]
    total: Option<u64>,
    #[serde(default)]
    page: Option<u32>,
    #[serde(default)]
    limit: Option<u32>,
}

impl From<RawApplicationPage> for ApplicationPage {
    fn from(raw: RawApplicationPage) -> Self {
        match raw {
            RawApplicationPage::Envelope(env) => Self {
                total: env.total.unwrap_or(env.data.len() as u64),
                page: env.page.unwrap_or(1).max(1),
                limit: env.limit.unwrap_or(10).max(1),
                data: env.data,
            },
            RawApplicationPage::Bare(data) => Self {
                total: data.len() as u64,
                page: 1,
                limit: data.len().max(1) as u32,
                data,
            },
        }
    }
}

/// Body of `POST /api/applications`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewApplication {
    pub job_listing_id: JobId,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
}

/// Body of `PATCH /api/applications/{id}/status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationStatusUpdate {
    pub status: ApplicationStatus,
}
