//! Display-ready view models built from API records.

use chrono::{DateTime, Utc};

use kwal_models::{
    Application, ApplicationId, ApplicationStatus, JobId, JobListing, JobStatus, Profile, User,
};

use crate::routes;

const UNKNOWN_COMPANY: &str = "Company";
const SALARY_NOT_SPECIFIED: &str = "Not specified";

/// One entry in a job list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCard {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub job_type: Option<&'static str>,
    pub salary: Option<String>,
    pub posted: Option<String>,
    pub status: JobStatus,
    pub tech_stack: Vec<String>,
    pub href: String,
}

impl From<&JobListing> for JobCard {
    fn from(job: &JobListing) -> Self {
        let location = job
            .location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .or_else(|| job.work_mode.map(|mode| mode.label().to_string()));

        Self {
            id: job.id.clone(),
            title: job.title.clone(),
            company: company(job),
            location,
            job_type: job.job_type.map(|t| t.label()),
            salary: card_salary(job.salary_range_min, job.salary_range_max),
            posted: job.posted_date.as_ref().map(format_date),
            status: job.status,
            tech_stack: job.tech_stack.clone(),
            href: routes::job(&job.id),
        }
    }
}

/// Full listing for the detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDetail {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub job_type: Option<&'static str>,
    pub work_mode: Option<&'static str>,
    pub experience_level: Option<&'static str>,
    pub salary: String,
    pub description: String,
    pub requirements: String,
    pub tech_stack: Vec<String>,
    pub benefits: Vec<String>,
    pub deadline: Option<String>,
    pub apply_url: Option<String>,
    pub posted: Option<String>,
    pub status: JobStatus,
}

impl From<&JobListing> for JobDetail {
    fn from(job: &JobListing) -> Self {
        Self {
            id: job.id.clone(),
            title: job.title.clone(),
            company: company(job),
            location: job.location.clone(),
            job_type: job.job_type.map(|t| t.label()),
            work_mode: job.work_mode.map(|m| m.label()),
            experience_level: job.experience_level.map(|l| l.as_str()),
            salary: detail_salary(job.salary_range_min, job.salary_range_max),
            description: job.description.clone(),
            requirements: job.requirements.clone(),
            tech_stack: job.tech_stack.clone(),
            benefits: job.benefits.clone(),
            deadline: job
                .application_deadline
                .as_deref()
                .map(|d| d.chars().take(10).collect()),
            apply_url: job
                .application_url
                .as_deref()
                .map(str::trim)
                .filter(|u| !u.is_empty())
                .map(str::to_string),
            posted: job.posted_date.as_ref().map(format_date),
            status: job.status,
        }
    }
}

/// A job seeker's own application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationRow {
    pub id: ApplicationId,
    pub title: String,
    pub status: ApplicationStatus,
    pub submitted: Option<String>,
    pub job_href: Option<String>,
    pub can_withdraw: bool,
}

impl From<&Application> for ApplicationRow {
    fn from(app: &Application) -> Self {
        Self {
            id: app.id.clone(),
            title: app.title(),
            status: app.status,
            submitted: app.submitted_at.as_ref().map(format_date),
            job_href: app.job_id().map(routes::job),
            can_withdraw: !app.status.is_terminal(),
        }
    }
}

/// An application as seen by the employer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicantRow {
    pub id: ApplicationId,
    pub applicant: String,
    pub status: ApplicationStatus,
    pub submitted: Option<String>,
    pub resume_url: Option<String>,
    pub cover_letter: Option<String>,
}

impl From<&Application> for ApplicantRow {
    fn from(app: &Application) -> Self {
        let applicant = app
            .applicant
            .as_ref()
            .and_then(|a| a.email.clone())
            .or_else(|| app.applicant_id.as_ref().map(|id| format!("Applicant #{}", id)))
            .unwrap_or_else(|| "Applicant".to_string());

        Self {
            id: app.id.clone(),
            applicant,
            status: app.status,
            submitted: app.submitted_at.as_ref().map(format_date),
            resume_url: app.resume_url.clone(),
            cover_letter: app.cover_letter.clone(),
        }
    }
}

/// Read-only profile for public viewing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCard {
    pub name: String,
    pub headline: Option<String>,
    pub summary: Option<String>,
    pub position: Option<String>,
    pub location: Option<String>,
    pub open_to_work: bool,
    pub links: Vec<(&'static str, String)>,
    pub languages: Vec<String>,
    pub completion: Option<u32>,
}

impl ProfileCard {
    pub fn new(user: &User, profile: &Profile) -> Self {
        let position = match (&profile.current_position, &profile.current_company) {
            (Some(position), Some(company)) => Some(format!("{} at {}", position, company)),
            (Some(position), None) => Some(position.clone()),
            (None, company) => company.clone(),
        };
        let location = profile.location.clone().or_else(|| {
            match (&profile.city, &profile.country) {
                (Some(city), Some(country)) => Some(format!("{}, {}", city, country)),
                (city, country) => city.clone().or_else(|| country.clone()),
            }
        });

        Self {
            name: profile
                .full_name()
                .or_else(|| user.email.clone())
                .unwrap_or_else(|| format!("User #{}", user.id)),
            headline: profile.headline.clone(),
            summary: profile.summary.clone(),
            position,
            location,
            open_to_work: profile.open_to_work,
            links: profile
                .links()
                .into_iter()
                .map(|(label, url)| (label, url.to_string()))
                .collect(),
            languages: profile.languages.clone(),
            completion: profile.profile_completion_percentage,
        }
    }
}

fn company(job: &JobListing) -> String {
    job.company_name().unwrap_or(UNKNOWN_COMPANY).to_string()
}

/// `$120,000`
pub fn format_money(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Salary as shown on a list card; `None` hides the line.
pub fn card_salary(min: Option<u64>, max: Option<u64>) -> Option<String> {
    match (min, max) {
        (Some(min), Some(max)) => Some(format!("{} - {}", format_money(min), format_money(max))),
        (Some(min), None) => Some(format!("From {}", format_money(min))),
        (None, Some(max)) => Some(format!("Up to {}", format_money(max))),
        (None, None) => None,
    }
}

/// Salary as shown on the detail page.
pub fn detail_salary(min: Option<u64>, max: Option<u64>) -> String {
    match (min, max) {
        (Some(min), Some(max)) => format!("{} - {}", format_money(min), format_money(max)),
        (Some(amount), None) | (None, Some(amount)) => format_money(amount),
        (None, None) => SALARY_NOT_SPECIFIED.to_string(),
    }
}

pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d").to_string()
}
