use validator::Validate;

use super::{is_valid_date, non_empty, parse_whole_number, to_csv, FieldErrors};
use crate::de::split_list;
use crate::{ExperienceLevel, JobListing, JobPayload, JobStatus, JobType, WorkMode};

/// Job editor inputs. Choice fields are typed, everything else is raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobForm {
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub job_type: JobType,
    pub work_mode: WorkMode,
    pub experience_level: ExperienceLevel,
    pub location: String,
    pub salary_range_min: String,
    pub salary_range_max: String,
    pub application_url: String,
    pub application_deadline: String,
    /// Comma-separated.
    pub tech_stack: String,
    /// Comma-separated.
    pub benefits: String,
    pub status: JobStatus,
}

impl Default for JobForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            requirements: String::new(),
            job_type: JobType::FullTime,
            work_mode: WorkMode::Remote,
            experience_level: ExperienceLevel::Entry,
            location: String::new(),
            salary_range_min: String::new(),
            salary_range_max: String::new(),
            application_url: String::new(),
            application_deadline: String::new(),
            tech_stack: String::new(),
            benefits: String::new(),
            status: JobStatus::Active,
        }
    }
}

#[derive(Debug, Validate)]
struct JobText {
    #[validate(length(min = 3, message = "Title must be at least 3 characters"))]
    title: String,
    #[validate(length(min = 10, message = "Description must be at least 10 characters"))]
    description: String,
    #[validate(length(min = 10, message = "Requirements must be at least 10 characters"))]
    requirements: String,
    #[validate(url(message = "Enter a valid URL"))]
    application_url: Option<String>,
}

impl JobForm {
    /// Prefill the editor from an existing listing.
    pub fn from_listing(job: &JobListing) -> Self {
        let defaults = Self::default();
        Self {
            title: job.title.clone(),
            description: job.description.clone(),
            requirements: job.requirements.clone(),
            job_type: job.job_type.unwrap_or(defaults.job_type),
            work_mode: job.work_mode.unwrap_or(defaults.work_mode),
            experience_level: job.experience_level.unwrap_or(defaults.experience_level),
            location: job.location.clone().unwrap_or_default(),
            salary_range_min: job.salary_range_min.map(|n| n.to_string()).unwrap_or_default(),
            salary_range_max: job.salary_range_max.map(|n| n.to_string()).unwrap_or_default(),
            application_url: job.application_url.clone().unwrap_or_default(),
            application_deadline: job
                .application_deadline
                .as_deref()
                .map(|d| d.get(..10).unwrap_or(d).to_string())
                .unwrap_or_default(),
            tech_stack: to_csv(&job.tech_stack),
            benefits: to_csv(&job.benefits),
            status: job.status,
        }
    }

    pub fn validate(&self) -> Result<JobPayload, FieldErrors> {
        let text = JobText {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            requirements: self.requirements.trim().to_string(),
            application_url: non_empty(&self.application_url),
        };
        let mut errors = match text.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => FieldErrors::from(e),
        };

        if !self.job_type.is_listing_type() {
            errors.insert("job_type", "Select a valid job type");
        }
        if !self.experience_level.is_listing_level() {
            errors.insert("experience_level", "Select a valid experience level");
        }

        let salary_range_min = parse_whole_number(&self.salary_range_min).unwrap_or_else(|()| {
            errors.insert("salary_range_min", "Must be a positive integer");
            None
        });
        let salary_range_max = parse_whole_number(&self.salary_range_max).unwrap_or_else(|()| {
            errors.insert("salary_range_max", "Must be a positive integer");
            None
        });
        if let (Some(min), Some(max)) = (salary_range_min, salary_range_max) {
            if min > max {
                errors.insert(
                    "salary_range_max",
                    "Maximum salary must be greater than or equal to the minimum",
                );
            }
        }

        let application_deadline = non_empty(&self.application_deadline);
        if application_deadline
            .as_deref()
            .is_some_and(|d| !is_valid_date(d))
        {
            errors.insert("application_deadline", "Enter a valid date");
        }

        let payload = JobPayload {
            title: text.title,
            description: text.description,
            requirements: text.requirements,
            job_type: Some(self.job_type),
            work_mode: Some(self.work_mode),
            experience_level: Some(self.experience_level),
            location: non_empty(&self.location),
            salary_range_min,
            salary_range_max,
            application_url: text.application_url,
            application_deadline,
            tech_stack: split_list(&self.tech_stack),
            benefits: split_list(&self.benefits),
            status: self.status,
        };

        errors.into_result(payload)
    }
}
