use std::sync::LazyLock;

use regex::Regex;
use validator::Validate;

use super::{is_valid_date, non_empty, parse_choice, parse_whole_number, to_csv, FieldErrors};
use crate::de::split_list;
use crate::{
    Availability, EducationLevel, ExperienceLevel, Gender, JobType, ProfilePayload, User,
    UserType,
};

const DEFAULT_CURRENCY: &str = "USD";

/// Optional leading `+`, no leading zero, at most 16 digits.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{0,15}$").unwrap());

/// Profile editor inputs, as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub headline: String,
    pub summary: String,
    pub current_position: String,
    pub current_company: String,
    pub location: String,
    pub country: String,
    pub city: String,
    pub website_url: String,
    pub github_url: String,
    pub linkedin_url: String,
    pub twitter_url: String,
    pub portfolio_url: String,
    pub avatar_url: String,
    pub banner_url: String,
    pub salary_min: String,
    pub salary_max: String,
    pub currency: String,
    pub open_to_work: bool,
    pub open_to_remote: bool,
    pub experience_level: String,
    pub years_of_experience: String,
    pub education_level: String,
    pub availability: String,
    pub preferred_work_type: String,
    /// Comma-separated.
    pub languages: String,
    pub timezone: String,
    pub phone: String,
    pub date_of_birth: String,
    pub gender: String,
    pub is_public: bool,
    pub user_type: String,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            headline: String::new(),
            summary: String::new(),
            current_position: String::new(),
            current_company: String::new(),
            location: String::new(),
            country: String::new(),
            city: String::new(),
            website_url: String::new(),
            github_url: String::new(),
            linkedin_url: String::new(),
            twitter_url: String::new(),
            portfolio_url: String::new(),
            avatar_url: String::new(),
            banner_url: String::new(),
            salary_min: String::new(),
            salary_max: String::new(),
            currency: DEFAULT_CURRENCY.to_string(),
            open_to_work: false,
            open_to_remote: false,
            experience_level: String::new(),
            years_of_experience: String::new(),
            education_level: String::new(),
            availability: String::new(),
            preferred_work_type: String::new(),
            languages: String::new(),
            timezone: String::new(),
            phone: String::new(),
            date_of_birth: String::new(),
            gender: String::new(),
            is_public: true,
            user_type: String::new(),
        }
    }
}

/// Text fields checked by the `validator` derive.
#[derive(Debug, Validate)]
struct ProfileText {
    #[validate(length(max = 100, message = "First name must be less than 100 characters"))]
    first_name: Option<String>,
    #[validate(length(max = 100, message = "Last name must be less than 100 characters"))]
    last_name: Option<String>,
    #[validate(length(max = 255, message = "Headline must be less than 255 characters"))]
    headline: Option<String>,
    #[validate(length(max = 2000, message = "Summary must be less than 2000 characters"))]
    summary: Option<String>,
    #[validate(length(equal = 3, message = "Currency must be 3 characters"))]
    currency: Option<String>,
    #[validate(url(message = "Enter a valid URL"))]
    website_url: Option<String>,
    #[validate(url(message = "Enter a valid URL"))]
    github_url: Option<String>,
    #[validate(url(message = "Enter a valid URL"))]
    linkedin_url: Option<String>,
    #[validate(url(message = "Enter a valid URL"))]
    twitter_url: Option<String>,
    #[validate(url(message = "Enter a valid URL"))]
    portfolio_url: Option<String>,
    #[validate(url(message = "Enter a valid URL"))]
    avatar_url: Option<String>,
    #[validate(url(message = "Enter a valid URL"))]
    banner_url: Option<String>,
}

impl ProfileForm {
    /// Prefill from the account returned by `/api/users/me`.
    pub fn from_user(user: &User) -> Self {
        let mut form = Self {
            user_type: user.user_type.map(|t| t.to_string()).unwrap_or_default(),
            ..Self::default()
        };
        let Some(p) = user.profile.as_ref() else {
            return form;
        };

        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        let shown = |v: Option<String>| v.unwrap_or_default();

        form.first_name = text(&p.first_name);
        form.last_name = text(&p.last_name);
        form.headline = text(&p.headline);
        form.summary = text(&p.summary);
        form.current_position = text(&p.current_position);
        form.current_company = text(&p.current_company);
        form.location = text(&p.location);
        form.country = text(&p.country);
        form.city = text(&p.city);
        form.website_url = text(&p.website_url);
        form.github_url = text(&p.github_url);
        form.linkedin_url = text(&p.linkedin_url);
        form.twitter_url = text(&p.twitter_url);
        form.portfolio_url = text(&p.portfolio_url);
        form.avatar_url = text(&p.avatar_url);
        form.banner_url = text(&p.banner_url);
        form.salary_min = shown(p.salary_min.map(|n| n.to_string()));
        form.salary_max = shown(p.salary_max.map(|n| n.to_string()));
        if let Some(currency) = non_empty(p.currency.as_deref().unwrap_or_default()) {
            form.currency = currency;
        }
        form.open_to_work = p.open_to_work;
        form.open_to_remote = p.open_to_remote;
        form.experience_level = shown(p.experience_level.map(|v| v.to_string()));
        form.years_of_experience = shown(p.years_of_experience.map(|n| n.to_string()));
        form.education_level = shown(p.education_level.map(|v| v.to_string()));
        form.availability = shown(p.availability.map(|v| v.to_string()));
        form.preferred_work_type = shown(p.preferred_work_type.map(|v| v.to_string()));
        form.languages = to_csv(&p.languages);
        form.timezone = text(&p.timezone);
        form.phone = text(&p.phone);
        form.date_of_birth = text(&p.date_of_birth);
        form.gender = shown(p.gender.map(|v| v.to_string()));
        form.is_public = p.is_public;
        form
    }

    /// Check every field and build the request body.
    pub fn validate(&self) -> Result<ProfilePayload, FieldErrors> {
        let text = ProfileText {
            first_name: non_empty(&self.first_name),
            last_name: non_empty(&self.last_name),
            headline: non_empty(&self.headline),
            summary: non_empty(&self.summary),
            currency: non_empty(&self.currency),
            website_url: non_empty(&self.website_url),
            github_url: non_empty(&self.github_url),
            linkedin_url: non_empty(&self.linkedin_url),
            twitter_url: non_empty(&self.twitter_url),
            portfolio_url: non_empty(&self.portfolio_url),
            avatar_url: non_empty(&self.avatar_url),
            banner_url: non_empty(&self.banner_url),
        };

        let mut errors = match text.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => FieldErrors::from(e),
        };

        let salary_min = match parse_whole_number(&self.salary_min) {
            Ok(v) => v,
            Err(()) => {
                errors.insert("salary_min", "Must be a positive integer");
                None
            }
        };
        let salary_max = match parse_whole_number(&self.salary_max) {
            Ok(v) => v,
            Err(()) => {
                errors.insert("salary_max", "Must be a positive integer");
                None
            }
        };
        let years_of_experience = match parse_whole_number(&self.years_of_experience) {
            Ok(Some(years)) if years <= 100 => Some(years as u32),
            Ok(None) => None,
            _ => {
                errors.insert(
                    "years_of_experience",
                    "Must be an integer between 0 and 100",
                );
                None
            }
        };

        let experience_level: Option<ExperienceLevel> = parse_choice(
            &mut errors,
            "experience_level",
            &self.experience_level,
            "Select a valid experience level",
        );
        let education_level: Option<EducationLevel> = parse_choice(
            &mut errors,
            "education_level",
            &self.education_level,
            "Select a valid education level",
        );
        let availability: Option<Availability> = parse_choice(
            &mut errors,
            "availability",
            &self.availability,
            "Select a valid availability",
        );
        let preferred_work_type: Option<JobType> = parse_choice(
            &mut errors,
            "preferred_work_type",
            &self.preferred_work_type,
            "Select a valid work type",
        );
        let gender: Option<Gender> =
            parse_choice(&mut errors, "gender", &self.gender, "Select a valid gender");

        let user_type: Option<UserType> = parse_choice(
            &mut errors,
            "user_type",
            &self.user_type,
            "Select a valid account type",
        );

        let phone = non_empty(&self.phone);
        if phone.as_deref().is_some_and(|p| !PHONE_PATTERN.is_match(p)) {
            errors.insert("phone", "Enter a valid phone number");
        }

        let date_of_birth = non_empty(&self.date_of_birth);
        if date_of_birth.as_deref().is_some_and(|d| !is_valid_date(d)) {
            errors.insert("date_of_birth", "Enter a valid date");
        }

        let payload = ProfilePayload {
            first_name: text.first_name,
            last_name: text.last_name,
            headline: text.headline,
            summary: text.summary,
            current_position: non_empty(&self.current_position),
            current_company: non_empty(&self.current_company),
            location: non_empty(&self.location),
            country: non_empty(&self.country),
            city: non_empty(&self.city),
            website_url: text.website_url,
            github_url: text.github_url,
            linkedin_url: text.linkedin_url,
            twitter_url: text.twitter_url,
            portfolio_url: text.portfolio_url,
            avatar_url: text.avatar_url,
            banner_url: text.banner_url,
            salary_min,
            salary_max,
            currency: text.currency,
            open_to_work: self.open_to_work,
            open_to_remote: self.open_to_remote,
            experience_level,
            years_of_experience,
            education_level,
            availability,
            preferred_work_type,
            languages: split_list(&self.languages),
            timezone: non_empty(&self.timezone),
            phone,
            date_of_birth,
            gender,
            is_public: self.is_public,
            user_type: user_type.map(|t| t.to_string()).unwrap_or_default(),
            email: None,
        };

        errors.into_result(payload)
    }
}
