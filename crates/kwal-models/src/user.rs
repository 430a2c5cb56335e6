//! Users and their profiles.

use serde::{Deserialize, Serialize};

use crate::de::{null_as_default, opt_from_str, opt_lenient_u32, opt_lenient_u64, string_list};
use crate::{
    Availability, EducationLevel, ExperienceLevel, Gender, JobType, UserId, UserRole, UserType,
};

/// An account as returned by `/api/users/me` and `/api/users/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clerk_user_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Unset until onboarding picks a side.
    #[serde(default, deserialize_with = "opt_from_str", skip_serializing_if = "Option::is_none")]
    pub user_type: Option<UserType>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub role: UserRole,

    #[serde(default = "default_true", deserialize_with = "bool_or_true")]
    pub is_active: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub email_verified: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_active: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
}

fn default_true() -> bool {
    true
}

fn bool_or_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

impl User {
    pub fn can_manage_jobs(&self) -> bool {
        self.user_type.is_some_and(|t| t.can_manage_jobs())
    }

    /// "First Last", whichever parts are present.
    pub fn display_name(&self) -> Option<String> {
        self.profile.as_ref().and_then(Profile::full_name)
    }
}

/// Personal and career details attached to a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub headline: Option<String>,
    pub summary: Option<String>,
    pub current_position: Option<String>,
    pub current_company: Option<String>,
    pub location: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub website_url: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub avatar_url: Option<String>,
    pub banner_url: Option<String>,

    #[serde(deserialize_with = "opt_lenient_u64")]
    pub salary_min: Option<u64>,

    #[serde(deserialize_with = "opt_lenient_u64")]
    pub salary_max: Option<u64>,

    pub currency: Option<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub open_to_work: bool,

    #[serde(deserialize_with = "null_as_default")]
    pub open_to_remote: bool,

    #[serde(deserialize_with = "opt_from_str")]
    pub experience_level: Option<ExperienceLevel>,

    #[serde(deserialize_with = "opt_lenient_u32")]
    pub years_of_experience: Option<u32>,

    #[serde(deserialize_with = "opt_from_str")]
    pub education_level: Option<EducationLevel>,

    #[serde(deserialize_with = "opt_from_str")]
    pub availability: Option<Availability>,

    #[serde(deserialize_with = "opt_from_str")]
    pub preferred_work_type: Option<JobType>,

    #[serde(deserialize_with = "string_list")]
    pub languages: Vec<String>,

    pub timezone: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,

    #[serde(deserialize_with = "opt_from_str")]
    pub gender: Option<Gender>,

    #[serde(deserialize_with = "null_as_default")]
    pub is_public: bool,

    #[serde(deserialize_with = "opt_lenient_u32")]
    pub profile_completion_percentage: Option<u32>,
}

impl Profile {
    pub fn full_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        (!parts.is_empty()).then(|| parts.join(" "))
    }

    /// Link fields that are set, labelled for display.
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        [
            ("Website", &self.website_url),
            ("GitHub", &self.github_url),
            ("LinkedIn", &self.linkedin_url),
            ("Twitter", &self.twitter_url),
            ("Portfolio", &self.portfolio_url),
        ]
        .into_iter()
        .filter_map(|(label, url)| {
            url.as_deref()
                .filter(|u| !u.trim().is_empty())
                .map(|u| (label, u))
        })
        .collect()
    }
}

/// Body of `POST`/`PUT /api/users/me`.
///
/// Strings are present only when non-empty; `userType` and the booleans are
/// always sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    pub open_to_work: bool,
    pub open_to_remote: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<ExperienceLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education_level: Option<EducationLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_work_type: Option<JobType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    pub is_public: bool,

    /// Empty when the account has not picked a type yet.
    #[serde(default)]
    pub user_type: String,

    /// Filled in from the signed-in identity just before submit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ProfilePayload {
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}
