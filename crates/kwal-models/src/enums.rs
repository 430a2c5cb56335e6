//! Enumerations with fixed value sets.
//!
//! Every enum serializes as its snake_case wire string and round-trips
//! through `Display` / `FromStr`, so the same value can be used in JSON
//! bodies, query strings and form inputs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A string did not match any value of an enumerated field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind}: {value:?}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant, )+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $( $wire => Ok($name::$variant), )+
                    other => Err(ParseEnumError {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

string_enum! {
    /// Employment type of a listing, or a preferred work type on a profile.
    JobType as "job type" {
        FullTime => "full_time",
        PartTime => "part_time",
        Contract => "contract",
        Freelance => "freelance",
        /// Only accepted as a profile preference.
        Internship => "internship",
    }
}

impl JobType {
    /// Values a job listing may carry.
    pub const JOB_VALUES: &'static [JobType] = &[
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Freelance,
    ];

    pub fn is_listing_type(&self) -> bool {
        Self::JOB_VALUES.contains(self)
    }

    pub fn label(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full time",
            JobType::PartTime => "Part time",
            JobType::Contract => "Contract",
            JobType::Freelance => "Freelance",
            JobType::Internship => "Internship",
        }
    }
}

string_enum! {
    WorkMode as "work mode" {
        Remote => "remote",
        Hybrid => "hybrid",
        Onsite => "onsite",
    }
}

impl WorkMode {
    pub fn label(&self) -> &'static str {
        match self {
            WorkMode::Remote => "Remote",
            WorkMode::Hybrid => "Hybrid",
            WorkMode::Onsite => "Onsite",
        }
    }
}

string_enum! {
    /// Seniority of a listing or a candidate.
    ExperienceLevel as "experience level" {
        Entry => "entry",
        Mid => "mid",
        Senior => "senior",
        Lead => "lead",
        /// Only accepted on profiles.
        Executive => "executive",
    }
}

impl ExperienceLevel {
    /// Values a job listing may carry.
    pub const JOB_VALUES: &'static [ExperienceLevel] = &[
        ExperienceLevel::Entry,
        ExperienceLevel::Mid,
        ExperienceLevel::Senior,
        ExperienceLevel::Lead,
    ];

    pub fn is_listing_level(&self) -> bool {
        Self::JOB_VALUES.contains(self)
    }
}

string_enum! {
    /// Lifecycle of a job listing. Deleting a listing closes it.
    #[derive(Default)]
    JobStatus as "job status" {
        #[default]
        Active => "active",
        Paused => "paused",
        Closed => "closed",
        Draft => "draft",
    }
}

impl JobStatus {
    pub fn is_open(&self) -> bool {
        matches!(self, JobStatus::Active)
    }
}

string_enum! {
    #[derive(Default)]
    ApplicationStatus as "application status" {
        #[default]
        Submitted => "submitted",
        Viewed => "viewed",
        Shortlisted => "shortlisted",
        Rejected => "rejected",
        Hired => "hired",
    }
}

impl ApplicationStatus {
    /// Rejected and hired applications are settled.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ApplicationStatus::Rejected | ApplicationStatus::Hired)
    }
}

string_enum! {
    /// Account kind chosen at onboarding.
    UserType as "user type" {
        JobSeeker => "job_seeker",
        Employer => "employer",
        Both => "both",
    }
}

impl UserType {
    /// Employer-only pages are open to employers and dual-role accounts.
    pub fn can_manage_jobs(&self) -> bool {
        matches!(self, UserType::Employer | UserType::Both)
    }
}

string_enum! {
    #[derive(Default)]
    UserRole as "user role" {
        #[default]
        User => "user",
        Admin => "admin",
        Moderator => "moderator",
    }
}

string_enum! {
    EducationLevel as "education level" {
        HighSchool => "high_school",
        Bachelor => "bachelor",
        Master => "master",
        Phd => "phd",
        Other => "other",
    }
}

string_enum! {
    Availability as "availability" {
        Immediate => "immediate",
        OneMonth => "1_month",
        TwoMonths => "2_months",
        ThreeMonths => "3_months",
        NotAvailable => "not_available",
    }
}

string_enum! {
    Gender as "gender" {
        Male => "male",
        Female => "female",
        Other => "other",
        PreferNotToSay => "prefer_not_to_say",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_strings() {
        assert_eq!(
            serde_json::to_string(&JobType::FullTime).unwrap(),
            r#""full_time""#
        );
        assert_eq!(
            serde_json::from_str::<Availability>(r#""1_month""#).unwrap(),
            Availability::OneMonth
        );
        assert_eq!(UserType::JobSeeker.to_string(), "job_seeker");
    }

    #[test]
    fn test_parse_rejects_unknown_values() {
        let err = "weekly".parse::<JobType>().unwrap_err();
        assert_eq!(err.kind, "job type");
        assert_eq!(err.value, "weekly");
        assert_eq!(" remote ".parse::<WorkMode>().unwrap(), WorkMode::Remote);
    }

    #[test]
    fn test_listing_value_sets() {
        assert!(!JobType::Internship.is_listing_type());
        assert!(!ExperienceLevel::Executive.is_listing_level());
        assert_eq!(JobType::ALL.len(), 5);
        assert_eq!(JobStatus::default(), JobStatus::Active);
    }

    #[test]
    fn test_can_manage_jobs() {
        assert!(UserType::Employer.can_manage_jobs());
        assert!(UserType::Both.can_manage_jobs());
        assert!(!UserType::JobSeeker.can_manage_jobs());
    }
}
