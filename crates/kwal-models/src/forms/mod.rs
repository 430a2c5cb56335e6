//! Form drafts and client-side validation.
//!
//! Forms hold raw text exactly as typed. `validate()` turns a form into the
//! request payload or returns [`FieldErrors`]; an invalid form never reaches
//! the network.

mod apply;
mod errors;
mod job;
mod profile;

pub use apply::{ApplyForm, MAX_COVER_LETTER_CHARS};
pub use errors::FieldErrors;
pub use job::JobForm;
pub use profile::ProfileForm;

use std::str::FromStr;

use chrono::{DateTime, NaiveDate};

/// Trimmed value, or `None` when blank.
fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Blank input is `Ok(None)`; anything but a non-negative integer is an error.
fn parse_whole_number(raw: &str) -> Result<Option<u64>, ()> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse::<u64>().map(Some).map_err(|_| ())
}

fn parse_choice<T: FromStr>(
    errors: &mut FieldErrors,
    field: &str,
    raw: &str,
    message: &str,
) -> Option<T> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            errors.insert(field, message);
            None
        }
    }
}

/// `YYYY-MM-DD` or a full RFC 3339 timestamp.
fn is_valid_date(raw: &str) -> bool {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").is_ok()
        || DateTime::parse_from_rfc3339(trimmed).is_ok()
}

fn to_csv(items: &[String]) -> String {
    items.join(", ")
}
