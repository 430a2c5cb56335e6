use validator::Validate;

use super::{non_empty, FieldErrors};
use crate::{JobId, NewApplication};

/// Longest cover letter the backend accepts.
pub const MAX_COVER_LETTER_CHARS: usize = 5000;

/// Application form shown on a job detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyForm {
    pub resume_url: String,
    pub cover_letter: String,
}

#[derive(Debug, Validate)]
struct ApplyText {
    #[validate(url(message = "Enter a valid URL"))]
    resume_url: Option<String>,
    #[validate(length(max = 5000, message = "Cover letter must be 5000 characters or fewer"))]
    cover_letter: Option<String>,
}

impl ApplyForm {
    pub fn validate(&self, job_listing_id: &JobId) -> Result<NewApplication, FieldErrors> {
        let text = ApplyText {
            resume_url: non_empty(&self.resume_url),
            cover_letter: non_empty(&self.cover_letter),
        };
        text.validate()?;

        Ok(NewApplication {
            job_listing_id: job_listing_id.clone(),
            resume_url: text.resume_url,
            cover_letter: text.cover_letter,
        })
    }
}
