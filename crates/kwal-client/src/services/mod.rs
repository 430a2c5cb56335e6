//! Resource services, one per backend resource.
//!
//! Each method maps to exactly one HTTP call and returns the unwrapped `data`
//! as-is. Public reads go out without a token; everything else carries the
//! injected provider's token.

mod applications;
mod jobs;
mod users;

pub use applications::ApplicationsService;
pub use jobs::JobsService;
pub use users::UsersService;

/// Percent-encode an id for use as a path segment.
fn segment(id: &impl std::fmt::Display) -> String {
    urlencoding::encode(&id.to_string()).into_owned()
}
