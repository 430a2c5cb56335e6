//! REST client for the Kwalifai job board API.
//!
//! This crate provides:
//! - A request helper that attaches bearer tokens and unwraps `{ data }` envelopes
//! - An error taxonomy separating HTTP failures, bad payloads and transport errors
//! - Resource services for jobs, applications and users
//! - Environment-driven configuration and request metrics

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod metrics;
pub mod services;


pub use auth::{StaticToken, TokenError, TokenProvider};
pub use client::{ApiClient, RequestOptions};
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult, FieldError};
pub use services::{ApplicationsService, JobsService, UsersService};
