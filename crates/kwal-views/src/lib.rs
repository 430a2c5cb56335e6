//! Client-side state for the Kwalifai job board.
//!
//! This crate provides:
//! - Observable queries and mutations over the REST services
//! - An injected session and navigator instead of ambient auth state
//! - The employer access gate
//! - Page controllers that turn API records into view models

pub mod cards;
pub mod context;
pub mod error;
pub mod gate;
pub mod hooks;
pub mod mutation;
pub mod pages;
pub mod query;
pub mod routes;
pub mod session;

pub use cards::{ApplicantRow, ApplicationRow, JobCard, JobDetail, ProfileCard};
pub use context::AppContext;
pub use error::{ViewError, ViewResult};
pub use gate::{EmployerGate, GateState, Rendered};
pub use hooks::{ApplicationMutations, JobMutations};
pub use mutation::{Mutation, MutationState};
pub use query::{Fetcher, Query, QueryState};
pub use session::{Navigator, RecordingNavigator, Session, StaticSession};
