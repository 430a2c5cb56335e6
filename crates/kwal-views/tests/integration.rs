//! Page-level scenarios against a mock API.
//!
//!   cargo test -p kwal-views --test integration

mod scenarios;
