//! Axum extractors for the REST API.
//!
//! - [`Args`] - Resolve and validate arguments from the request sources
//! - [`ConditionalHeaders`] - Read `If-Match` / `If-None-Match`

mod args;
mod conditional;

pub use args::Args;
pub use conditional::ConditionalHeaders;
