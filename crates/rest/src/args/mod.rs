//! Request argument resolution.
//!
//! Each endpoint declares one [`ResolutionMode`]. For every request the raw
//! sources that mode needs are captured once ([`RequestSources::capture`]),
//! loaded by the primitive loaders, merged by the [`ArgumentResolver`], and
//! finally validated by a [`Schema`].
//!
//! # Sources
//!
//! | Source | Found when |
//! |--------|-----------|
//! | `json` | content type is JSON and the body is non-empty |
//! | `querystring` | always |
//! | `view_args` | the matched route captured at least one segment |
//! | `form` | always |
//! | `files` | always |
//!
//! # Composite modes
//!
//! | Mode | Result |
//! |------|--------|
//! | `json_and_view_args` | absent without a JSON body, else body with path overlaid |
//! | `json_and_query` | the JSON body if present, else the query string; never merged |
//! | `json_and_query_and_view_args` | `json_and_query`, with path overlaid |
//! | `form_and_file` | form with files overlaid |
//! | `view_args_and_file` | path with files overlaid |
//!
//! An absent result reaches the schema as an empty mapping, so required
//! fields are reported as missing rather than the request failing earlier.

pub mod fields;
mod merge;
mod mode;
mod resolver;
mod schema;
mod sources;
mod value;

pub use merge::combine;
pub use mode::{Location, ResolutionMode, Source, UnknownMode, location};
pub use resolver::ArgumentResolver;
pub(crate) use schema::json_schema;
pub use schema::{Schema, SchemaError};
pub use sources::{ArgumentError, RequestSources, SchemaDescriptor};
pub use value::{ArgValue, Loaded, MergedArguments, UploadedFile};
