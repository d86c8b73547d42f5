//! Response formatting for the REST API.
//!
//! - [`envelope`] - the JSON envelope of every result and error
//! - `icon` - binary asset icon responses with ETags

pub mod envelope;
mod icon;

pub use envelope::Envelope;
