//! Request sources and the resolution modes built on top of them.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A raw source of request arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    /// The JSON request body.
    Json,
    /// The URL query string.
    Query,
    /// Named segments captured by the matched route pattern.
    ViewArgs,
    /// Non-file fields of a form body.
    Form,
    /// File parts of a multipart body.
    Files,
}

impl Source {
    /// Returns the source name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Json => "json",
            Source::Query => "querystring",
            Source::ViewArgs => "view_args",
            Source::Form => "form",
            Source::Files => "files",
        }
    }

    /// Returns true if reading this source consumes the request body.
    pub fn reads_body(&self) -> bool {
        matches!(self, Source::Json | Source::Form | Source::Files)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the arguments of an endpoint are assembled from the request.
///
/// The first five modes read a single source. The remaining five are
/// composites whose absent-handling rules live in
/// [`ArgumentResolver`](super::ArgumentResolver).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionMode {
    /// JSON body only.
    Json,
    /// Query string only.
    Query,
    /// Path segments only.
    ViewArgs,
    /// Form fields only.
    Form,
    /// Uploaded files only.
    Files,
    /// JSON body with path segments overlaid.
    JsonAndViewArgs,
    /// JSON body, or the query string when there is none.
    JsonAndQuery,
    /// As `JsonAndQuery`, with path segments overlaid.
    JsonAndQueryAndViewArgs,
    /// Form fields with uploaded files overlaid.
    FormAndFile,
    /// Path segments with uploaded files overlaid.
    ViewArgsAndFile,
}

impl ResolutionMode {
    /// Every resolution mode.
    pub const ALL: [ResolutionMode; 10] = [
        ResolutionMode::Json,
        ResolutionMode::Query,
        ResolutionMode::ViewArgs,
        ResolutionMode::Form,
        ResolutionMode::Files,
        ResolutionMode::JsonAndViewArgs,
        ResolutionMode::JsonAndQuery,
        ResolutionMode::JsonAndQueryAndViewArgs,
        ResolutionMode::FormAndFile,
        ResolutionMode::ViewArgsAndFile,
    ];

    /// Returns the registered name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionMode::Json => "json",
            ResolutionMode::Query => "querystring",
            ResolutionMode::ViewArgs => "view_args",
            ResolutionMode::Form => "form",
            ResolutionMode::Files => "files",
            ResolutionMode::JsonAndViewArgs => "json_and_view_args",
            ResolutionMode::JsonAndQuery => "json_and_query",
            ResolutionMode::JsonAndQueryAndViewArgs => "json_and_query_and_view_args",
            ResolutionMode::FormAndFile => "form_and_file",
            ResolutionMode::ViewArgsAndFile => "view_args_and_file",
        }
    }

    /// Returns the raw sources this mode reads, in merge order.
    pub fn sources(&self) -> &'static [Source] {
        match self {
            ResolutionMode::Json => &[Source::Json],
            ResolutionMode::Query => &[Source::Query],
            ResolutionMode::ViewArgs => &[Source::ViewArgs],
            ResolutionMode::Form => &[Source::Form],
            ResolutionMode::Files => &[Source::Files],
            ResolutionMode::JsonAndViewArgs => &[Source::Json, Source::ViewArgs],
            ResolutionMode::JsonAndQuery => &[Source::Json, Source::Query],
            ResolutionMode::JsonAndQueryAndViewArgs => {
                &[Source::Json, Source::Query, Source::ViewArgs]
            }
            ResolutionMode::FormAndFile => &[Source::Form, Source::Files],
            ResolutionMode::ViewArgsAndFile => &[Source::ViewArgs, Source::Files],
        }
    }

    /// Returns true if the mode combines more than one source.
    pub fn is_composite(&self) -> bool {
        self.sources().len() > 1
    }
}

impl fmt::Display for ResolutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unregistered mode name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown argument location: {0}")]
pub struct UnknownMode(pub String);

impl FromStr for ResolutionMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResolutionMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| UnknownMode(s.to_string()))
    }
}

/// Compile-time selection of a [`ResolutionMode`].
///
/// Handlers pick a location by type parameter on
/// [`Args`](crate::extractors::Args), so the mode of every endpoint is fixed
/// when the router is built.
pub trait Location: Send + Sync + 'static {
    /// The mode this location resolves with.
    const MODE: ResolutionMode;
}

macro_rules! locations {
    ($($(#[$doc:meta])* $name:ident => $mode:ident;)*) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy, Default)]
            pub struct $name;

            impl Location for $name {
                const MODE: ResolutionMode = ResolutionMode::$mode;
            }
        )*
    };
}

/// Marker types for each resolution mode.
pub mod location {
    use super::{Location, ResolutionMode};

    locations! {
        /// `json`
        Json => Json;
        /// `querystring`
        Query => Query;
        /// `view_args`
        ViewArgs => ViewArgs;
        /// `form`
        Form => Form;
        /// `files`
        Files => Files;
        /// `json_and_view_args`
        JsonAndViewArgs => JsonAndViewArgs;
        /// `json_and_query`
        JsonAndQuery => JsonAndQuery;
        /// `json_and_query_and_view_args`
        JsonAndQueryAndViewArgs => JsonAndQueryAndViewArgs;
        /// `form_and_file`
        FormAndFile => FormAndFile;
        /// `view_args_and_file`
        ViewArgsAndFile => ViewArgsAndFile;
    }
}
