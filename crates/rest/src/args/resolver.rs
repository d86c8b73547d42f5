//! Resolving a [`ResolutionMode`] against captured request sources.
//!
//! The composite modes do not treat every source alike. `json_and_view_args`
//! is absent as a whole when there is no JSON body, even if the path carried
//! data. The JSON and query composites never merge body and query: the body is
//! used alone when present, the query string otherwise. Form and file
//! composites always produce a mapping because both sources are always found.

use tracing::trace;

use super::merge::combine;
use super::mode::ResolutionMode;
use super::sources::{RequestSources, SchemaDescriptor};
use super::value::{Loaded, MergedArguments};

/// Resolves arguments for one request against one schema.
#[derive(Debug, Clone, Copy)]
pub struct ArgumentResolver<'a> {
    sources: &'a RequestSources,
    schema: &'a SchemaDescriptor,
}

impl<'a> ArgumentResolver<'a> {
    /// Creates a resolver over captured sources.
    pub fn new(sources: &'a RequestSources, schema: &'a SchemaDescriptor) -> Self {
        Self { sources, schema }
    }

    /// Resolves the given mode.
    pub fn resolve(&self, mode: ResolutionMode) -> Loaded<MergedArguments> {
        let resolved = match mode {
            ResolutionMode::Json => self.sources.load_json(self.schema),
            ResolutionMode::Query => self.sources.load_query(self.schema),
            ResolutionMode::ViewArgs => self.sources.load_view_args(self.schema),
            ResolutionMode::Form => self.sources.load_form(self.schema),
            ResolutionMode::Files => self.sources.load_files(self.schema),
            ResolutionMode::JsonAndViewArgs => self.json_and_view_args(),
            ResolutionMode::JsonAndQuery => self.json_and_query(),
            ResolutionMode::JsonAndQueryAndViewArgs => self.json_and_query_and_view_args(),
            ResolutionMode::FormAndFile => self.form_and_file(),
            ResolutionMode::ViewArgsAndFile => self.view_args_and_file(),
        };
        trace!(mode = %mode, found = resolved.is_found(), "Resolved argument sources");
        resolved
    }

    /// JSON body with path segments overlaid.
    ///
    /// Absent when there is no JSON body, regardless of the path.
    pub fn json_and_view_args(&self) -> Loaded<MergedArguments> {
        let data = self.sources.load_json(self.schema);
        if data.is_not_found() {
            return data;
        }
        combine(data, self.sources.load_view_args(self.schema))
    }

    /// JSON body, or the query string when there is no JSON body.
    ///
    /// The two are never merged.
    pub fn json_and_query(&self) -> Loaded<MergedArguments> {
        self.sources
            .load_json(self.schema)
            .or_else(|| self.sources.load_query(self.schema))
    }

    /// [`json_and_query`](Self::json_and_query) with path segments overlaid.
    ///
    /// Path segments win on collisions.
    pub fn json_and_query_and_view_args(&self) -> Loaded<MergedArguments> {
        let data = self.json_and_query();
        if data.is_not_found() {
            return data;
        }
        combine(data, self.sources.load_view_args(self.schema))
    }

    /// Form fields with uploaded files overlaid. Always found.
    pub fn form_and_file(&self) -> Loaded<MergedArguments> {
        combine(
            self.sources.load_form(self.schema),
            self.sources.load_files(self.schema),
        )
    }

    /// Path segments with uploaded files overlaid. Always found.
    pub fn view_args_and_file(&self) -> Loaded<MergedArguments> {
        combine(
            self.sources.load_view_args(self.schema),
            self.sources.load_files(self.schema),
        )
    }
}
