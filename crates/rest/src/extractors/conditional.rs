//! Conditional request headers.
//!
//! The asset icon endpoint compares the client's cached tag with the current
//! icon's ETag. Clients send it in either `If-Match` or `If-None-Match`.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};

/// Extracted conditional headers from a request.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConditionalHeaders {
    if_match: Option<String>,
    if_none_match: Option<String>,
}

impl ConditionalHeaders {
    /// Creates a new ConditionalHeaders from a HeaderMap.
    ///
    /// Empty header values count as absent.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let read = |name: header::HeaderName| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        Self {
            if_match: read(header::IF_MATCH),
            if_none_match: read(header::IF_NONE_MATCH),
        }
    }

    /// Returns the If-Match header value.
    pub fn if_match(&self) -> Option<&str> {
        self.if_match.as_deref()
    }

    /// Returns the If-None-Match header value.
    pub fn if_none_match(&self) -> Option<&str> {
        self.if_none_match.as_deref()
    }

    /// Returns the tag to compare against, without its enclosing quotes.
    ///
    /// `If-Match` is preferred; `If-None-Match` is read only when it is
    /// missing.
    pub fn match_tag(&self) -> Option<String> {
        self.if_match()
            .or(self.if_none_match())
            .map(|value| unquote(value).to_string())
    }
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(value)
}

impl<S> FromRequestParts<S> for ConditionalHeaders
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(ConditionalHeaders::from_headers(&parts.headers))
    }
}
