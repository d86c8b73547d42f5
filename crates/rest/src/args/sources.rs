//! Capturing raw request data and the primitive per-source loaders.
//!
//! Capture happens once per request and is the only fallible step: a body
//! that claims to be JSON but does not parse, or a broken multipart stream,
//! is rejected here. The loaders that run afterwards never fail; they only
//! decide between [`Loaded::Found`] and [`Loaded::NotFound`].

use axum::body::Bytes;
use axum::extract::multipart::Multipart;
use axum::extract::rejection::RawPathParamsRejection;
use axum::extract::{FromRequest, FromRequestParts, RawPathParams, Request};
use http::header::CONTENT_TYPE;
use http::request::Parts;
use http::{HeaderMap, Method};
use mime::Mime;
use serde_json::Value;
use thiserror::Error;
use tracing::trace;

use super::mode::Source;
use super::value::{ArgValue, Loaded, MergedArguments, UploadedFile};

/// Errors raised while capturing the raw sources of a request.
#[derive(Debug, Error)]
pub enum ArgumentError {
    /// The body was declared as JSON but could not be parsed.
    #[error("Invalid JSON body: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// The JSON body parsed but is not an object.
    #[error("Invalid input type. The JSON body must be an object")]
    NotAnObject,

    /// The body could not be read.
    #[error("Failed to read request body: {0}")]
    Body(String),

    /// The multipart stream is malformed.
    #[error("Invalid multipart body: {0}")]
    Multipart(String),

    /// A path segment is not valid UTF-8 after decoding.
    #[error("Invalid path parameter: {0}")]
    PathParam(String),
}

/// Which fields of a schema are lists.
///
/// Sources that can repeat a key (query string and form) collect every
/// occurrence for list fields and keep only the first occurrence otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchemaDescriptor {
    list_fields: &'static [&'static str],
}

impl SchemaDescriptor {
    /// Creates a descriptor from the names of the schema's list fields.
    pub const fn new(list_fields: &'static [&'static str]) -> Self {
        Self { list_fields }
    }

    /// Returns true if `field` is declared as a list.
    pub fn is_list(&self, field: &str) -> bool {
        self.list_fields.contains(&field)
    }

    /// Returns the names of the list fields.
    pub fn list_fields(&self) -> &'static [&'static str] {
        self.list_fields
    }
}

/// Raw data captured from a request, ready for the primitive loaders.
#[derive(Debug, Clone, Default)]
pub struct RequestSources {
    json: Loaded<MergedArguments>,
    query: Vec<(String, String)>,
    view_args: Vec<(String, String)>,
    form: Vec<(String, String)>,
    files: Vec<(String, UploadedFile)>,
}

impl RequestSources {
    /// Creates an empty capture: no body, no query, no path segments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures the given sources from a request.
    ///
    /// Only sources listed in `sources` are read. The body is consumed at
    /// most once, and only when its content type matches a requested body
    /// source.
    pub async fn capture<S>(
        req: Request,
        state: &S,
        sources: &[Source],
    ) -> Result<Self, ArgumentError>
    where
        S: Send + Sync,
    {
        let (mut parts, body) = req.into_parts();
        let mut captured = RequestSources::new();

        if sources.contains(&Source::Query) {
            captured.query = parse_pairs(parts.uri.query().unwrap_or_default().as_bytes());
        }

        if sources.contains(&Source::ViewArgs) {
            captured.view_args = capture_view_args(&mut parts, state).await?;
        }

        let wants_json = sources.contains(&Source::Json);
        let wants_form = sources.contains(&Source::Form) || sources.contains(&Source::Files);
        if !wants_json && !wants_form {
            return Ok(captured);
        }

        let Some(content_type) = content_type(&parts.headers) else {
            trace!("No content type, skipping body");
            return Ok(captured);
        };
        let method = parts.method.clone();
        let req = Request::from_parts(parts, body);

        if wants_json && is_json(&content_type) {
            let bytes = Bytes::from_request(req, state)
                .await
                .map_err(|rejection| ArgumentError::Body(rejection.body_text()))?;
            captured.json = parse_json_body(&bytes)?;
        } else if wants_form && is_multipart(&content_type) {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|rejection| ArgumentError::Multipart(rejection.body_text()))?;
            captured.read_multipart(multipart).await?;
        } else if wants_form && is_urlencoded(&content_type) && method != Method::GET {
            let bytes = Bytes::from_request(req, state)
                .await
                .map_err(|rejection| ArgumentError::Body(rejection.body_text()))?;
            captured.form = parse_pairs(&bytes);
        }

        Ok(captured)
    }

    /// Sets a parsed JSON body. A non-object value is rejected.
    pub fn with_json(mut self, body: Value) -> Result<Self, ArgumentError> {
        self.json = Loaded::Found(json_object(body)?);
        Ok(self)
    }

    /// Adds a query string pair.
    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Adds a path segment.
    pub fn with_view_arg(mut self, key: &str, value: &str) -> Self {
        self.view_args.push((key.to_string(), value.to_string()));
        self
    }

    /// Adds a form field.
    pub fn with_form_field(mut self, key: &str, value: &str) -> Self {
        self.form.push((key.to_string(), value.to_string()));
        self
    }

    /// Adds an uploaded file.
    pub fn with_file(mut self, key: &str, file: UploadedFile) -> Self {
        self.files.push((key.to_string(), file));
        self
    }

    /// Loads the JSON body.
    ///
    /// Not found when the content type is not JSON or the body is empty.
    pub fn load_json(&self, _schema: &SchemaDescriptor) -> Loaded<MergedArguments> {
        self.json.clone()
    }

    /// Loads the query string. Always found, possibly empty.
    pub fn load_query(&self, schema: &SchemaDescriptor) -> Loaded<MergedArguments> {
        Loaded::Found(collect_pairs(&self.query, schema))
    }

    /// Loads the path segments. Not found when the route captured none.
    pub fn load_view_args(&self, _schema: &SchemaDescriptor) -> Loaded<MergedArguments> {
        if self.view_args.is_empty() {
            return Loaded::NotFound;
        }
        Loaded::Found(
            self.view_args
                .iter()
                .map(|(key, value)| (key.clone(), ArgValue::from(value.as_str())))
                .collect(),
        )
    }

    /// Loads the non-file form fields. Always found, possibly empty.
    pub fn load_form(&self, schema: &SchemaDescriptor) -> Loaded<MergedArguments> {
        Loaded::Found(collect_pairs(&self.form, schema))
    }

    /// Loads the uploaded files. Always found, possibly empty.
    ///
    /// A repeated file field keeps its first part.
    pub fn load_files(&self, _schema: &SchemaDescriptor) -> Loaded<MergedArguments> {
        let mut files = MergedArguments::new();
        for (key, file) in &self.files {
            if !files.contains_key(key) {
                files.insert(key.clone(), file.clone());
            }
        }
        Loaded::Found(files)
    }

    async fn read_multipart(&mut self, mut multipart: Multipart) -> Result<(), ArgumentError> {
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|err| ArgumentError::Multipart(err.body_text()))?
        {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };

            match field.file_name().map(str::to_owned) {
                Some(filename) => {
                    let content_type = field.content_type().map(str::to_owned);
                    let data = field
                        .bytes()
                        .await
                        .map_err(|err| ArgumentError::Multipart(err.body_text()))?;
                    self.files
                        .push((name, UploadedFile::new(Some(filename), content_type, data)));
                }
                None => {
                    let text = field
                        .text()
                        .await
                        .map_err(|err| ArgumentError::Multipart(err.body_text()))?;
                    self.form.push((name, text));
                }
            }
        }
        Ok(())
    }
}

async fn capture_view_args<S>(
    parts: &mut Parts,
    state: &S,
) -> Result<Vec<(String, String)>, ArgumentError>
where
    S: Send + Sync,
{
    match RawPathParams::from_request_parts(parts, state).await {
        Ok(params) => Ok(params
            .iter()
            .map(|(key, value)| (key.to_owned(), value.to_owned()))
            .collect()),
        Err(RawPathParamsRejection::InvalidUtf8InPathParam(err)) => {
            Err(ArgumentError::PathParam(err.body_text()))
        }
        // Routes without captures have no path parameters at all.
        Err(_) => Ok(Vec::new()),
    }
}

fn content_type(headers: &HeaderMap) -> Option<Mime> {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<Mime>().ok())
}

fn is_json(content_type: &Mime) -> bool {
    content_type.type_() == mime::APPLICATION
        && (content_type.subtype() == mime::JSON
            || content_type.suffix().is_some_and(|suffix| suffix == mime::JSON))
}

fn is_multipart(content_type: &Mime) -> bool {
    content_type.type_() == mime::MULTIPART && content_type.subtype() == mime::FORM_DATA
}

fn is_urlencoded(content_type: &Mime) -> bool {
    content_type.essence_str() == mime::APPLICATION_WWW_FORM_URLENCODED.essence_str()
}

fn parse_json_body(bytes: &[u8]) -> Result<Loaded<MergedArguments>, ArgumentError> {
    if bytes.is_empty() {
        return Ok(Loaded::NotFound);
    }
    let value: Value = serde_json::from_slice(bytes).map_err(ArgumentError::InvalidJson)?;
    Ok(Loaded::Found(json_object(value)?))
}

fn json_object(value: Value) -> Result<MergedArguments, ArgumentError> {
    match value {
        Value::Object(map) => Ok(map
            .into_iter()
            .map(|(key, value)| (key, ArgValue::Json(value)))
            .collect()),
        _ => Err(ArgumentError::NotAnObject),
    }
}

fn parse_pairs(input: &[u8]) -> Vec<(String, String)> {
    url::form_urlencoded::parse(input)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

fn collect_pairs(pairs: &[(String, String)], schema: &SchemaDescriptor) -> MergedArguments {
    let mut arguments = MergedArguments::new();
    for (key, value) in pairs {
        if schema.is_list(key) {
            let entry = match arguments.remove(key) {
                Some(ArgValue::Json(Value::Array(mut items))) => {
                    items.push(Value::String(value.clone()));
                    Value::Array(items)
                }
                _ => Value::Array(vec![Value::String(value.clone())]),
            };
            arguments.insert(key.clone(), entry);
        } else if !arguments.contains_key(key) {
            arguments.insert(key.clone(), value.as_str());
        }
    }
    arguments
}
