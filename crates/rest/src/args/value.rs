//! Argument values and the absent marker.
//!
//! Every raw source of a request is loaded into a [`MergedArguments`] map
//! wrapped in [`Loaded`], so that "this source produced nothing" is a distinct
//! state from an empty mapping or a JSON `null`.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::path::Path;

use axum::body::Bytes;
use serde_json::Value;

/// Outcome of loading arguments from one request source.
///
/// `NotFound` is the absent marker: the source produced no data at all. It is
/// never converted into `null` or a default by the resolver.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Loaded<T> {
    /// The source produced a value.
    Found(T),
    /// The source produced nothing.
    #[default]
    NotFound,
}

impl<T> Loaded<T> {
    /// Returns true if the source produced a value.
    pub fn is_found(&self) -> bool {
        matches!(self, Loaded::Found(_))
    }

    /// Returns true if the source produced nothing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Loaded::NotFound)
    }

    /// Returns `self` when found, otherwise the result of `fallback`.
    pub fn or_else<F>(self, fallback: F) -> Loaded<T>
    where
        F: FnOnce() -> Loaded<T>,
    {
        match self {
            Loaded::Found(value) => Loaded::Found(value),
            Loaded::NotFound => fallback(),
        }
    }

    /// Converts into an `Option`, mapping `NotFound` to `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Loaded::Found(value) => Some(value),
            Loaded::NotFound => None,
        }
    }
}

impl<T> From<Option<T>> for Loaded<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Loaded::Found(value),
            None => Loaded::NotFound,
        }
    }
}

/// A file part uploaded with a `multipart/form-data` request.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    filename: Option<String>,
    content_type: Option<String>,
    data: Bytes,
}

impl UploadedFile {
    /// Creates an uploaded file. An empty client filename counts as none.
    pub fn new(filename: Option<String>, content_type: Option<String>, data: Bytes) -> Self {
        Self {
            filename: filename.filter(|name| !name.is_empty()),
            content_type,
            data,
        }
    }

    /// Returns the filename sent by the client, if any.
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Returns the content type of the part, if any.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Returns the file contents.
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Returns the size of the file in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the file has no contents.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Writes the file contents to `path`.
    pub async fn save(&self, path: &Path) -> std::io::Result<()> {
        tokio::fs::write(path, &self.data).await
    }
}

/// A single, not yet validated argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    /// A JSON value. Query, path and form values arrive as JSON strings,
    /// or arrays of strings for list fields.
    Json(Value),
    /// An uploaded file.
    File(UploadedFile),
}

impl ArgValue {
    /// Returns the uploaded file, if this is one.
    pub fn as_file(&self) -> Option<&UploadedFile> {
        match self {
            ArgValue::File(file) => Some(file),
            ArgValue::Json(_) => None,
        }
    }
}

impl From<Value> for ArgValue {
    fn from(value: Value) -> Self {
        ArgValue::Json(value)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue::Json(Value::String(value.to_string()))
    }
}

impl From<UploadedFile> for ArgValue {
    fn from(file: UploadedFile) -> Self {
        ArgValue::File(file)
    }
}

/// The flat field name to value mapping handed to schema validation.
///
/// Keys are kept in a sorted map so iteration never depends on the order in
/// which sources were read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedArguments {
    values: BTreeMap<String, ArgValue>,
}

impl MergedArguments {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if there are no fields.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the value of a field.
    pub fn get(&self, field: &str) -> Option<&ArgValue> {
        self.values.get(field)
    }

    /// Returns true if the field is present.
    pub fn contains_key(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    /// Sets a field, returning the value it replaced.
    pub fn insert(
        &mut self,
        field: impl Into<String>,
        value: impl Into<ArgValue>,
    ) -> Option<ArgValue> {
        self.values.insert(field.into(), value.into())
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<ArgValue> {
        self.values.remove(field)
    }

    /// Returns the field names in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Returns an iterator over all fields.
    pub fn iter(&self) -> btree_map::Iter<'_, String, ArgValue> {
        self.values.iter()
    }

    /// Sets every field of `other`, overwriting fields already present.
    pub fn overlay(&mut self, other: MergedArguments) {
        self.values.extend(other.values);
    }
}

impl FromIterator<(String, ArgValue)> for MergedArguments {
    fn from_iter<I: IntoIterator<Item = (String, ArgValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for MergedArguments {
    type Item = (String, ArgValue);
    type IntoIter = btree_map::IntoIter<String, ArgValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a MergedArguments {
    type Item = (&'a String, &'a ArgValue);
    type IntoIter = btree_map::Iter<'a, String, ArgValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
