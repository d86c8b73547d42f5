//! Typed request arguments resolved from several request sources.

use std::marker::PhantomData;
use std::ops::Deref;

use axum::extract::{FromRequest, Request};
use tracing::{debug, warn};

use crate::args::{ArgumentResolver, Location, RequestSources, Schema};
use crate::error::RestError;

/// Axum extractor for validated request arguments.
///
/// `T` is the schema, `L` one of the [`location`](crate::args::location)
/// markers. The marker fixes which sources are read and how they are merged.
/// When resolution finds nothing, `T` is validated against an empty mapping,
/// so missing required fields are reported by name.
///
/// This extractor may consume the body and must be the last handler argument.
///
/// # Example
///
/// ```rust,ignore
/// use rotkehlchen_rest::args::location::JsonAndQuery;
/// use rotkehlchen_rest::extractors::Args;
/// use rotkehlchen_rest::schemas::AllBalancesQuery;
///
/// async fn handler(args: Args<AllBalancesQuery, JsonAndQuery>) {
///     println!("async: {}", args.async_query);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Args<T, L> {
    value: T,
    location: PhantomData<fn() -> L>,
}

impl<T, L> Args<T, L> {
    /// Consumes the extractor and returns the validated arguments.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, L> Deref for Args<T, L> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<S, T, L> FromRequest<S> for Args<T, L>
where
    S: Send + Sync,
    T: Schema + Send,
    L: Location,
{
    type Rejection = RestError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mode = L::MODE;
        let schema = T::descriptor();

        let sources = RequestSources::capture(req, state, mode.sources())
            .await
            .map_err(|err| {
                warn!(location = %mode, error = %err, "Failed to read request arguments");
                RestError::from(err)
            })?;

        let arguments = ArgumentResolver::new(&sources, &schema)
            .resolve(mode)
            .into_option()
            .unwrap_or_default();
        debug!(
            location = %mode,
            fields = ?arguments.keys().collect::<Vec<_>>(),
            "Resolved request arguments"
        );

        let value = T::from_arguments(arguments).map_err(|err| {
            warn!(location = %mode, error = %err, "Rejected request arguments");
            RestError::from(err)
        })?;

        Ok(Self {
            value,
            location: PhantomData,
        })
    }
}
