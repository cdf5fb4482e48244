//! Query string extractor that rejects with the standard error envelope.

use crate::errors::AppError;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

/// Like [`axum::extract::Query`], but an unparseable query string comes back
/// as an [`AppError`] JSON response with `INVALID_QUERY` instead of plain text.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::QueryParams;
///
/// async fn by_category(QueryParams(q): QueryParams<CategoryQuery>) -> impl IntoResponse {
///     // ...
/// }
/// ```
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(QueryParams(params))
    }
}
