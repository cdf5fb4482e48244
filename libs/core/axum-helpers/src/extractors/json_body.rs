//! JSON body extractor that rejects with the standard error envelope.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

/// Like [`axum::Json`], but malformed bodies, missing fields, and a wrong
/// content type come back as an [`AppError`] JSON response instead of plain text.
///
/// Business-rule validation is left to the service layer.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::JsonBody;
///
/// async fn create(JsonBody(input): JsonBody<CreateProduct>) -> impl IntoResponse {
///     // ...
/// }
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(data))
    }
}
