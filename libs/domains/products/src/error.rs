use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// Boxed store error kept as the source of a persistence failure
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("invalid product data: {0}")]
    InvalidInput(String),

    #[error("product not found: {0}")]
    NotFound(String),

    #[error("{message}")]
    Persistence {
        message: String,
        #[source]
        source: Option<BoxError>,
    },
}

pub type ProductResult<T> = Result<T, ProductError>;

impl ProductError {
    /// Wrap a store failure with a short description of the operation
    pub fn persistence(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        ProductError::Persistence {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Persistence failure with no underlying error value (e.g. a malformed record)
    pub fn persistence_msg(message: impl Into<String>) -> Self {
        ProductError::Persistence {
            message: message.into(),
            source: None,
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ProductError::InvalidInput(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ProductError::NotFound(_))
    }

    pub fn is_persistence(&self) -> bool {
        matches!(self, ProductError::Persistence { .. })
    }
}

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::InvalidInput(_) => AppError::BadRequest(err.to_string()),
            ProductError::NotFound(_) => AppError::NotFound("product not found".to_string()),
            ProductError::Persistence { message, source } => {
                if let Some(source) = source {
                    tracing::error!(error = %source, "{}", message);
                }
                AppError::Persistence(message)
            }
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
