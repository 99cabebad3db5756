//! Integer path id extractor whose rejection is `404 Not Found`.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::errors::AppError;

/// Numeric `:id` path segment.
///
/// A segment that is not an `i32` means the route does not name any
/// resource, so it is answered like an unmatched path.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::debug!(error = %e, "Path id did not match");
                AppError::NotFound
            })?;

        Ok(IdPath(id))
    }
}
