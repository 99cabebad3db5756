//! Error envelope middleware.
//!
//! Handlers already answer failures with the JSON envelope. Responses
//! produced by the framework itself (unmatched methods, path and query
//! rejections) come back as bare text or empty bodies; this layer
//! rewrites them so every error a client sees has the same shape.

use axum::{
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};

use crate::errors::{error_response, AppError};

/// Replace non-JSON error responses with the envelope for their status.
pub async fn error_envelope(response: Response) -> Response {
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) || is_json(&response) {
        return response;
    }

    tracing::debug!(status = status.as_u16(), "Wrapping bare error response");

    match AppError::from_status(status) {
        Some(error) => error.into_response(),
        None => error_response(
            status,
            status
                .canonical_reason()
                .unwrap_or("error")
                .to_lowercase(),
        ),
    }
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode};
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_bare_method_not_allowed_is_wrapped() {
        let bare = Response::builder()
            .status(StatusCode::METHOD_NOT_ALLOWED)
            .body(Body::empty())
            .unwrap();

        let response = error_envelope(bare).await;

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], 405);
        assert_eq!(json["message"], "method not allowed");
    }

    #[tokio::test]
    async fn test_unlisted_status_keeps_its_code() {
        let bare = Response::builder()
            .status(StatusCode::UNSUPPORTED_MEDIA_TYPE)
            .body(Body::from("Expected request with `Content-Type: application/json`"))
            .unwrap();

        let response = error_envelope(bare).await;

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        let json = body_json(response).await;
        assert_eq!(json["error"], 415);
        assert_eq!(json["message"], "unsupported media type");
    }

    #[tokio::test]
    async fn test_success_and_json_errors_pass_through() {
        let ok = Response::builder()
            .status(StatusCode::OK)
            .body(Body::from("fine"))
            .unwrap();
        assert_eq!(error_envelope(ok).await.status(), StatusCode::OK);

        let enveloped = AppError::NotFound.into_response();
        let json = body_json(error_envelope(enveloped).await).await;
        assert_eq!(json["message"], "resource not found");
    }
}
