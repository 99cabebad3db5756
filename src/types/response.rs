use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

/// Standard API response wrapper
///
/// Payload fields are flattened next to the `success` flag, e.g.
/// `{"success": true, "categories": {...}}`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Created response helper (common pattern for POST endpoints)
pub struct Created<T: Serialize>(pub T);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::CREATED, Json(ApiResponse::success(self.0))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Deleted {
        deleted: i32,
    }

    #[test]
    fn test_payload_is_flattened() {
        let json = serde_json::to_value(ApiResponse::success(Deleted { deleted: 7 })).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "deleted": 7}));
    }

    #[test]
    fn test_created_sets_status() {
        let response = Created(Deleted { deleted: 1 }).into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}
