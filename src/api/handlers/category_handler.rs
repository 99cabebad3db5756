//! Category handlers.

use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::extractors::IdPath;
use crate::api::AppState;
use crate::domain::CategoryMap;
use crate::errors::AppResult;
use crate::services::CategoryQuestions;
use crate::types::ApiResponse;

/// Category listing
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoriesResponse {
    /// Category labels keyed by id
    #[schema(value_type = Object, example = json!({"1": "Science", "2": "Art"}))]
    pub categories: CategoryMap,
}

/// Create category routes
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories))
        .route("/:id/questions", get(list_category_questions))
}

/// List all categories
#[utoipa::path(
    get,
    path = "/categories",
    tag = "Categories",
    responses(
        (status = 200, description = "All categories", body = CategoriesResponse),
        (status = 404, description = "No categories exist")
    )
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<CategoriesResponse>>> {
    let categories = state.category_service.list_categories().await?;
    Ok(Json(ApiResponse::success(CategoriesResponse { categories })))
}

/// List every question of a category
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    tag = "Categories",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Questions of the category", body = CategoryQuestions),
        (status = 404, description = "Unknown category or no questions")
    )
)]
pub async fn list_category_questions(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<ApiResponse<CategoryQuestions>>> {
    let questions = state.question_service.list_by_category(id).await?;
    Ok(Json(ApiResponse::success(questions)))
}
