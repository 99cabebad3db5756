//! Question handlers.

use axum::{
    extract::{Query, State},
    response::Json,
    routing::{delete, get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::api::extractors::{IdPath, JsonBody, ValidatedJson};
use crate::api::AppState;
use crate::domain::NumericField;
use crate::errors::{AppError, AppResult};
use crate::services::{DeletedQuestion, QuestionPage, SearchResults};
use crate::types::{ApiResponse, Created, PageQuery, PageRequest};

/// Query string of the question list
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct QuestionListQuery {
    /// 1-based page number; invalid values fall back to 1
    pub page: Option<String>,
    /// Restrict the list to one category id
    pub category: Option<String>,
}

impl QuestionListQuery {
    fn category(&self) -> AppResult<Option<i32>> {
        self.category
            .as_deref()
            .filter(|raw| !raw.is_empty())
            .map(|raw| {
                raw.parse()
                    .map_err(|_| AppError::bad_request(format!("invalid category {:?}", raw)))
            })
            .transpose()
    }
}

/// New question request
///
/// Numeric fields also accept numeric strings, as sent by HTML forms.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateQuestionRequest {
    #[validate(required(message = "question is required"), length(min = 1, message = "question must not be empty"))]
    #[schema(example = "Who discovered penicillin?")]
    pub question: Option<String>,
    #[validate(required(message = "answer is required"), length(min = 1, message = "answer must not be empty"))]
    #[schema(example = "Alexander Fleming")]
    pub answer: Option<String>,
    #[validate(required(message = "category is required"))]
    #[schema(value_type = i32, example = 1)]
    pub category: Option<NumericField>,
    #[validate(required(message = "difficulty is required"))]
    #[schema(value_type = i32, example = 2)]
    pub difficulty: Option<NumericField>,
}

/// Id of a newly created question
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedQuestion {
    #[schema(example = 24)]
    pub created: i32,
}

/// Search request
#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchRequest {
    /// Case-insensitive substring of the question text
    #[serde(rename = "searchTerm")]
    #[schema(example = "title")]
    pub search_term: Option<String>,
}

/// Create question routes
pub fn question_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_questions).post(create_question))
        .route("/search", post(search_questions))
        .route("/:id", delete(delete_question))
}

/// List questions, ten per page
#[utoipa::path(
    get,
    path = "/questions",
    tag = "Questions",
    params(QuestionListQuery),
    responses(
        (status = 200, description = "One page of questions", body = QuestionPage),
        (status = 400, description = "Malformed category filter"),
        (status = 404, description = "Page is empty or category unknown")
    )
)]
pub async fn list_questions(
    State(state): State<AppState>,
    Query(query): Query<QuestionListQuery>,
) -> AppResult<Json<ApiResponse<QuestionPage>>> {
    let category = query.category()?;
    let page = PageRequest::parse(query.page.as_deref());

    let listing = state.question_service.list_questions(page, category).await?;
    Ok(Json(ApiResponse::success(listing)))
}

/// Delete a question permanently
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    tag = "Questions",
    params(
        ("id" = i32, Path, description = "Question ID"),
        ("page" = Option<String>, Query, description = "Page of remaining questions to return")
    ),
    responses(
        (status = 200, description = "Question deleted", body = DeletedQuestion),
        (status = 404, description = "Question not found")
    )
)]
pub async fn delete_question(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<ApiResponse<DeletedQuestion>>> {
    let deleted = state.question_service.delete_question(id, query.page()).await?;
    Ok(Json(ApiResponse::success(deleted)))
}

/// Create a new question
#[utoipa::path(
    post,
    path = "/questions",
    tag = "Questions",
    request_body = CreateQuestionRequest,
    responses(
        (status = 201, description = "Question created", body = CreatedQuestion),
        (status = 422, description = "Missing or invalid field, or unknown category")
    )
)]
pub async fn create_question(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateQuestionRequest>,
) -> AppResult<Created<CreatedQuestion>> {
    let (Some(question), Some(answer), Some(category), Some(difficulty)) = (
        payload.question,
        payload.answer,
        payload.category,
        payload.difficulty,
    ) else {
        return Err(AppError::unprocessable("missing field"));
    };
    let category = category.to_i32().map_err(AppError::Unprocessable)?;
    let difficulty = difficulty.to_i32().map_err(AppError::Unprocessable)?;

    let created = state
        .question_service
        .create_question(question, answer, category, difficulty)
        .await?;

    Ok(Created(CreatedQuestion { created }))
}

/// Search questions by a substring of their text
#[utoipa::path(
    post,
    path = "/questions/search",
    tag = "Questions",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Matching questions", body = SearchResults),
        (status = 400, description = "Empty search term or malformed body"),
        (status = 404, description = "No question matches")
    )
)]
pub async fn search_questions(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<SearchRequest>,
) -> AppResult<Json<ApiResponse<SearchResults>>> {
    let results = state
        .question_service
        .search_questions(payload.search_term)
        .await?;
    Ok(Json(ApiResponse::success(results)))
}
