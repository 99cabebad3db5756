//! Quiz handlers.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{Question, QuizCategory};
use crate::errors::{AppError, AppResult};
use crate::types::ApiResponse;

/// Next-question request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct QuizRequest {
    /// Ids already asked in this quiz
    #[serde(default)]
    #[schema(example = json!([20, 21]))]
    pub previous_questions: Vec<i32>,
    pub quiz_category: Option<QuizCategory>,
}

/// Next question, or null when the quiz is over
#[derive(Debug, Serialize, ToSchema)]
pub struct QuizResponse {
    pub question: Option<Question>,
}

/// Create quiz routes
pub fn quiz_routes() -> Router<AppState> {
    Router::new().route("/", post(next_question))
}

/// Draw the next quiz question
#[utoipa::path(
    post,
    path = "/quizzes",
    tag = "Quizzes",
    request_body = QuizRequest,
    responses(
        (status = 200, description = "Next question, null when exhausted", body = QuizResponse),
        (status = 422, description = "Missing or invalid quiz category, or any other failure")
    )
)]
pub async fn next_question(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<QuizRequest>,
) -> AppResult<Json<ApiResponse<QuizResponse>>> {
    let question = state
        .quiz_service
        .select_quiz_question(payload.previous_questions, payload.quiz_category)
        .await
        .map_err(|e| match e {
            AppError::Unprocessable(_) => e,
            other => {
                tracing::debug!("Quiz draw failed: {}", other);
                AppError::unprocessable(other.to_string())
            }
        })?;

    Ok(Json(ApiResponse::success(QuizResponse { question })))
}
