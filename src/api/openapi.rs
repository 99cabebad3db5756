//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{category_handler, question_handler, quiz_handler};
use crate::domain::{Question, QuizCategory};
use crate::services::{CategoryQuestions, DeletedQuestion, QuestionPage, SearchResults};

/// OpenAPI documentation for the Trivia API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trivia API",
        version = "0.1.0",
        description = "Trivia question bank and quiz API with Axum and SeaORM",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(
        // Category endpoints
        category_handler::list_categories,
        category_handler::list_category_questions,
        // Question endpoints
        question_handler::list_questions,
        question_handler::create_question,
        question_handler::delete_question,
        question_handler::search_questions,
        // Quiz endpoints
        quiz_handler::next_question,
    ),
    components(
        schemas(
            // Domain types
            Question,
            QuizCategory,
            // Service results
            QuestionPage,
            DeletedQuestion,
            SearchResults,
            CategoryQuestions,
            // Request and response bodies
            category_handler::CategoriesResponse,
            question_handler::CreateQuestionRequest,
            question_handler::CreatedQuestion,
            question_handler::SearchRequest,
            quiz_handler::QuizRequest,
            quiz_handler::QuizResponse,
        )
    ),
    tags(
        (name = "Categories", description = "Question categories"),
        (name = "Questions", description = "Question bank management and search"),
        (name = "Quizzes", description = "Quiz play")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_is_documented() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/categories",
            "/categories/{id}/questions",
            "/questions",
            "/questions/{id}",
            "/questions/search",
            "/quizzes",
        ] {
            assert!(paths.contains(&expected), "missing {}", expected);
        }
    }
}
