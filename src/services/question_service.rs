//! Question service - listing, search, creation and deletion of questions.
//!
//! Totals reported alongside listings and search results always count
//! the whole store, not the filtered view; clients compute page counts
//! from them.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::domain::{category_map, CategoryMap, NewQuestion, Question};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{CategoryRepository, QuestionRepository};
use crate::types::PageRequest;

/// One page of the question list
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    /// Number of questions in the whole store
    pub total_questions: u64,
    #[schema(value_type = Object)]
    pub categories: CategoryMap,
    /// Label of the category filter, if one was given
    pub current_category: Option<String>,
}

/// Outcome of a delete, with the requested page of what remains
#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedQuestion {
    pub deleted: i32,
    pub questions: Vec<Question>,
    pub total_questions: u64,
}

/// Search matches
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResults {
    pub questions: Vec<Question>,
    /// Number of questions in the whole store
    pub total_questions: u64,
}

/// Every question of one category
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryQuestions {
    pub questions: Vec<Question>,
    /// Number of questions returned
    pub total_questions: u64,
    pub current_category: String,
}

/// Question service trait for dependency injection.
#[async_trait]
pub trait QuestionService: Send + Sync {
    /// Paginated list, ascending by id, optionally filtered by category
    async fn list_questions(&self, page: PageRequest, category: Option<i32>) -> AppResult<QuestionPage>;

    /// Hard delete a question
    async fn delete_question(&self, id: i32, page: PageRequest) -> AppResult<DeletedQuestion>;

    /// Persist a new question and return its id
    async fn create_question(
        &self,
        question: String,
        answer: String,
        category: i32,
        difficulty: i32,
    ) -> AppResult<i32>;

    /// Case-insensitive substring search on question text
    async fn search_questions(&self, term: Option<String>) -> AppResult<SearchResults>;

    /// All questions of a category, unpaginated
    async fn list_by_category(&self, category_id: i32) -> AppResult<CategoryQuestions>;
}

/// Concrete implementation of QuestionService using repositories.
pub struct QuestionManager {
    questions: Arc<dyn QuestionRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl QuestionManager {
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            questions,
            categories,
        }
    }
}

#[async_trait]
impl QuestionService for QuestionManager {
    async fn list_questions(&self, page: PageRequest, category: Option<i32>) -> AppResult<QuestionPage> {
        let current_category = match category {
            Some(id) => Some(self.categories.find_by_id(id).await?.ok_or_not_found()?.kind),
            None => None,
        };

        let questions = self.questions.find_page(category, page).await?;
        if questions.is_empty() {
            return Err(AppError::NotFound);
        }

        let total_questions = self.questions.count().await?;
        let categories = category_map(self.categories.list().await?);

        Ok(QuestionPage {
            questions,
            total_questions,
            categories,
            current_category,
        })
    }

    async fn delete_question(&self, id: i32, page: PageRequest) -> AppResult<DeletedQuestion> {
        self.questions.delete(id).await?;
        tracing::info!(question_id = id, "Question deleted");

        let questions = self.questions.find_page(None, page).await?;
        let total_questions = self.questions.count().await?;

        Ok(DeletedQuestion {
            deleted: id,
            questions,
            total_questions,
        })
    }

    async fn create_question(
        &self,
        question: String,
        answer: String,
        category: i32,
        difficulty: i32,
    ) -> AppResult<i32> {
        let new = NewQuestion::new(question, answer, category, difficulty)
            .map_err(AppError::unprocessable)?;

        // Orphaned category references are refused here rather than left to the store
        if self.categories.find_by_id(category).await?.is_none() {
            return Err(AppError::unprocessable(format!("category {} does not exist", category)));
        }

        let created = self.questions.create(new).await.map_err(|e| {
            tracing::warn!("Failed to persist question: {}", e);
            AppError::unprocessable("question could not be stored")
        })?;

        tracing::info!(question_id = created.id, "Question created");
        Ok(created.id)
    }

    async fn search_questions(&self, term: Option<String>) -> AppResult<SearchResults> {
        let term = term
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::bad_request("searchTerm is required"))?;

        let questions = self.questions.search(&term).await?;
        if questions.is_empty() {
            return Err(AppError::NotFound);
        }

        let total_questions = self.questions.count().await?;

        Ok(SearchResults {
            questions,
            total_questions,
        })
    }

    async fn list_by_category(&self, category_id: i32) -> AppResult<CategoryQuestions> {
        let category = self
            .categories
            .find_by_id(category_id)
            .await?
            .ok_or_not_found()?;

        let questions = self.questions.find_by_category(category_id).await?;
        if questions.is_empty() {
            return Err(AppError::NotFound);
        }

        Ok(CategoryQuestions {
            total_questions: questions.len() as u64,
            questions,
            current_category: category.kind,
        })
    }
}
