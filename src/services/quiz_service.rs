//! Quiz service - Draws the next question of a quiz.

use async_trait::async_trait;
use rand::seq::IteratorRandom;
use std::sync::Arc;

use crate::domain::{Question, QuizCategory};
use crate::errors::{AppError, AppResult};
use crate::infra::QuestionRepository;

/// Chooses one question out of the remaining candidates.
pub trait QuestionPicker: Send + Sync {
    fn pick(&self, candidates: Vec<Question>) -> Option<Question>;
}

/// Uniform random choice using the thread-local generator
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl QuestionPicker for RandomPicker {
    fn pick(&self, candidates: Vec<Question>) -> Option<Question> {
        candidates.into_iter().choose(&mut rand::thread_rng())
    }
}

/// Quiz service trait for dependency injection.
#[async_trait]
pub trait QuizService: Send + Sync {
    /// Pick a question not yet asked, from the chosen category or all of them.
    ///
    /// `Ok(None)` means nothing in scope is left, including a category id
    /// that names no category; the quiz is over.
    async fn select_quiz_question(
        &self,
        previous_questions: Vec<i32>,
        quiz_category: Option<QuizCategory>,
    ) -> AppResult<Option<Question>>;
}

/// Concrete implementation of QuizService
pub struct QuizMaster {
    questions: Arc<dyn QuestionRepository>,
    picker: Arc<dyn QuestionPicker>,
}

impl QuizMaster {
    pub fn new(questions: Arc<dyn QuestionRepository>, picker: Arc<dyn QuestionPicker>) -> Self {
        Self { questions, picker }
    }
}

#[async_trait]
impl QuizService for QuizMaster {
    async fn select_quiz_question(
        &self,
        previous_questions: Vec<i32>,
        quiz_category: Option<QuizCategory>,
    ) -> AppResult<Option<Question>> {
        let quiz_category =
            quiz_category.ok_or_else(|| AppError::bad_request("quiz_category is required"))?;
        let scope = quiz_category.scope().map_err(AppError::BadRequest)?;

        let candidates = self.questions.find_candidates(scope, previous_questions).await?;
        tracing::debug!(?scope, remaining = candidates.len(), "Drawing quiz question");

        Ok(self.picker.pick(candidates))
    }
}
