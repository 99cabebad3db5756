//! Service Container - Centralized service access.
//!
//! Depends on service traits, not implementations, so the HTTP layer can
//! be driven by any repository backend.

use std::sync::Arc;

use super::{
    CategoryManager, CategoryService, QuestionManager, QuestionPicker, QuestionService,
    QuizMaster, QuizService, RandomPicker,
};
use crate::infra::{CategoryRepository, CategoryStore, QuestionRepository, QuestionStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get question service
    fn questions(&self) -> Arc<dyn QuestionService>;

    /// Get category service
    fn categories(&self) -> Arc<dyn CategoryService>;

    /// Get quiz service
    fn quiz(&self) -> Arc<dyn QuizService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    question_service: Arc<dyn QuestionService>,
    category_service: Arc<dyn CategoryService>,
    quiz_service: Arc<dyn QuizService>,
}

impl Services {
    /// Wire every service over the given repositories.
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        categories: Arc<dyn CategoryRepository>,
        picker: Arc<dyn QuestionPicker>,
    ) -> Self {
        Self {
            question_service: Arc::new(QuestionManager::new(questions.clone(), categories.clone())),
            category_service: Arc::new(CategoryManager::new(categories)),
            quiz_service: Arc::new(QuizMaster::new(questions, picker)),
        }
    }

    /// Create service container backed by the database
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        let questions = Arc::new(QuestionStore::new(db.clone()));
        let categories = Arc::new(CategoryStore::new(db));

        Self::new(questions, categories, Arc::new(RandomPicker))
    }
}

impl ServiceContainer for Services {
    fn questions(&self) -> Arc<dyn QuestionService> {
        self.question_service.clone()
    }

    fn categories(&self) -> Arc<dyn CategoryService> {
        self.category_service.clone()
    }

    fn quiz(&self) -> Arc<dyn QuizService> {
        self.quiz_service.clone()
    }
}
