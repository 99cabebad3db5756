//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{CategoryService, QuestionService, QuizService, ServiceContainer, Services};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Question listing, search, create and delete
    pub question_service: Arc<dyn QuestionService>,
    /// Category listing
    pub category_service: Arc<dyn CategoryService>,
    /// Quiz draws
    pub quiz_service: Arc<dyn QuizService>,
    /// Database handle for health checks; absent when services run over
    /// non-database repositories
    pub database: Option<Arc<Database>>,
}

impl AppState {
    /// Create application state backed by the database.
    pub fn from_database(database: Arc<Database>) -> Self {
        let services = Services::from_connection(database.get_connection());
        Self::new(&services, Some(database))
    }

    /// Create application state from any service container.
    pub fn new(services: &impl ServiceContainer, database: Option<Arc<Database>>) -> Self {
        Self {
            question_service: services.questions(),
            category_service: services.categories(),
            quiz_service: services.quiz(),
            database,
        }
    }
}
