//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on repository traits, so tests
//! can substitute in-memory or mocked stores.

mod category_service;
pub mod container;
mod question_service;
mod quiz_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use category_service::{CategoryManager, CategoryService};
pub use question_service::{
    CategoryQuestions, DeletedQuestion, QuestionManager, QuestionPage, QuestionService,
    SearchResults,
};
pub use quiz_service::{QuestionPicker, QuizMaster, QuizService, RandomPicker};
