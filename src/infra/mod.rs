//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection and migrations
//! - Repositories over the question/category tables

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{CategoryRepository, CategoryStore, QuestionRepository, QuestionStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockCategoryRepository, MockQuestionRepository};
