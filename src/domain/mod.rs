//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod category;
pub mod question;
pub mod quiz;

pub use category::{category_map, Category, CategoryMap};
pub use question::{NewQuestion, Question};
pub use quiz::{NumericField, QuizCategory, QuizScope};
