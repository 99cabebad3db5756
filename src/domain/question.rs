//! Question domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Trivia question as stored and as rendered to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Question {
    #[schema(example = 12)]
    pub id: i32,
    #[schema(example = "Who discovered penicillin?")]
    pub question: String,
    #[schema(example = "Alexander Fleming")]
    pub answer: String,
    /// Category identifier
    #[schema(example = 1)]
    pub category: i32,
    #[schema(example = 2)]
    pub difficulty: i32,
}

/// Fields required to persist a new question.
///
/// The id is assigned by the store on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl NewQuestion {
    /// Build a new question, rejecting blank question or answer text.
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: i32,
        difficulty: i32,
    ) -> Result<Self, &'static str> {
        let question = question.into();
        let answer = answer.into();

        if question.trim().is_empty() {
            return Err("question text is required");
        }
        if answer.trim().is_empty() {
            return Err("answer text is required");
        }

        Ok(Self {
            question,
            answer,
            category,
            difficulty,
        })
    }
}
