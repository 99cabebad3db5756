//! Quiz selection types.
//!
//! The front-end describes the quiz category as `{"type": ..., "id": ...}`
//! where the id may arrive as a number or as a numeric string, and the
//! "All" choice is sent as `{"type": "click", "id": 0}`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::{QUIZ_ALL_CATEGORIES_ID, QUIZ_ALL_CATEGORIES_TYPE};

/// Which questions a quiz draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    /// Every category
    All,
    /// A single category
    Category(i32),
}

/// Integer as sent by browser clients: number or numeric string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericField {
    Number(i64),
    Text(String),
}

impl NumericField {
    pub fn to_i32(&self) -> Result<i32, String> {
        match self {
            NumericField::Number(n) => {
                i32::try_from(*n).map_err(|_| format!("{} is out of range", n))
            }
            NumericField::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| format!("{:?} is not an integer", s)),
        }
    }
}

/// Quiz category object in the quiz request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuizCategory {
    /// Category label, or "click" for all categories
    #[serde(rename = "type")]
    #[schema(example = "Science")]
    pub kind: String,
    #[serde(default)]
    #[schema(value_type = Option<i32>, example = 1)]
    pub id: Option<NumericField>,
}

impl QuizCategory {
    /// Resolve the wire form into a selection scope.
    pub fn scope(&self) -> Result<QuizScope, String> {
        if self.kind == QUIZ_ALL_CATEGORIES_TYPE {
            return Ok(QuizScope::All);
        }

        let id = self
            .id
            .as_ref()
            .ok_or_else(|| "quiz category id is missing".to_string())?
            .to_i32()?;

        if id == QUIZ_ALL_CATEGORIES_ID {
            Ok(QuizScope::All)
        } else {
            Ok(QuizScope::Category(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> QuizCategory {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_click_means_all_categories() {
        let category = parse(r#"{"type": "click", "id": 0}"#);
        assert_eq!(category.scope(), Ok(QuizScope::All));
    }

    #[test]
    fn test_zero_id_means_all_categories() {
        let category = parse(r#"{"type": "", "id": "0"}"#);
        assert_eq!(category.scope(), Ok(QuizScope::All));
    }

    #[test]
    fn test_numeric_and_string_ids() {
        assert_eq!(
            parse(r#"{"type": "Entertainment", "id": 5}"#).scope(),
            Ok(QuizScope::Category(5))
        );
        assert_eq!(
            parse(r#"{"type": "Science", "id": "1"}"#).scope(),
            Ok(QuizScope::Category(1))
        );
    }

    #[test]
    fn test_malformed_ids_are_rejected() {
        assert!(parse(r#"{"type": "Science", "id": "one"}"#).scope().is_err());
        assert!(parse(r#"{"type": "Science"}"#).scope().is_err());
        assert!(parse(r#"{"type": "Science", "id": 99999999999}"#).scope().is_err());
    }
}
