//! Category domain entity.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Labeled grouping of questions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: i32,
    /// Display label, e.g. "Science"
    #[serde(rename = "type")]
    #[schema(example = "Science")]
    pub kind: String,
}

impl Category {
    pub fn new(id: i32, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

/// Category id -> label, iterated in ascending id order.
///
/// Serializes as a JSON object keyed by the decimal id.
pub type CategoryMap = BTreeMap<i32, String>;

/// Collect categories into an id -> label mapping.
pub fn category_map(categories: impl IntoIterator<Item = Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_map_is_ordered_and_keyed_by_id() {
        let map = category_map(vec![
            Category::new(3, "Geography"),
            Category::new(1, "Science"),
            Category::new(2, "Art"),
        ]);

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"1":"Science","2":"Art","3":"Geography"}"#);
    }

    #[test]
    fn test_category_serializes_label_as_type() {
        let json = serde_json::to_value(Category::new(6, "Sports")).unwrap();
        assert_eq!(json["type"], "Sports");
    }
}
