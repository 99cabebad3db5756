//! Category service.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{category_map, CategoryMap};
use crate::errors::{AppError, AppResult};
use crate::infra::CategoryRepository;

/// Category service trait for dependency injection.
#[async_trait]
pub trait CategoryService: Send + Sync {
    /// Every category as an id -> label map; an empty store is NotFound
    async fn list_categories(&self) -> AppResult<CategoryMap>;
}

/// Concrete implementation of CategoryService
pub struct CategoryManager {
    categories: Arc<dyn CategoryRepository>,
}

impl CategoryManager {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }
}

#[async_trait]
impl CategoryService for CategoryManager {
    async fn list_categories(&self) -> AppResult<CategoryMap> {
        let categories = self.categories.list().await?;
        if categories.is_empty() {
            return Err(AppError::NotFound);
        }

        Ok(category_map(categories))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use crate::infra::MockCategoryRepository;

    #[tokio::test]
    async fn test_list_categories() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_list().returning(|| {
            Ok(vec![
                Category::new(1, "Science"),
                Category::new(2, "Art"),
                Category::new(3, "Geography"),
            ])
        });

        let map = CategoryManager::new(Arc::new(repo)).list_categories().await.unwrap();

        assert_eq!(map.len(), 3);
        assert_eq!(map.get(&2).map(String::as_str), Some("Art"));
    }

    #[tokio::test]
    async fn test_empty_store_is_not_found() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_list().returning(|| Ok(vec![]));

        let result = CategoryManager::new(Arc::new(repo)).list_categories().await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }
}
