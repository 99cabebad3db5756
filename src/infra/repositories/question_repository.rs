//! Question repository implementation.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

use super::entities::question::{self, ActiveModel, Entity as QuestionEntity};
use crate::domain::{NewQuestion, Question, QuizScope};
use crate::errors::{AppError, AppResult};
use crate::types::PageRequest;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Question repository trait for dependency injection.
///
/// Every listing is ordered by ascending id.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Fetch one page of questions, optionally restricted to a category
    async fn find_page(&self, category: Option<i32>, page: PageRequest) -> AppResult<Vec<Question>>;

    /// Count every question in the store
    async fn count(&self) -> AppResult<u64>;

    /// All questions of one category, unpaginated
    async fn find_by_category(&self, category: i32) -> AppResult<Vec<Question>>;

    /// Case-insensitive substring match on the question text
    async fn search(&self, term: &str) -> AppResult<Vec<Question>>;

    /// Questions in scope whose id is not in `exclude`
    async fn find_candidates(&self, scope: QuizScope, exclude: Vec<i32>) -> AppResult<Vec<Question>>;

    /// Insert a new question; the store assigns the id
    async fn create(&self, new: NewQuestion) -> AppResult<Question>;

    /// Permanently delete a question
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of QuestionRepository
pub struct QuestionStore {
    db: DatabaseConnection,
}

impl QuestionStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl QuestionRepository for QuestionStore {
    async fn find_page(&self, category: Option<i32>, page: PageRequest) -> AppResult<Vec<Question>> {
        let mut query = QuestionEntity::find().order_by_asc(question::Column::Id);
        if let Some(category) = category {
            query = query.filter(question::Column::Category.eq(category));
        }

        let models = query
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Question::from).collect())
    }

    async fn count(&self) -> AppResult<u64> {
        QuestionEntity::find()
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }

    async fn find_by_category(&self, category: i32) -> AppResult<Vec<Question>> {
        let models = QuestionEntity::find()
            .filter(question::Column::Category.eq(category))
            .order_by_asc(question::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Question::from).collect())
    }

    async fn search(&self, term: &str) -> AppResult<Vec<Question>> {
        let pattern = format!("%{}%", term.to_lowercase());
        let models = QuestionEntity::find()
            .filter(Expr::expr(Func::lower(Expr::col(question::Column::Question))).like(pattern))
            .order_by_asc(question::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Question::from).collect())
    }

    async fn find_candidates(&self, scope: QuizScope, exclude: Vec<i32>) -> AppResult<Vec<Question>> {
        let mut query = QuestionEntity::find().order_by_asc(question::Column::Id);
        if let QuizScope::Category(category) = scope {
            query = query.filter(question::Column::Category.eq(category));
        }
        // An empty NOT IN list is not valid SQL on every backend
        if !exclude.is_empty() {
            query = query.filter(question::Column::Id.is_not_in(exclude));
        }

        let models = query.all(&self.db).await.map_err(AppError::from)?;
        Ok(models.into_iter().map(Question::from).collect())
    }

    async fn create(&self, new: NewQuestion) -> AppResult<Question> {
        let active_model = ActiveModel {
            id: NotSet,
            question: Set(new.question),
            answer: Set(new.answer),
            category: Set(new.category),
            difficulty: Set(new.difficulty),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Question::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = QuestionEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
