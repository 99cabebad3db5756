//! Shared fixtures for integration tests.
//!
//! An in-memory store stands in for PostgreSQL so the full router can be
//! exercised without infrastructure.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use trivia_api::api::{create_router, AppState};
use trivia_api::domain::{Category, NewQuestion, Question, QuizScope};
use trivia_api::errors::{AppError, AppResult};
use trivia_api::infra::db::migrations::SEED_CATEGORIES;
use trivia_api::infra::{CategoryRepository, QuestionRepository};
use trivia_api::services::{RandomPicker, Services};
use trivia_api::types::PageRequest;

/// (id, question, answer, category, difficulty)
const SEED_QUESTIONS: &[(i32, &str, &str, i32, i32)] = &[
    (2, "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
    (4, "What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 5, 4),
    (5, "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
    (6, "What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", 5, 3),
    (9, "What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1),
    (10, "Which is the only team to play in every soccer World Cup tournament?", "Brazil", 6, 3),
    (11, "Which country won the first ever soccer World Cup in 1930?", "Uruguay", 6, 4),
    (12, "Who invented Peanut Butter?", "George Washington Carver", 4, 2),
    (13, "What is the largest lake in Africa?", "Lake Victoria", 3, 2),
    (14, "In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
    (15, "The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
    (16, "Which Dutch graphic artist, initials M C, was a creator of optical illusions?", "Escher", 2, 1),
    (17, "La Giaconda is better known as what?", "Mona Lisa", 2, 3),
    (18, "How many paintings did Van Gogh sell in his lifetime?", "One", 2, 4),
    (19, "Which American artist was a pioneer of Abstract Expressionism, and a leading exponent of action painting?", "Jackson Pollock", 2, 2),
    (20, "What is the heaviest organ in the human body?", "The Liver", 1, 4),
    (21, "Who discovered penicillin?", "Alexander Fleming", 1, 3),
    (22, "Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
    (23, "Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, 4),
];

pub const SEEDED_QUESTION_COUNT: u64 = 19;

struct Tables {
    categories: Vec<Category>,
    questions: BTreeMap<i32, Question>,
    next_id: i32,
}

/// Question and category tables held in memory
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    pub fn empty() -> Self {
        Self {
            tables: Mutex::new(Tables {
                categories: Vec::new(),
                questions: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// The six standard categories with no questions
    pub fn categories_only() -> Self {
        let store = Self::empty();
        store.lock().categories = SEED_CATEGORIES
            .iter()
            .map(|(id, label)| Category::new(*id, *label))
            .collect();
        store
    }

    /// Standard categories plus the sample question bank
    pub fn seeded() -> Self {
        let store = Self::categories_only();
        {
            let mut tables = store.lock();
            for (id, question, answer, category, difficulty) in SEED_QUESTIONS {
                tables.questions.insert(
                    *id,
                    Question {
                        id: *id,
                        question: question.to_string(),
                        answer: answer.to_string(),
                        category: *category,
                        difficulty: *difficulty,
                    },
                );
            }
            tables.next_id = 24;
        }
        store
    }

    pub fn question_ids(&self) -> Vec<i32> {
        self.lock().questions.keys().copied().collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Tables> {
        self.tables.lock().unwrap()
    }
}

#[async_trait]
impl QuestionRepository for InMemoryStore {
    async fn find_page(&self, category: Option<i32>, page: PageRequest) -> AppResult<Vec<Question>> {
        Ok(self
            .lock()
            .questions
            .values()
            .filter(|q| category.map_or(true, |c| q.category == c))
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.lock().questions.len() as u64)
    }

    async fn find_by_category(&self, category: i32) -> AppResult<Vec<Question>> {
        Ok(self
            .lock()
            .questions
            .values()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }

    async fn search(&self, term: &str) -> AppResult<Vec<Question>> {
        let term = term.to_lowercase();
        Ok(self
            .lock()
            .questions
            .values()
            .filter(|q| q.question.to_lowercase().contains(&term))
            .cloned()
            .collect())
    }

    async fn find_candidates(&self, scope: QuizScope, exclude: Vec<i32>) -> AppResult<Vec<Question>> {
        Ok(self
            .lock()
            .questions
            .values()
            .filter(|q| match scope {
                QuizScope::All => true,
                QuizScope::Category(id) => q.category == id,
            })
            .filter(|q| !exclude.contains(&q.id))
            .cloned()
            .collect())
    }

    async fn create(&self, new: NewQuestion) -> AppResult<Question> {
        let mut tables = self.lock();
        let question = Question {
            id: tables.next_id,
            question: new.question,
            answer: new.answer,
            category: new.category,
            difficulty: new.difficulty,
        };
        tables.next_id += 1;
        tables.questions.insert(question.id, question.clone());
        Ok(question)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.lock()
            .questions
            .remove(&id)
            .map(|_| ())
            .ok_or(AppError::NotFound)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn list(&self) -> AppResult<Vec<Category>> {
        Ok(self.lock().categories.clone())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Category>> {
        Ok(self.lock().categories.iter().find(|c| c.id == id).cloned())
    }
}

/// Full router over the given store, without a database handle
pub fn app(store: Arc<InMemoryStore>) -> Router {
    let services = Services::new(store.clone(), store, Arc::new(RandomPicker));
    create_router(AppState::new(&services, None))
}

/// Send one request and decode the JSON body (Null when not JSON)
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    post_raw(uri, body.to_string())
}

pub fn post_raw(uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

/// Assert the failure envelope for a status
pub fn assert_error(status: StatusCode, body: &Value, expected: StatusCode, message: &str) {
    assert_eq!(status, expected);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], expected.as_u16());
    assert_eq!(body["message"], message);
}
