//! Trivia data access
//!
//! Feature services never talk to the database directly; they hold a
//! [`SharedStore`] handle injected at startup. Production wires in
//! [`PgTriviaStore`], tests use the in-memory implementation.

#[cfg(test)]
mod memory;
mod postgres;

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};
use crate::features::quizzes::models::QuizCategory;

#[cfg(test)]
pub use memory::InMemoryTriviaStore;
pub use postgres::PgTriviaStore;

/// Storage operations for categories and questions
#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// All categories, ordered by label
    async fn list_categories(&self) -> Result<Vec<Category>>;
    async fn find_category(&self, id: i32) -> Result<Option<Category>>;

    /// All questions, ordered by id
    async fn list_questions(&self) -> Result<Vec<Question>>;
    async fn find_question(&self, id: i32) -> Result<Option<Question>>;
    async fn insert_question(&self, question: NewQuestion) -> Result<Question>;
    /// Returns whether a row was removed
    async fn delete_question(&self, id: i32) -> Result<bool>;

    /// Questions whose text contains `term`, ignoring case, ordered by id
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>>;
    /// Questions of one category, ordered by id
    async fn questions_in_category(&self, category_id: i32) -> Result<Vec<Question>>;
    /// Questions a quiz round may serve: inside `category` and not in `exclude`
    async fn quiz_candidates(&self, category: QuizCategory, exclude: &[i32])
        -> Result<Vec<Question>>;
}

pub type SharedStore = Arc<dyn TriviaStore>;
