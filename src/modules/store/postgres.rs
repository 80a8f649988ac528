//! Postgres-backed trivia store

use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};
use crate::features::quizzes::models::QuizCategory;
use crate::modules::store::TriviaStore;

pub struct PgTriviaStore {
    pool: PgPool,
}

impl PgTriviaStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Build an `ILIKE` pattern matching `term` anywhere, with LIKE wildcards
/// in the term itself escaped so they match literally.
fn contains_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[async_trait]
impl TriviaStore for PgTriviaStore {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, type
            FROM categories
            ORDER BY type, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Storage(e)
        })
    }

    async fn find_category(&self, id: i32) -> Result<Option<Category>> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get category {}: {:?}", id, e);
                AppError::Storage(e)
            })
    }

    async fn list_questions(&self) -> Result<Vec<Question>> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list questions: {:?}", e);
            AppError::Storage(e)
        })
    }

    async fn find_question(&self, id: i32) -> Result<Option<Question>> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get question {}: {:?}", id, e);
            AppError::Storage(e)
        })
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<Question> {
        sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(question.question)
        .bind(question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create question: {:?}", e);
            AppError::Storage(e)
        })
    }

    async fn delete_question(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete question {}: {:?}", id, e);
                AppError::Storage(e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE $1 ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(contains_pattern(term))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to search questions: {:?}", e);
            AppError::Storage(e)
        })
    }

    async fn questions_in_category(&self, category_id: i32) -> Result<Vec<Question>> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list questions of category {}: {:?}", category_id, e);
            AppError::Storage(e)
        })
    }

    async fn quiz_candidates(
        &self,
        category: QuizCategory,
        exclude: &[i32],
    ) -> Result<Vec<Question>> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE id <> ALL($1)
              AND ($2::INT IS NULL OR category = $2)
            ORDER BY id
            "#,
        )
        .bind(exclude)
        .bind(category.category_id())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load quiz candidates: {:?}", e);
            AppError::Storage(e)
        })
    }
}
