use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::category_map;
use crate::features::questions::dtos::{
    QuestionListResponseDto, QuestionPageResponseDto, QuestionResponseDto,
};
use crate::features::questions::models::{NewQuestion, Question};
use crate::modules::store::SharedStore;
use crate::shared::types::paginate;

/// Service for question listing, search and maintenance
pub struct QuestionService {
    store: SharedStore,
}

fn page_of(page: i64, questions: &[Question]) -> Vec<QuestionResponseDto> {
    paginate(page, questions)
        .iter()
        .cloned()
        .map(QuestionResponseDto::from)
        .collect()
}

impl QuestionService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// One page of all questions plus the category map; an empty page is "not found"
    pub async fn list(&self, page: i64) -> Result<QuestionListResponseDto> {
        let categories = self.store.list_categories().await?;
        let questions = self.store.list_questions().await?;

        let current_page = page_of(page, &questions);
        if current_page.is_empty() {
            return Err(AppError::NotFound(format!("Question page {} is empty", page)));
        }

        Ok(QuestionListResponseDto {
            success: true,
            questions: current_page,
            total_questions: questions.len(),
            categories: category_map(categories),
            current_category: None,
        })
    }

    pub async fn create(&self, question: NewQuestion) -> Result<QuestionResponseDto> {
        let created = self.store.insert_question(question).await?;

        tracing::info!(
            "Question created: id={}, category={}, difficulty={}",
            created.id,
            created.category,
            created.difficulty
        );

        Ok(created.into())
    }

    /// Delete a question, returning its id
    pub async fn delete(&self, id: i32) -> Result<i32> {
        if self.store.find_question(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Question {} not found", id)));
        }

        if !self.store.delete_question(id).await? {
            // Removed by a concurrent request between lookup and delete
            return Err(AppError::NotFound(format!("Question {} not found", id)));
        }

        tracing::info!("Question deleted: id={}", id);

        Ok(id)
    }

    /// Case-insensitive substring search over question text.
    ///
    /// A missing or empty term is rejected; a term without matches is an
    /// empty, successful page.
    pub async fn search(&self, term: Option<&str>, page: i64) -> Result<QuestionPageResponseDto> {
        let term = term
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::InvalidInput("searchTerm is required".to_string()))?;

        let matches = self.store.search_questions(term).await?;

        tracing::debug!("Search for {:?} matched {} questions", term, matches.len());

        Ok(QuestionPageResponseDto {
            success: true,
            questions: page_of(page, &matches),
            total_questions: matches.len(),
            current_category: None,
        })
    }

    /// One page of the questions in a category
    pub async fn list_by_category(
        &self,
        category_id: i32,
        page: i64,
    ) -> Result<QuestionPageResponseDto> {
        if self.store.find_category(category_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Category {} not found",
                category_id
            )));
        }

        let questions = self.store.questions_in_category(category_id).await?;

        let current_page = page_of(page, &questions);
        if current_page.is_empty() {
            return Err(AppError::NotFound(format!(
                "Category {} has no questions on page {}",
                category_id, page
            )));
        }

        Ok(QuestionPageResponseDto {
            success: true,
            questions: current_page,
            total_questions: questions.len(),
            current_category: Some(category_id),
        })
    }
}
