use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::questions::models::{NewQuestion, Question};
use crate::shared::deserializers::{LenientInt, LenientText};

/// A question as the client sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct QuestionResponseDto {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl From<Question> for QuestionResponseDto {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

/// Request DTO for creating a question.
///
/// Only presence is checked. `question` and `answer` take any JSON scalar as
/// text; `difficulty` and `category` accept whole numbers or numeric strings.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateQuestionDto {
    #[validate(required(message = "question is required"))]
    #[schema(value_type = Option<String>)]
    pub question: Option<LenientText>,

    #[validate(required(message = "answer is required"))]
    #[schema(value_type = Option<String>)]
    pub answer: Option<LenientText>,

    #[validate(required(message = "difficulty is required"))]
    #[schema(value_type = Option<i32>)]
    pub difficulty: Option<LenientInt>,

    #[validate(required(message = "category is required"))]
    #[schema(value_type = Option<i32>)]
    pub category: Option<LenientInt>,
}

impl TryFrom<CreateQuestionDto> for NewQuestion {
    type Error = AppError;

    fn try_from(dto: CreateQuestionDto) -> Result<Self> {
        dto.validate()
            .map_err(|e| AppError::InvalidInput(e.to_string()))?;

        match (dto.question, dto.answer, dto.difficulty, dto.category) {
            (Some(question), Some(answer), Some(difficulty), Some(category)) => Ok(NewQuestion {
                question: question.into(),
                answer: answer.into(),
                category: category.into(),
                difficulty: difficulty.into(),
            }),
            _ => Err(AppError::InvalidInput(
                "question, answer, difficulty and category are required".to_string(),
            )),
        }
    }
}

/// Request DTO for `POST /questions/search`
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SearchQuestionsDto {
    /// Case-insensitive substring of the question text
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
}

/// Response DTO for `GET /questions`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionListResponseDto {
    pub success: bool,
    pub questions: Vec<QuestionResponseDto>,
    /// Number of questions before pagination
    pub total_questions: usize,
    pub categories: BTreeMap<i32, String>,
    #[serde(rename = "currentCategory")]
    pub current_category: Option<i32>,
}

/// Response DTO for search and per-category listings
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionPageResponseDto {
    pub success: bool,
    pub questions: Vec<QuestionResponseDto>,
    /// Size of the whole matching set, not just this page
    #[serde(rename = "totalQuestions")]
    pub total_questions: usize,
    #[serde(rename = "currentCategory")]
    pub current_category: Option<i32>,
}

/// Response DTO for `POST /questions`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateQuestionResponseDto {
    pub success: bool,
    pub question: QuestionResponseDto,
}

/// Response DTO for `DELETE /questions/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteQuestionResponseDto {
    pub success: bool,
    pub deleted_id: i32,
}
