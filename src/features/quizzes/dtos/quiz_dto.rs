use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::questions::dtos::QuestionResponseDto;
use crate::features::quizzes::models::QuizCategory;
use crate::shared::constants::ALL_CATEGORIES_TYPE;
use crate::shared::deserializers::LenientInt;

/// Category selector as the trivia client sends it.
///
/// `type == "click"` selects every category and `id` is ignored; any other
/// `type` selects the category `id`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizCategoryDto {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub id: Option<LenientInt>,
}

impl TryFrom<QuizCategoryDto> for QuizCategory {
    type Error = AppError;

    fn try_from(dto: QuizCategoryDto) -> Result<Self> {
        if dto.kind == ALL_CATEGORIES_TYPE {
            return Ok(QuizCategory::AllCategories);
        }

        dto.id
            .map(|id| QuizCategory::SpecificCategory(id.into()))
            .ok_or_else(|| {
                AppError::InvalidInput(format!(
                    "quiz_category.id is required for category type {:?}",
                    dto.kind
                ))
            })
    }
}

/// Request DTO for `POST /quizzes`
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct PlayQuizDto {
    /// Ids already served in this quiz session
    #[validate(required(message = "previous_questions is required"))]
    #[schema(value_type = Option<Vec<i32>>)]
    pub previous_questions: Option<Vec<LenientInt>>,

    #[validate(required(message = "quiz_category is required"))]
    pub quiz_category: Option<QuizCategoryDto>,
}

/// A validated quiz round request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRound {
    pub category: QuizCategory,
    pub previous_questions: Vec<i32>,
}

impl TryFrom<PlayQuizDto> for QuizRound {
    type Error = AppError;

    fn try_from(dto: PlayQuizDto) -> Result<Self> {
        dto.validate()
            .map_err(|e| AppError::InvalidInput(e.to_string()))?;

        match (dto.previous_questions, dto.quiz_category) {
            (Some(previous), Some(category)) => Ok(QuizRound {
                category: category.try_into()?,
                previous_questions: previous.into_iter().map(i32::from).collect(),
            }),
            _ => Err(AppError::InvalidInput(
                "previous_questions and quiz_category are required".to_string(),
            )),
        }
    }
}

/// Response DTO for `POST /quizzes`; `question` is null once the quiz is exhausted
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizQuestionResponseDto {
    pub success: bool,
    pub question: Option<QuestionResponseDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(body: &str) -> Result<QuizRound> {
        let dto: PlayQuizDto = serde_json::from_str(body).unwrap();
        QuizRound::try_from(dto)
    }

    #[test]
    fn test_click_selects_all_categories() {
        let parsed = round(r#"{"previous_questions":[],"quiz_category":{"type":"click","id":0}}"#)
            .unwrap();

        assert_eq!(
            parsed,
            QuizRound {
                category: QuizCategory::AllCategories,
                previous_questions: vec![],
            }
        );
    }

    #[test]
    fn test_click_without_id_is_accepted() {
        let parsed = round(r#"{"previous_questions":[4],"quiz_category":{"type":"click"}}"#).unwrap();
        assert_eq!(parsed.category, QuizCategory::AllCategories);
    }

    #[test]
    fn test_named_type_selects_its_id() {
        let parsed = round(
            r#"{"previous_questions":[20,"21"],"quiz_category":{"type":"Science","id":"1"}}"#,
        )
        .unwrap();

        assert_eq!(parsed.category, QuizCategory::SpecificCategory(1));
        assert_eq!(parsed.previous_questions, vec![20, 21]);
    }

    #[test]
    fn test_named_type_without_id_is_invalid() {
        let err = round(r#"{"previous_questions":[],"quiz_category":{"type":"Science"}}"#)
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_missing_keys_are_invalid() {
        assert!(round(r#"{"previous_questions":[]}"#).is_err());
        assert!(round(r#"{"quiz_category":{"type":"click","id":0}}"#).is_err());
        assert!(round(r#"{"previous_questions":null,"quiz_category":{"type":"click"}}"#).is_err());
    }
}
