use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::quizzes::dtos::{PlayQuizDto, QuizQuestionResponseDto, QuizRound};
use crate::features::quizzes::services::QuizService;
use crate::shared::types::ErrorResponse;

/// Serve the next quiz question
///
/// Picks uniformly among the questions of the selected category that are not
/// listed in `previous_questions`. Returns `question: null` when none remain.
#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = PlayQuizDto,
    responses(
        (status = 200, description = "Next question, or null when the quiz is exhausted", body = QuizQuestionResponseDto),
        (status = 422, description = "Missing previous_questions or quiz_category", body = ErrorResponse)
    ),
    tag = "quizzes"
)]
pub async fn play_quiz(
    State(service): State<Arc<QuizService>>,
    AppJson(dto): AppJson<PlayQuizDto>,
) -> Result<Json<QuizQuestionResponseDto>> {
    let round = QuizRound::try_from(dto)?;
    let question = service.next_question(round).await?;

    Ok(Json(QuizQuestionResponseDto {
        success: true,
        question,
    }))
}
