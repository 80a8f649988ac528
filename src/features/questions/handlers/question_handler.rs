use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppJsonRejection, AppPath, AppQuery};
use crate::features::questions::dtos::{
    CreateQuestionDto, CreateQuestionResponseDto, DeleteQuestionResponseDto,
    QuestionListResponseDto, QuestionPageResponseDto, SearchQuestionsDto,
};
use crate::features::questions::models::NewQuestion;
use crate::features::questions::services::QuestionService;
use crate::shared::types::{ErrorResponse, PageQuery};

/// List questions, ten per page
#[utoipa::path(
    get,
    path = "/questions",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of questions", body = QuestionListResponseDto),
        (status = 404, description = "Page is empty", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn list_questions(
    State(service): State<Arc<QuestionService>>,
    AppQuery(query): AppQuery<PageQuery>,
) -> Result<Json<QuestionListResponseDto>> {
    let page = service.list(query.page()).await?;
    Ok(Json(page))
}

/// Create a question
///
/// All four fields must be present; values are not range-checked.
#[utoipa::path(
    post,
    path = "/questions",
    request_body = CreateQuestionDto,
    responses(
        (status = 200, description = "Question created", body = CreateQuestionResponseDto),
        (status = 422, description = "A field is missing or the insert failed", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn create_question(
    State(service): State<Arc<QuestionService>>,
    AppJson(dto): AppJson<CreateQuestionDto>,
) -> Result<Json<CreateQuestionResponseDto>> {
    let new_question = NewQuestion::try_from(dto)?;
    let question = service.create(new_question).await?;

    Ok(Json(CreateQuestionResponseDto {
        success: true,
        question,
    }))
}

/// Delete a question by id
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(
        ("id" = i32, Path, description = "Question id")
    ),
    responses(
        (status = 200, description = "Question deleted", body = DeleteQuestionResponseDto),
        (status = 404, description = "Question not found", body = ErrorResponse),
        (status = 422, description = "Delete failed", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn delete_question(
    State(service): State<Arc<QuestionService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<DeleteQuestionResponseDto>> {
    let deleted_id = service.delete(id).await?;

    Ok(Json(DeleteQuestionResponseDto {
        success: true,
        deleted_id,
    }))
}

/// Search questions by text
///
/// Every failure on this endpoint, including a missing or empty `searchTerm`,
/// is reported as 404.
#[utoipa::path(
    post,
    path = "/questions/search",
    params(PageQuery),
    request_body = SearchQuestionsDto,
    responses(
        (status = 200, description = "One page of matching questions", body = QuestionPageResponseDto),
        (status = 404, description = "Missing search term or search failed", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn search_questions(
    State(service): State<Arc<QuestionService>>,
    AppQuery(query): AppQuery<PageQuery>,
    payload: std::result::Result<AppJson<SearchQuestionsDto>, AppJsonRejection>,
) -> Result<Json<QuestionPageResponseDto>> {
    let result = match payload {
        Ok(AppJson(dto)) => {
            service
                .search(dto.search_term.as_deref(), query.page())
                .await
        }
        Err(rejection) => Err(AppError::from(rejection)),
    };

    result.map(Json).map_err(|e| {
        tracing::warn!("Question search failed: {}", e);
        e.into_not_found()
    })
}

/// List questions of one category, ten per page
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    params(
        ("id" = i32, Path, description = "Category id"),
        PageQuery
    ),
    responses(
        (status = 200, description = "One page of the category's questions", body = QuestionPageResponseDto),
        (status = 404, description = "Unknown category or empty page", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn questions_by_category(
    State(service): State<Arc<QuestionService>>,
    AppPath(category_id): AppPath<i32>,
    AppQuery(query): AppQuery<PageQuery>,
) -> Result<Json<QuestionPageResponseDto>> {
    let page = service.list_by_category(category_id, query.page()).await?;
    Ok(Json(page))
}
