use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::questions::{dtos as questions_dtos, handlers as questions_handlers};
use crate::features::quizzes::{dtos as quizzes_dtos, handlers as quizzes_handlers};
use crate::shared::types::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories
        categories_handlers::list_categories,
        // Questions
        questions_handlers::list_questions,
        questions_handlers::create_question,
        questions_handlers::delete_question,
        questions_handlers::search_questions,
        questions_handlers::questions_by_category,
        // Quizzes
        quizzes_handlers::play_quiz,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            // Categories
            categories_dtos::CategoriesResponseDto,
            // Questions
            questions_dtos::QuestionResponseDto,
            questions_dtos::CreateQuestionDto,
            questions_dtos::SearchQuestionsDto,
            questions_dtos::QuestionListResponseDto,
            questions_dtos::QuestionPageResponseDto,
            questions_dtos::CreateQuestionResponseDto,
            questions_dtos::DeleteQuestionResponseDto,
            // Quizzes
            quizzes_dtos::QuizCategoryDto,
            quizzes_dtos::PlayQuizDto,
            quizzes_dtos::QuizQuestionResponseDto,
        )
    ),
    tags(
        (name = "categories", description = "Question categories"),
        (name = "questions", description = "Question listing, search and maintenance"),
        (name = "quizzes", description = "Quiz play"),
    ),
    info(
        title = "Trivia API",
        version = "0.1.0",
        description = "Questions, categories and quizzes for the trivia app",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
