//! Feature layer - one module per API resource

pub mod categories;
pub mod questions;
pub mod quizzes;

use std::sync::Arc;

use axum::Router;

use crate::core::error::AppError;
use crate::modules::store::SharedStore;
use categories::CategoryService;
use questions::QuestionService;
use quizzes::QuizService;

/// Every trivia endpoint over one store, with the JSON 404 fallback
pub fn api_router(store: SharedStore) -> Router {
    let category_service = Arc::new(CategoryService::new(Arc::clone(&store)));
    let question_service = Arc::new(QuestionService::new(Arc::clone(&store)));
    let quiz_service = Arc::new(QuizService::new(store));

    Router::new()
        .merge(categories::routes::routes(category_service))
        .merge(questions::routes::routes(question_service))
        .merge(quizzes::routes::routes(quiz_service))
        .fallback(route_not_found)
}

async fn route_not_found() -> AppError {
    AppError::NotFound("No such route".to_string())
}
