//! Quiz play.
//!
//! The client tracks which questions it has already shown and sends them back
//! each round; the server stays stateless.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/quizzes` | Next random unseen question |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::QuizService;
