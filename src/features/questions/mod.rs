//! Trivia questions: paginated listing, search, creation and deletion.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/questions?page=N` | Page of all questions with category map |
//! | POST | `/questions` | Create a question |
//! | DELETE | `/questions/{id}` | Delete a question |
//! | POST | `/questions/search` | Case-insensitive text search |
//! | GET | `/categories/{id}/questions` | Page of one category's questions |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::QuestionService;
