use sqlx::FromRow;

/// Database model for question
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    /// Logical reference to `categories.id`
    pub category: i32,
    pub difficulty: i32,
}

/// Validated input for a question insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}
