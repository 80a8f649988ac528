/// Fixed page size for every paginated question listing
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Page served when the client does not send a usable `page` parameter
pub const DEFAULT_PAGE: i64 = 1;

/// `quiz_category.type` value the trivia client sends for "all categories"
pub const ALL_CATEGORIES_TYPE: &str = "click";

pub const NOT_FOUND_MESSAGE: &str = "Resource not found";
pub const UNPROCESSABLE_MESSAGE: &str = "Unprocessable request";
