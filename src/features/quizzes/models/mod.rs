mod quiz_category;

pub use quiz_category::QuizCategory;
