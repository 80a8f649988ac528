use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use fake::faker::lorem::en::Sentence;
use fake::Fake;

use crate::core::error::{AppError, Result};
use crate::features::api_router;
use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};
use crate::features::quizzes::models::QuizCategory;
use crate::modules::store::{InMemoryTriviaStore, SharedStore, TriviaStore};

pub fn sample_categories() -> Vec<Category> {
    [
        (1, "Science"),
        (2, "Art"),
        (3, "Geography"),
        (4, "History"),
        (5, "Entertainment"),
        (6, "Sports"),
    ]
    .into_iter()
    .map(|(id, kind)| Category {
        id,
        kind: kind.to_string(),
    })
    .collect()
}

fn question(id: i32, text: &str, answer: &str, category: i32, difficulty: i32) -> Question {
    Question {
        id,
        question: text.to_string(),
        answer: answer.to_string(),
        category,
        difficulty,
    }
}

/// 19 questions with gaps in the id sequence, spread over all six categories
pub fn sample_questions() -> Vec<Question> {
    vec![
        question(2, "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
        question(4, "What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 5, 4),
        question(5, "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
        question(6, "What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", 5, 3),
        question(9, "What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1),
        question(10, "Which is the only team to play in every soccer World Cup tournament?", "Brazil", 6, 3),
        question(11, "Which country won the first ever soccer World Cup in 1930?", "Uruguay", 6, 4),
        question(12, "Who invented Peanut Butter?", "George Washington Carver", 4, 2),
        question(13, "What is the largest lake in Africa?", "Lake Victoria", 3, 2),
        question(14, "In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
        question(15, "The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
        question(16, "Which Dutch graphic artist, initials M C, was a creator of optical illusions?", "Escher", 2, 1),
        question(17, "La Giaconda is better known as what?", "Mona Lisa", 2, 3),
        question(18, "How many paintings did Van Gogh sell in his lifetime?", "One", 2, 4),
        question(19, "Which American artist was a pioneer of Abstract Expressionism, and a leading exponent of action painting?", "Jackson Pollock", 2, 2),
        question(20, "What is the heaviest organ in the human body?", "The Liver", 1, 4),
        question(21, "Who discovered penicillin?", "Alexander Fleming", 1, 3),
        question(22, "Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
        question(23, "Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, 4),
    ]
}

/// `count` questions with generated text, ids `first_id..`, all in `category`
pub fn generated_questions(first_id: i32, count: i32, category: i32) -> Vec<Question> {
    (first_id..first_id + count)
        .map(|id| Question {
            id,
            question: format!("Generated #{id}: {}", Sentence(3..8).fake::<String>()),
            answer: Sentence(1..3).fake(),
            category,
            difficulty: (id % 5) + 1,
        })
        .collect()
}

pub fn seeded_store() -> Arc<InMemoryTriviaStore> {
    Arc::new(InMemoryTriviaStore::new(
        sample_categories(),
        sample_questions(),
    ))
}

pub fn test_server(store: SharedStore) -> TestServer {
    TestServer::new(api_router(store)).expect("failed to start test server")
}

/// Store whose every call fails the way an unreachable database does
pub struct FailingTriviaStore;

fn unavailable<T>() -> Result<T> {
    Err(AppError::Storage(sqlx::Error::PoolTimedOut))
}

#[async_trait]
impl TriviaStore for FailingTriviaStore {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        unavailable()
    }

    async fn find_category(&self, _id: i32) -> Result<Option<Category>> {
        unavailable()
    }

    async fn list_questions(&self) -> Result<Vec<Question>> {
        unavailable()
    }

    async fn find_question(&self, _id: i32) -> Result<Option<Question>> {
        unavailable()
    }

    async fn insert_question(&self, _question: NewQuestion) -> Result<Question> {
        unavailable()
    }

    async fn delete_question(&self, _id: i32) -> Result<bool> {
        unavailable()
    }

    async fn search_questions(&self, _term: &str) -> Result<Vec<Question>> {
        unavailable()
    }

    async fn questions_in_category(&self, _category_id: i32) -> Result<Vec<Question>> {
        unavailable()
    }

    async fn quiz_candidates(
        &self,
        _category: QuizCategory,
        _exclude: &[i32],
    ) -> Result<Vec<Question>> {
        unavailable()
    }
}

pub fn failing_server() -> TestServer {
    test_server(Arc::new(FailingTriviaStore))
}
