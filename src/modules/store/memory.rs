//! In-memory trivia store used by the tests

use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};
use crate::features::quizzes::models::QuizCategory;
use crate::modules::store::TriviaStore;

pub struct InMemoryTriviaStore {
    categories: Mutex<Vec<Category>>,
    questions: Mutex<Vec<Question>>,
    next_question_id: Mutex<i32>,
}

impl InMemoryTriviaStore {
    pub fn new(categories: Vec<Category>, questions: Vec<Question>) -> Self {
        let next_id = questions.iter().map(|q| q.id).max().unwrap_or(0) + 1;
        let mut questions = questions;
        questions.sort_by_key(|q| q.id);

        Self {
            categories: Mutex::new(categories),
            questions: Mutex::new(questions),
            next_question_id: Mutex::new(next_id),
        }
    }

    pub fn question_count(&self) -> usize {
        self.questions.lock().unwrap().len()
    }

    fn filtered(&self, keep: impl Fn(&Question) -> bool) -> Vec<Question> {
        self.questions
            .lock()
            .unwrap()
            .iter()
            .filter(|q| keep(q))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl TriviaStore for InMemoryTriviaStore {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        let mut categories = self.categories.lock().unwrap().clone();
        categories.sort_by(|a, b| a.kind.cmp(&b.kind).then(a.id.cmp(&b.id)));
        Ok(categories)
    }

    async fn find_category(&self, id: i32) -> Result<Option<Category>> {
        let categories = self.categories.lock().unwrap();
        Ok(categories.iter().find(|c| c.id == id).cloned())
    }

    async fn list_questions(&self) -> Result<Vec<Question>> {
        Ok(self.filtered(|_| true))
    }

    async fn find_question(&self, id: i32) -> Result<Option<Question>> {
        Ok(self.filtered(|q| q.id == id).into_iter().next())
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<Question> {
        let mut next_id = self.next_question_id.lock().unwrap();
        let created = Question {
            id: *next_id,
            question: question.question,
            answer: question.answer,
            category: question.category,
            difficulty: question.difficulty,
        };
        *next_id += 1;

        self.questions.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn delete_question(&self, id: i32) -> Result<bool> {
        let mut questions = self.questions.lock().unwrap();
        let before = questions.len();
        questions.retain(|q| q.id != id);
        Ok(questions.len() < before)
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        let needle = term.to_lowercase();
        Ok(self.filtered(|q| q.question.to_lowercase().contains(&needle)))
    }

    async fn questions_in_category(&self, category_id: i32) -> Result<Vec<Question>> {
        Ok(self.filtered(|q| q.category == category_id))
    }

    async fn quiz_candidates(
        &self,
        category: QuizCategory,
        exclude: &[i32],
    ) -> Result<Vec<Question>> {
        let wanted = category.category_id();
        Ok(self.filtered(|q| {
            !exclude.contains(&q.id) && wanted.map_or(true, |id| q.category == id)
        }))
    }
}
