use rand::seq::IndexedRandom;

use crate::core::error::Result;
use crate::features::questions::dtos::QuestionResponseDto;
use crate::features::questions::models::Question;
use crate::features::quizzes::dtos::QuizRound;
use crate::modules::store::SharedStore;

/// Service serving quiz rounds
pub struct QuizService {
    store: SharedStore,
}

/// Uniform pick; `None` when nothing is left
fn pick_random(candidates: &[Question]) -> Option<Question> {
    candidates.choose(&mut rand::rng()).cloned()
}

impl QuizService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// A random question of the round's category not served before, if any remain
    pub async fn next_question(&self, round: QuizRound) -> Result<Option<QuestionResponseDto>> {
        let candidates = self
            .store
            .quiz_candidates(round.category, &round.previous_questions)
            .await?;

        tracing::debug!(
            "Quiz round {:?}: {} candidates after excluding {} previous questions",
            round.category,
            candidates.len(),
            round.previous_questions.len()
        );

        Ok(pick_random(&candidates).map(QuestionResponseDto::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::sample_questions;

    #[test]
    fn test_pick_random_from_empty_is_none() {
        assert_eq!(pick_random(&[]), None);
    }

    #[test]
    fn test_pick_random_returns_a_candidate() {
        let candidates = sample_questions();
        for _ in 0..50 {
            let picked = pick_random(&candidates).unwrap();
            assert!(candidates.contains(&picked));
        }
    }

    #[test]
    fn test_pick_random_reaches_every_candidate() {
        let candidates: Vec<Question> = sample_questions().into_iter().take(3).collect();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(pick_random(&candidates).unwrap().id);
        }
        assert_eq!(seen.len(), 3);
    }
}
