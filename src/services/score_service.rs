use std::sync::Arc;

use crate::{errors::AppResult, models::domain::QuizAttempt, repositories::QuizAttemptRepository};

/// Score statistics over stored attempts.
pub struct ScoreService {
    attempt_repository: Arc<dyn QuizAttemptRepository>,
}

impl ScoreService {
    pub fn new(attempt_repository: Arc<dyn QuizAttemptRepository>) -> Self {
        Self { attempt_repository }
    }

    /// Mean score over every attempt of the quiz, `0.0` when there are none.
    pub async fn average_score(&self, quiz_id: &str) -> AppResult<f64> {
        let attempts = self.attempt_repository.find_by_quiz(quiz_id).await?;
        Ok(mean_score(&attempts))
    }

    pub async fn attempts_for_student_in_course(
        &self,
        student_id: &str,
        course_id: &str,
    ) -> AppResult<Vec<QuizAttempt>> {
        self.attempt_repository
            .find_by_student_and_course(student_id, course_id)
            .await
    }

    pub async fn average_score_for_student_in_course(
        &self,
        student_id: &str,
        course_id: &str,
    ) -> AppResult<f64> {
        let attempts = self
            .attempts_for_student_in_course(student_id, course_id)
            .await?;
        Ok(mean_score(&attempts))
    }
}

fn mean_score(attempts: &[QuizAttempt]) -> f64 {
    if attempts.is_empty() {
        return 0.0;
    }

    let total: u64 = attempts.iter().map(|a| u64::from(a.score)).sum();
    total as f64 / attempts.len() as f64
}
