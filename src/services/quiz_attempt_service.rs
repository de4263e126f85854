use std::{collections::HashMap, sync::Arc};

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Question, QuestionType, Quiz, QuizAttempt},
    repositories::{QuestionRepository, QuizAttemptRepository, QuizRepository, StudentRepository},
    services::{grader, sampler},
};

pub struct QuizAttemptService {
    quiz_repository: Arc<dyn QuizRepository>,
    student_repository: Arc<dyn StudentRepository>,
    question_repository: Arc<dyn QuestionRepository>,
    attempt_repository: Arc<dyn QuizAttemptRepository>,
}

impl QuizAttemptService {
    pub fn new(
        quiz_repository: Arc<dyn QuizRepository>,
        student_repository: Arc<dyn StudentRepository>,
        question_repository: Arc<dyn QuestionRepository>,
        attempt_repository: Arc<dyn QuizAttemptRepository>,
    ) -> Self {
        Self {
            quiz_repository,
            student_repository,
            question_repository,
            attempt_repository,
        }
    }

    /// Generate and persist a new attempt of `quiz_id` for `student_id`.
    ///
    /// Questions are sampled per type from the course's question bank and
    /// concatenated MCQ, TRUE_FALSE, SHORT_ANSWER. Nothing is persisted when
    /// any type is short.
    pub async fn create_attempt(&self, quiz_id: &str, student_id: &str) -> AppResult<QuizAttempt> {
        let quiz = self
            .quiz_repository
            .find_by_id(quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz '{}' not found", quiz_id)))?;

        let student = self
            .student_repository
            .find_by_id(student_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Student '{}' not found", student_id)))?;

        let pool = self
            .question_repository
            .find_by_course(&quiz.course_id)
            .await?;

        let questions = select_questions(&quiz, &pool).inspect_err(|e| {
            log::warn!("Cannot generate attempt of quiz '{}': {}", quiz.id, e);
        })?;

        let attempt = QuizAttempt::new(&quiz, &student.id, questions);
        let attempt = self.attempt_repository.create(attempt).await?;

        log::info!(
            "Created attempt '{}' of quiz '{}' for student '{}' with {} questions",
            attempt.id,
            quiz.id,
            student.id,
            attempt.questions.len()
        );

        Ok(attempt)
    }

    /// Grade `answers` against the attempt and persist answers and score.
    ///
    /// Any previously submitted answers are replaced. Fails without writing
    /// anything if an answer names a question outside the attempt.
    pub async fn submit_answers(
        &self,
        attempt_id: &str,
        answers: HashMap<String, String>,
    ) -> AppResult<u32> {
        let mut attempt = self.get_attempt(attempt_id).await?;

        let score = grader::grade(&attempt.questions, &answers).inspect_err(|e| {
            log::warn!("Rejected submission for attempt '{}': {}", attempt_id, e);
        })?;

        attempt.record_submission(answers, score);
        self.attempt_repository.update(attempt).await?;

        log::info!("Graded attempt '{}': score {}", attempt_id, score);
        Ok(score)
    }

    pub async fn get_attempt(&self, attempt_id: &str) -> AppResult<QuizAttempt> {
        self.attempt_repository
            .find_by_id(attempt_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz attempt '{}' not found", attempt_id)))
    }
}

/// Sample every stratum the quiz requires, in attempt order.
fn select_questions(quiz: &Quiz, pool: &[Question]) -> AppResult<Vec<Question>> {
    let mut selected = Vec::new();

    for question_type in QuestionType::ATTEMPT_ORDER {
        let count = quiz.required_count(question_type);
        if count == 0 {
            continue;
        }
        selected.extend(sampler::sample(pool, question_type, count)?);
    }

    Ok(selected)
}
