use std::collections::HashMap;

use crate::{
    errors::{AppError, AppResult},
    models::domain::Question,
};

/// Scores `answers` against the questions selected for an attempt.
///
/// One point per answer that matches the correct answer ignoring case.
/// Questions without an answer earn nothing. The first answer that refers to
/// a question outside `questions` aborts grading with
/// [`AppError::InvalidQuestionReference`].
pub fn grade(questions: &[Question], answers: &HashMap<String, String>) -> AppResult<u32> {
    let question_map: HashMap<&str, &Question> =
        questions.iter().map(|q| (q.id.as_str(), q)).collect();

    let mut score = 0;
    for (question_id, answer) in answers {
        let question = question_map
            .get(question_id.as_str())
            .ok_or_else(|| AppError::InvalidQuestionReference(question_id.clone()))?;

        if question.is_correct(answer) {
            score += 1;
        }
    }

    Ok(score)
}
