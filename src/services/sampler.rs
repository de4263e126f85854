use rand::seq::SliceRandom;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Question, QuestionType},
};

/// Draws `count` distinct questions of `question_type` from `pool`, uniformly
/// at random and without replacement.
///
/// Each call filters into its own buffer and shuffles it with the calling
/// thread's RNG, so concurrent callers never share sampling state. Results are
/// not reproducible between calls.
pub fn sample(
    pool: &[Question],
    question_type: QuestionType,
    count: u32,
) -> AppResult<Vec<Question>> {
    let mut candidates: Vec<&Question> = pool
        .iter()
        .filter(|q| q.is_of_type(question_type))
        .collect();

    let wanted = count as usize;
    if candidates.len() < wanted {
        return Err(AppError::InsufficientQuestions {
            question_type,
            required: count,
            available: candidates.len(),
        });
    }

    candidates.shuffle(&mut rand::thread_rng());
    log::debug!(
        "Sampled {} of {} {} questions",
        wanted,
        candidates.len(),
        question_type
    );

    Ok(candidates.into_iter().take(wanted).cloned().collect())
}
