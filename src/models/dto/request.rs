use std::collections::HashMap;

use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuizRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(range(max = 500))]
    pub num_mcq: u32,

    #[validate(range(max = 500))]
    pub num_true_false: u32,

    #[validate(range(max = 500))]
    pub num_short_answer: u32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAttemptRequest {
    #[validate(length(min = 1, message = "student_id cannot be empty"))]
    pub student_id: String,
}

/// Submitted answers keyed by question id.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitAnswersRequest {
    #[serde(default)]
    pub answers: HashMap<String, String>,
}
