use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::question::QuestionType;

/// Quiz definition: how many questions of each type an attempt draws from
/// the owning course's question bank.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: String,
    pub course_id: String,
    pub title: String,
    pub num_mcq: u32,
    pub num_true_false: u32,
    pub num_short_answer: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Quiz {
    pub fn new(
        course_id: &str,
        title: &str,
        num_mcq: u32,
        num_true_false: u32,
        num_short_answer: u32,
    ) -> Self {
        Quiz {
            id: Uuid::new_v4().to_string(),
            course_id: course_id.to_string(),
            title: title.to_string(),
            num_mcq,
            num_true_false,
            num_short_answer,
            created_at: Some(Utc::now()),
        }
    }

    pub fn required_count(&self, question_type: QuestionType) -> u32 {
        match question_type {
            QuestionType::Mcq => self.num_mcq,
            QuestionType::TrueFalse => self.num_true_false,
            QuestionType::ShortAnswer => self.num_short_answer,
        }
    }

    /// Saturates at `u32::MAX`; stored counts are not bounded.
    pub fn total_questions(&self) -> u32 {
        self.num_mcq
            .saturating_add(self.num_true_false)
            .saturating_add(self.num_short_answer)
    }
}
