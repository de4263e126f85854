use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::{question::Question, quiz::Quiz};

/// One student's instance of a quiz.
///
/// `questions` is the sampled selection, fixed when the attempt is created.
/// `answers` and `score` are filled in when answers are submitted.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizAttempt {
    pub id: String,
    pub quiz_id: String,
    pub course_id: String,
    pub student_id: String,
    pub questions: Vec<Question>,
    #[serde(default)]
    pub answers: HashMap<String, String>,
    #[serde(default)]
    pub score: u32,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
}

impl QuizAttempt {
    pub fn new(quiz: &Quiz, student_id: &str, questions: Vec<Question>) -> Self {
        QuizAttempt {
            id: Uuid::new_v4().to_string(),
            quiz_id: quiz.id.clone(),
            course_id: quiz.course_id.clone(),
            student_id: student_id.to_string(),
            questions,
            answers: HashMap::new(),
            score: 0,
            created_at: Utc::now(),
            submitted_at: None,
        }
    }

    pub fn question_ids(&self) -> Vec<&str> {
        self.questions.iter().map(|q| q.id.as_str()).collect()
    }

    /// Records a graded submission, replacing any earlier one.
    pub fn record_submission(&mut self, answers: HashMap<String, String>, score: u32) {
        self.answers = answers;
        self.score = score;
        self.submitted_at = Some(Utc::now());
    }
}
