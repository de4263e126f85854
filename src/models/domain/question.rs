use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// An entry in a course's question bank.
///
/// The type tag is kept as the raw string stored with the bank entry; use
/// [`Question::is_of_type`] to match it against a [`QuestionType`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: String,
    pub course_id: String,
    pub text: String,
    pub question_type: String,
    pub correct_answer: String,
}

impl Question {
    pub fn is_of_type(&self, question_type: QuestionType) -> bool {
        question_type.matches(&self.question_type)
    }

    pub fn kind(&self) -> Option<QuestionType> {
        self.question_type.parse().ok()
    }

    /// Case-insensitive comparison against the stored correct answer.
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer.to_lowercase() == answer.to_lowercase()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionType {
    #[serde(rename = "MCQ")]
    Mcq,
    TrueFalse,
    ShortAnswer,
}

impl QuestionType {
    /// Order in which sampled strata are concatenated into an attempt.
    pub const ATTEMPT_ORDER: [QuestionType; 3] = [
        QuestionType::Mcq,
        QuestionType::TrueFalse,
        QuestionType::ShortAnswer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Mcq => "MCQ",
            QuestionType::TrueFalse => "TRUE_FALSE",
            QuestionType::ShortAnswer => "SHORT_ANSWER",
        }
    }

    pub fn matches(&self, tag: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(tag)
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ATTEMPT_ORDER
            .into_iter()
            .find(|t| t.matches(s))
            .ok_or_else(|| AppError::ValidationError(format!("Unknown question type '{}'", s)))
    }
}
