use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmitAnswersResponse {
    pub attempt_id: String,
    pub score: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AverageScoreResponse {
    pub average_score: f64,
}

impl From<f64> for AverageScoreResponse {
    fn from(average_score: f64) -> Self {
        AverageScoreResponse { average_score }
    }
}
