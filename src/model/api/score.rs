use serde::{Deserialize, Serialize};

use crate::model::grading::Score;

/// API-friendly representation of the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDesc {
    pub total_questions: u64,
    pub correct_answers: u64,
    pub incorrect_answers: u64,
}

impl From<Score> for ScoreDesc {
    fn from(score: Score) -> Self {
        Self {
            total_questions: score.total,
            correct_answers: score.correct,
            incorrect_answers: score.incorrect,
        }
    }
}
