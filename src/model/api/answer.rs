use serde::{Deserialize, Serialize};

use crate::model::common::ChoiceId;

/// The choices a user picked for a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSubmission {
    pub selected_choice_ids: Vec<ChoiceId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerVerdict {
    pub is_correct: bool,
}
