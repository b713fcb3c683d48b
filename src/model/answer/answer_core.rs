use crate::model::common::{AnswerId, ChoiceId, QuestionId};

/// One graded submission. Never modified once recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub id: AnswerId,
    pub question_id: QuestionId,
    /// Exactly as submitted: order and duplicates are kept.
    pub selected_choice_ids: Vec<ChoiceId>,
    /// Correctness at the time of submission.
    pub is_correct: bool,
}
