/// Questions are numbered from 1 in creation order.
pub type QuestionId = u32;

/// Choices are numbered from 1 in creation order, across all questions.
pub type ChoiceId = u32;

/// Answer records are numbered from 1 in submission order. Numbering carries
/// on across resets.
pub type AnswerId = u32;
