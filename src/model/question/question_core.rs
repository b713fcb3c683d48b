use crate::model::common::{ChoiceId, QuestionId};

/// A stored question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub has_image: bool,
    /// Empty iff `has_image` is false.
    pub image_filename: String,
}

/// A stored choice, belonging to exactly one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub id: ChoiceId,
    pub question_id: QuestionId,
    pub text: String,
    pub is_correct: bool,
}

/// A question definition that has not been assigned IDs yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub text: String,
    pub image_filename: Option<String>,
    pub choices: Vec<NewChoice>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChoice {
    pub text: String,
    pub is_correct: bool,
}

impl NewQuestion {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image_filename: None,
            choices: Vec::new(),
        }
    }

    /// Attach an image, served from the image directory under this filename.
    /// An empty filename means no image.
    pub fn with_image(mut self, filename: impl Into<String>) -> Self {
        let filename = filename.into();
        self.image_filename = (!filename.is_empty()).then_some(filename);
        self
    }

    pub fn choice(mut self, text: impl Into<String>, is_correct: bool) -> Self {
        self.choices.push(NewChoice {
            text: text.into(),
            is_correct,
        });
        self
    }
}
