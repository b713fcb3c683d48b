use serde::{Deserialize, Serialize};

use crate::model::{
    common::ChoiceId,
    image::ImageUrls,
    question::{Choice, Question},
};

/// API-friendly representation of a question. Does not reveal which choices
/// are correct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDesc {
    pub question: String,
    pub choices: Vec<ChoiceDesc>,
    pub is_image: bool,
    /// Absolute URL of the image, or empty if there is none.
    pub image_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceDesc {
    pub choice_id: ChoiceId,
    pub choice_text: String,
}

impl QuestionDesc {
    pub fn new(question: &Question, choices: &[&Choice], images: &ImageUrls) -> Self {
        let image_path = if question.has_image {
            images.resolve(&question.image_filename)
        } else {
            String::new()
        };
        Self {
            question: question.text.clone(),
            choices: choices.iter().map(|&c| c.into()).collect(),
            is_image: question.has_image,
            image_path,
        }
    }
}

impl From<&Choice> for ChoiceDesc {
    fn from(choice: &Choice) -> Self {
        Self {
            choice_id: choice.id,
            choice_text: choice.text.clone(),
        }
    }
}
