use std::collections::BTreeSet;

use log::debug;

use crate::error::{Error, Result};
use crate::model::{
    common::{ChoiceId, QuestionId},
    question::{Choice, NewQuestion, Question},
    seed,
};

/// Holds every question and choice for the lifetime of the server.
///
/// Questions and choices are only ever added during seeding, so once the store
/// has been placed into managed state it is read without any locking.
#[derive(Debug, Default)]
pub struct QuestionStore {
    questions: Vec<Question>,
    choices: Vec<Choice>,
}

impl QuestionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the built-in question set.
    pub fn seeded() -> Result<Self> {
        let mut store = Self::new();
        for question in seed::questions() {
            store.insert(question)?;
        }
        Ok(store)
    }

    /// Insert a question and its choices, assigning IDs in creation order.
    /// Returns the ID of the new question.
    ///
    /// Fails without changing the store if the IDs would not fit in a `u32`.
    pub fn insert(&mut self, new: NewQuestion) -> Result<QuestionId> {
        let question_id = id_for_index(self.questions.len())?;
        let first_choice_id = id_for_index(self.choices.len())?;
        // The last choice gets ID `choices.len() + new.choices.len()`.
        id_for_index(self.choices.len() + new.choices.len())?;

        let (has_image, image_filename) = match new.image_filename {
            Some(filename) if !filename.is_empty() => (true, filename),
            _ => (false, String::new()),
        };
        self.questions.push(Question {
            id: question_id,
            text: new.text,
            has_image,
            image_filename,
        });

        for (offset, choice) in (0..).zip(new.choices) {
            self.choices.push(Choice {
                id: first_choice_id + offset,
                question_id,
                text: choice.text,
                is_correct: choice.is_correct,
            });
        }

        debug!("Inserted question {question_id}");
        Ok(question_id)
    }

    /// Get a question along with its choices in ascending ID order.
    pub fn get_question(&self, id: QuestionId) -> Result<(&Question, Vec<&Choice>)> {
        let question = self
            .questions
            .iter()
            .find(|q| q.id == id)
            .ok_or_else(|| Error::not_found("Question"))?;
        Ok((question, self.choices_for(id).collect()))
    }

    /// Every question, in ID order.
    pub fn list_all(&self) -> &[Question] {
        &self.questions
    }

    /// IDs of the choices marked correct for the given question. Empty if the
    /// question does not exist.
    pub fn correct_choice_ids(&self, id: QuestionId) -> BTreeSet<ChoiceId> {
        self.choices_for(id)
            .filter(|c| c.is_correct)
            .map(|c| c.id)
            .collect()
    }

    fn choices_for(&self, id: QuestionId) -> impl Iterator<Item = &Choice> {
        // Choices are pushed in ID order, so no sort is needed.
        self.choices.iter().filter(move |c| c.question_id == id)
    }
}

/// IDs start at 1, so the record at `index` gets `index + 1`.
fn id_for_index(index: usize) -> Result<u32> {
    index
        .checked_add(1)
        .and_then(|id| u32::try_from(id).ok())
        .ok_or_else(|| Error::Storage(format!("no IDs left for record {index}")))
}
