mod question_core;
mod store;

pub use question_core::{Choice, NewChoice, NewQuestion, Question};
pub use store::QuestionStore;
