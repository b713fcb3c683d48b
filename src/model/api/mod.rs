mod answer;
mod message;
mod question;
mod score;

pub use answer::{AnswerSubmission, AnswerVerdict};
pub use message::Message;
pub use question::{ChoiceDesc, QuestionDesc};
pub use score::ScoreDesc;
