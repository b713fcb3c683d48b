mod answer_core;
mod recorder;

pub use answer_core::AnswerRecord;
pub use recorder::AnswerRecorder;
