use rocket::{serde::json::Json, Route, State};

use crate::error::{Error, Result};
use crate::model::{
    api::{AnswerSubmission, AnswerVerdict, QuestionDesc},
    common::QuestionId,
    grading::Grader,
    image::ImageUrls,
    question::QuestionStore,
};

pub fn routes() -> Vec<Route> {
    routes![question, submit_answer]
}

/// Any path segment is accepted as an ID; one that isn't a valid ID names no
/// question.
fn parse_question_id(raw: &str) -> Result<QuestionId> {
    raw.parse().map_err(|_| Error::not_found("Question"))
}

#[get("/api/question/<question_id>")]
pub fn question(
    question_id: &str,
    questions: &State<QuestionStore>,
    images: ImageUrls,
) -> Result<Json<QuestionDesc>> {
    let (question, choices) = questions.get_question(parse_question_id(question_id)?)?;
    Ok(Json(QuestionDesc::new(question, &choices, &images)))
}

#[post("/api/question/<question_id>/answer", data = "<submission>")]
pub fn submit_answer(
    question_id: &str,
    submission: Json<AnswerSubmission>,
    grader: Grader<'_>,
) -> Result<Json<AnswerVerdict>> {
    let question_id = parse_question_id(question_id)?;
    let is_correct = grader.grade(question_id, submission.into_inner().selected_choice_ids)?;
    Ok(Json(AnswerVerdict { is_correct }))
}
