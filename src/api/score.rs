use rocket::{serde::json::Json, Route};

use crate::error::Result;
use crate::model::{
    api::{Message, ScoreDesc},
    grading::Grader,
};

pub fn routes() -> Vec<Route> {
    routes![score, retest]
}

#[get("/api/score")]
pub fn score(grader: Grader<'_>) -> Result<Json<ScoreDesc>> {
    Ok(Json(grader.score()?.into()))
}

#[post("/api/retest")]
pub fn retest(grader: Grader<'_>) -> Result<Json<Message>> {
    grader.reset()?;
    Ok(Json(Message::new(
        "Previous scores cleared. You can now take the test again.",
    )))
}
