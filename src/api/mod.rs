use rocket::{
    http::Status,
    serde::json::{json, Json, Value},
    Catcher, Request, Route,
};

pub mod question;
pub mod score;

pub fn routes() -> Vec<Route> {
    let mut routes = Vec::new();
    routes.extend(question::routes());
    routes.extend(score::routes());
    routes
}

/// JSON replacements for Rocket's default HTML error pages.
pub fn catchers() -> Vec<Catcher> {
    catchers![default_catcher]
}

#[catch(default)]
fn default_catcher(status: Status, _req: &Request) -> Json<Value> {
    let reason = status.reason().unwrap_or("Unknown error");
    if status.class().is_server_error() {
        Json(json!({ "error": reason }))
    } else {
        Json(json!({ "message": reason }))
    }
}
