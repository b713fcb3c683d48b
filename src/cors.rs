use rocket::{
    fairing::{Fairing, Info, Kind},
    http::{Header, Status},
    Build, Request, Response, Rocket, Route,
};

use crate::config::Config;

/// A fairing that allows cross-origin requests from the configured origin,
/// for every method and header, and answers preflight requests.
#[derive(Debug, Copy, Clone)]
pub struct CorsFairing;

#[rocket::async_trait]
impl Fairing for CorsFairing {
    fn info(&self) -> Info {
        Info {
            name: "CORS",
            kind: Kind::Ignite | Kind::Response,
        }
    }

    async fn on_ignite(&self, rocket: Rocket<Build>) -> rocket::fairing::Result {
        Ok(rocket.mount("/", preflight_routes()))
    }

    async fn on_response<'r>(&self, req: &'r Request<'_>, res: &mut Response<'r>) {
        let origin = req
            .rocket()
            .state::<Config>()
            .map(Config::cors_origin)
            .unwrap_or("*")
            .to_string();
        res.set_header(Header::new("Access-Control-Allow-Origin", origin));
        res.set_header(Header::new("Access-Control-Allow-Methods", "*"));
        res.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

fn preflight_routes() -> Vec<Route> {
    routes![preflight]
}

/// Every path accepts an `OPTIONS` preflight; the headers are added on the way out.
#[options("/<_..>")]
fn preflight() -> Status {
    Status::NoContent
}
