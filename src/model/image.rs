use std::convert::Infallible;

use rocket::request::{self, FromRequest, Request};

use crate::config::Config;

/// URL prefix under which the image directory is served.
pub const IMAGES_ROUTE: &str = "/images";

/// Turns image filenames into publicly reachable URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrls {
    base: String,
}

impl ImageUrls {
    /// `base` is the scheme and authority the server is reachable at, e.g.
    /// `https://quiz.example.com`.
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn resolve(&self, filename: &str) -> String {
        format!("{}{IMAGES_ROUTE}/{filename}", self.base)
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for ImageUrls {
    type Error = Infallible;

    /// Use the configured public URL if there is one, otherwise whatever host
    /// the client used to reach us.
    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let rocket = req.rocket();
        if let Some(public_url) = rocket.state::<Config>().and_then(Config::public_url) {
            return request::Outcome::Success(ImageUrls::new(public_url));
        }

        let protocol = if rocket.config().tls_enabled() {
            "https"
        } else {
            "http"
        };
        let host = match req.headers().get_one("Host") {
            Some(host) => host.to_string(),
            None => format!("{}:{}", rocket.config().address, rocket.config().port),
        };
        request::Outcome::Success(ImageUrls::new(format!("{protocol}://{host}")))
    }
}
