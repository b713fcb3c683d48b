#[macro_use]
extern crate rocket;

#[cfg(test)]
#[macro_use]
extern crate backend_test;

use rocket::{Build, Rocket};

use crate::{
    config::{ConfigFairing, ImagesFairing, StoreFairing},
    cors::CorsFairing,
    logging::LoggerFairing,
};

pub mod api;
pub mod config;
pub mod cors;
pub mod error;
pub mod logging;
pub mod model;

/// Assemble the server: configuration, a freshly seeded quiz store, static
/// images, CORS handling, request logging, and the API routes.
pub fn build() -> Rocket<Build> {
    rocket::build()
        .attach(LoggerFairing)
        .attach(ConfigFairing)
        .attach(StoreFairing)
        .attach(ImagesFairing)
        .attach(CorsFairing)
        .mount("/", api::routes())
        .register("/", api::catchers())
}
