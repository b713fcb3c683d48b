use log::{error, info, LevelFilter};
use quiz_backend::model::question::QuestionStore;
use rocket::Error as RocketError;
use thiserror::Error;

/// Errors that are critical to the entire server.
#[derive(Debug, Error)]
enum Error {
    #[error(transparent)]
    Rocket(#[from] RocketError),
}

async fn run() -> Result<(), Error> {
    info!("Configuring server...");
    let rocket = quiz_backend::build().ignite().await?;
    let questions = rocket
        .state::<QuestionStore>()
        .map_or(0, |store| store.list_all().len());
    info!("...server configured with {questions} questions!");

    let config = rocket.config();
    let protocol = if config.tls_enabled() { "https" } else { "http" };
    info!(
        "Server launched on {protocol}://{}:{}",
        config.address, config.port
    );

    // Rocket's own logging is only useful up to launch.
    log4rs_dynamic_filters::DynamicLevelFilter::set("rocket", LevelFilter::Off);
    let _ = rocket.launch().await?;
    Ok(())
}

#[rocket::main]
async fn main() {
    log4rs::init_file("log4rs.yaml", log4rs_dynamic_filters::default_deserializers())
        .expect("Failed to initialise logging");
    info!("Initialised logging");

    if let Err(err) = run().await {
        error!("{err}");
        error!("Critical failure, shutting down");
        std::process::exit(1)
    }
}
