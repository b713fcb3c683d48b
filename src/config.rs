use std::path::{Path, PathBuf};

use log::{error, info, warn};
use rocket::{
    fairing::{Fairing, Info, Kind},
    fs::FileServer,
    Build, Rocket,
};
use serde::Deserialize;

use crate::model::{answer::AnswerRecorder, image::IMAGES_ROUTE, question::QuestionStore};

/// Application configuration, derived from `Rocket.toml` and `ROCKET_*`
/// environment variables. This struct becomes managed state and can be
/// inspected by any endpoint.
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    public_url: Option<String>,
    #[serde(default = "default_image_dir")]
    image_dir: PathBuf,
    #[serde(default = "default_cors_origin")]
    cors_origin: String,
}

fn default_image_dir() -> PathBuf {
    PathBuf::from("images")
}

fn default_cors_origin() -> String {
    "*".to_string()
}

impl Config {
    /// Base URL used when building image links, if one is configured.
    pub fn public_url(&self) -> Option<&str> {
        self.public_url.as_deref()
    }

    /// Directory whose files are served under `/images`.
    pub fn image_dir(&self) -> &Path {
        &self.image_dir
    }

    /// Value of the `Access-Control-Allow-Origin` header.
    pub fn cors_origin(&self) -> &str {
        &self.cors_origin
    }
}

/// A fairing that loads the application config and puts it in managed state.
pub struct ConfigFairing;

#[rocket::async_trait]
impl Fairing for ConfigFairing {
    fn info(&self) -> Info {
        Info {
            name: "Config",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, mut rocket: Rocket<Build>) -> rocket::fairing::Result {
        // Load the config.
        let config = match rocket.figment().extract::<Config>() {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load application config");
                rocket::config::pretty_print_error(e);
                return Err(rocket);
            }
        };

        // Manage the state.
        rocket = rocket.manage(config);
        Ok(rocket)
    }
}

/// A fairing that seeds the question store and places both it and an empty
/// answer recorder into managed state.
pub struct StoreFairing;

#[rocket::async_trait]
impl Fairing for StoreFairing {
    fn info(&self) -> Info {
        Info {
            name: "Quiz store",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, rocket: Rocket<Build>) -> rocket::fairing::Result {
        let questions = match QuestionStore::seeded() {
            Ok(questions) => questions,
            Err(e) => {
                error!("Failed to seed questions: {e}");
                return Err(rocket);
            }
        };
        info!("Loaded {} questions", questions.list_all().len());
        Ok(rocket.manage(questions).manage(AnswerRecorder::new()))
    }
}

/// A fairing that serves the configured image directory under `/images`.
///
/// Must be attached after [`ConfigFairing`].
pub struct ImagesFairing;

#[rocket::async_trait]
impl Fairing for ImagesFairing {
    fn info(&self) -> Info {
        Info {
            name: "Images",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, rocket: Rocket<Build>) -> rocket::fairing::Result {
        let image_dir = match rocket.state::<Config>() {
            Some(config) => config.image_dir().to_path_buf(),
            None => {
                error!("Image fairing attached before config was loaded");
                return Err(rocket);
            }
        };

        // `FileServer` refuses to start on a missing directory; carry on
        // without images instead.
        if !image_dir.is_dir() {
            warn!(
                "Image directory {} does not exist, images will not be served",
                image_dir.display()
            );
            return Ok(rocket);
        }

        info!("Serving images from {}", image_dir.display());
        Ok(rocket.mount(IMAGES_ROUTE, FileServer::from(image_dir)))
    }
}
