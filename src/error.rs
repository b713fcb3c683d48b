use std::sync::PoisonError;

use log::error;
use rocket::{
    http::Status,
    response::{self, status::Custom, Responder},
    serde::json::{json, Json},
    Request,
};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The named resource does not exist, or cannot be used in the requested way.
    #[error("{0} not found")]
    NotFound(String),
    #[error("Storage failure: {0}")]
    Storage(String),
}

impl Error {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn status(&self) -> Status {
        match self {
            Self::NotFound(_) => Status::NotFound,
            Self::Storage(_) => Status::InternalServerError,
        }
    }
}

// A poisoned lock means a writer panicked mid-update, so the data behind it
// can no longer be trusted.
impl<T> From<PoisonError<T>> for Error {
    fn from(_: PoisonError<T>) -> Self {
        Self::Storage("answer log lock poisoned".to_string())
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'o> {
        let status = self.status();
        let body = match self {
            Self::NotFound(_) => json!({ "message": self.to_string() }),
            Self::Storage(_) => {
                error!("{self}");
                json!({ "error": self.to_string() })
            }
        };
        Custom(status, Json(body)).respond_to(req)
    }
}
