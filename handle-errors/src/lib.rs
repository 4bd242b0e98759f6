use serde::Serialize;
use tracing::{Level, event, instrument};
use warp::{
    Rejection, Reply,
    filters::{body::BodyDeserializeError, cors::CorsForbidden},
    http::StatusCode,
    reject::{MethodNotAllowed, Reject},
};

#[derive(Debug)]
pub enum Error {
    ParseError(std::num::ParseIntError),
    QuizNotFound,
    InvalidQuizDocument(serde_json::Error),
    StorageError(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &*self {
            Error::ParseError(err) => {
                write!(f, "Cannot parse parameter: {}", err)
            }
            Error::QuizNotFound => {
                write!(f, "Quiz not found")
            }
            Error::InvalidQuizDocument(err) => {
                write!(f, "Invalid quiz document: {}", err)
            }
            Error::StorageError(err) => {
                write!(f, "Cannot access quiz storage: {}", err)
            }
        }
    }
}

impl Reject for Error {}

#[derive(Serialize)]
struct ErrorMessage {
    error: String,
}

fn json_error(message: &str, status: StatusCode) -> warp::reply::WithStatus<warp::reply::Json> {
    warp::reply::with_status(
        warp::reply::json(&ErrorMessage {
            error: message.to_string(),
        }),
        status,
    )
}

#[instrument]
pub async fn return_error(r: Rejection) -> Result<impl Reply, Rejection> {
    if let Some(crate::Error::QuizNotFound) = r.find() {
        event!(Level::WARN, "Requested quiz was not found");
        Ok(json_error("Quiz not found", StatusCode::NOT_FOUND))
    } else if let Some(crate::Error::InvalidQuizDocument(e)) = r.find() {
        event!(Level::ERROR, "Invalid quiz document: {}", e);
        Ok(json_error(
            "Invalid quiz document",
            StatusCode::UNPROCESSABLE_ENTITY,
        ))
    } else if let Some(crate::Error::StorageError(e)) = r.find() {
        event!(Level::ERROR, "Storage error: {}", e);
        Ok(json_error(
            "Failed to store quiz",
            StatusCode::INTERNAL_SERVER_ERROR,
        ))
    } else if let Some(error) = r.find::<Error>() {
        event!(Level::ERROR, "{}", error);
        Ok(json_error(
            &error.to_string(),
            StatusCode::UNPROCESSABLE_ENTITY,
        ))
    } else if let Some(error) = r.find::<CorsForbidden>() {
        event!(Level::ERROR, "CORS forbidden error: {}", error);
        Ok(json_error(&error.to_string(), StatusCode::FORBIDDEN))
    } else if let Some(error) = r.find::<BodyDeserializeError>() {
        event!(Level::ERROR, "Cannot deserialize request body: {}", error);
        Ok(json_error(
            &error.to_string(),
            StatusCode::UNPROCESSABLE_ENTITY,
        ))
    } else if r.find::<MethodNotAllowed>().is_some() {
        event!(Level::WARN, "Method not allowed on requested route");
        Ok(json_error(
            "Method not allowed",
            StatusCode::METHOD_NOT_ALLOWED,
        ))
    } else {
        event!(Level::WARN, "Requested route was not found");
        Ok(json_error("Route not found", StatusCode::NOT_FOUND))
    }
}
