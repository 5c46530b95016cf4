use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum TodoClientError {
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    /// The token cannot be used as an HTTP header value. The value itself is never included.
    #[error("Invalid Token Error: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },
}

impl From<url::ParseError> for TodoClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        TodoClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for TodoClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        TodoClientError::Http {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
