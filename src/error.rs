//! Error types for the `zoom-meet` crate.
//!
//! A root Error struct holds an error kind enum and an optional source for
//! error chaining.

use std::error::Error as StdError;
use std::fmt;

/// Top-level error type for zoom-meet.
/// Holds error kind and optional source for error chaining.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: ErrorKind,
}

/// Major categories of errors in zoom-meet.
#[derive(Debug, PartialEq)]
pub enum ErrorKind {
    /// The token endpoint returned something other than 200.
    Authentication,
    /// The meeting endpoint returned something other than 201.
    MeetingCreation,
    /// Required configuration (credentials) was missing or unusable.
    Config,
    /// Transport-level failure before any status code was received.
    Http(HttpErrorKind),
}

/// Errors from HTTP client operations.
#[derive(Debug, PartialEq)]
pub enum HttpErrorKind {
    BuilderFailed,
    RequestFailed,
    Network,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.error_kind {
            ErrorKind::Authentication => write!(f, "Zoom authentication failed"),
            ErrorKind::MeetingCreation => write!(f, "Zoom meeting creation failed"),
            ErrorKind::Config => write!(f, "Configuration error"),
            ErrorKind::Http(kind) => write!(f, "HTTP error: {:?}", kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let error_kind = if err.is_builder() {
            ErrorKind::Http(HttpErrorKind::BuilderFailed)
        } else if err.is_request() {
            ErrorKind::Http(HttpErrorKind::RequestFailed)
        } else {
            ErrorKind::Http(HttpErrorKind::Network)
        };

        Error {
            source: Some(Box::new(err)),
            error_kind,
        }
    }
}

/// Helper function to create authentication errors.
pub fn authentication_error(message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: ErrorKind::Authentication,
    }
}

/// Helper function to create meeting creation errors.
pub fn meeting_creation_error(message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: ErrorKind::MeetingCreation,
    }
}

/// Helper function to create configuration errors.
pub fn config_error(message: &str) -> Error {
    Error {
        source: Some(message.to_string().into()),
        error_kind: ErrorKind::Config,
    }
}
