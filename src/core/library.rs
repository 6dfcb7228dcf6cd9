use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// BookId is the caller-assigned identifier of a book in the catalog
pub type BookId = i64;

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("{message}")]
    DuplicateId {
        message: String,
    },
    #[error("{message}")]
    NotFound {
        message: String,
    },
    #[error("{message}")]
    AlreadyIssued {
        message: String,
    },
    #[error("{message}")]
    NotIssued {
        message: String,
    },
    #[error("{message} {reason_code:?}")]
    InvalidInput {
        message: String,
        reason_code: Option<String>,
    },
    #[error("{message}")]
    Serialization {
        message: String,
    },
    #[error("{message} {reason_code:?}")]
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn duplicate_id(message: &str) -> LibraryError {
        LibraryError::DuplicateId { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn already_issued(message: &str) -> LibraryError {
        LibraryError::AlreadyIssued { message: message.to_string() }
    }

    pub fn not_issued(message: &str) -> LibraryError {
        LibraryError::NotIssued { message: message.to_string() }
    }

    pub fn invalid_input(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::InvalidInput { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("console io {:?}", err).as_str(), Some(err.kind().to_string()))
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

/// A specialized Result type for catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum BookStatus {
    Available,
    Issued,
}

impl BookStatus {
    pub fn from_issued(issued: bool) -> Self {
        if issued { BookStatus::Issued } else { BookStatus::Available }
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "Available"),
            BookStatus::Issued => write!(f, "Issued"),
        }
    }
}
