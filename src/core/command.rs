use thiserror::Error;
use crate::core::library::LibraryError;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("duplicate id: {message}")]
    DuplicateKey {
        message: String,
    },
    #[error("not found: {message}")]
    NotFound {
        message: String,
    },
    #[error("already issued: {message}")]
    AlreadyIssued {
        message: String,
    },
    #[error("not issued: {message}")]
    NotIssued {
        message: String,
    },
    #[error("validation: {message} {reason_code:?}")]
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    #[error("serialization: {message}")]
    Serialization {
        message: String,
    },
    #[error("runtime: {message} {reason_code:?}")]
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

pub trait Command<Request, Response> {
    fn execute(&mut self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::DuplicateId { message } => {
                CommandError::DuplicateKey { message }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::AlreadyIssued { message } => {
                CommandError::AlreadyIssued { message }
            }
            LibraryError::NotIssued { message } => {
                CommandError::NotIssued { message }
            }
            LibraryError::InvalidInput { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::LibraryError;

    #[test]
    fn test_should_map_library_errors() {
        assert!(matches!(CommandError::from(LibraryError::duplicate_id("1")), CommandError::DuplicateKey { .. }));
        assert!(matches!(CommandError::from(LibraryError::not_found("1")), CommandError::NotFound { .. }));
        assert!(matches!(CommandError::from(LibraryError::already_issued("1")), CommandError::AlreadyIssued { .. }));
        assert!(matches!(CommandError::from(LibraryError::not_issued("1")), CommandError::NotIssued { .. }));
        assert!(matches!(CommandError::from(LibraryError::invalid_input("x", None)), CommandError::Validation { .. }));
        assert!(matches!(CommandError::from(LibraryError::serialization("x")), CommandError::Serialization { .. }));
        assert!(matches!(CommandError::from(LibraryError::runtime("x", None)), CommandError::Runtime { .. }));
    }

    #[test]
    fn test_should_keep_message() {
        let err = CommandError::from(LibraryError::not_found("book 3 not found"));
        assert_eq!("not found: book 3 not found", err.to_string());
    }
}
