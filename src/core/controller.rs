use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppState {
    pub config: Configuration,
    pub store: RepositoryStore,
}

impl AppState {
    pub fn new(branch: &str, store: RepositoryStore) -> AppState {
        AppState {
            config: Configuration::new(branch),
            store,
        }
    }
}

// Notice selects the marker printed in front of a user-facing error line
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Notice {
    Warning,
    Failure,
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Notice::Warning => write!(f, "⚠️"),
            Notice::Failure => write!(f, "❌"),
        }
    }
}

pub type ConsoleError = (Notice, String);

pub fn render_console_error(err: &ConsoleError) -> String {
    format!("{} {}", err.0, err.1)
}

impl From<CommandError> for ConsoleError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::DuplicateKey { .. } => {
                (Notice::Warning, "Book ID already exists! Try again.".to_string())
            }
            CommandError::NotFound { .. } => {
                (Notice::Failure, "Book not found!".to_string())
            }
            CommandError::AlreadyIssued { .. } => {
                (Notice::Warning, "Book is already issued!".to_string())
            }
            CommandError::NotIssued { .. } => {
                (Notice::Warning, "Book was not issued!".to_string())
            }
            CommandError::Validation { .. } => {
                (Notice::Failure, "Invalid input! Please enter numeric ID.".to_string())
            }
            CommandError::Serialization { .. } => {
                (Notice::Failure, format!("{}", err))
            }
            CommandError::Runtime { .. } => {
                (Notice::Failure, format!("{}", err))
            }
        }
    }
}
