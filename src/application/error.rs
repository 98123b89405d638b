//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::application::Value;
use crate::domain::TreeError;

/// Application errors wrap domain errors and add input and settings concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("{0}")]
    Tree(#[from] TreeError),

    #[error("not a valid integer: '{input}'")]
    InvalidInput { input: String },

    #[error("value {0} already exists in the tree, duplicates are not allowed")]
    Duplicate(Value),

    #[error("value {0} does not exist in the tree")]
    NotFound(Value),

    #[error("{command} needs a value")]
    MissingArgument { command: String },

    #[error("unknown command: '{0}' (try 'help')")]
    UnknownCommand(String),

    #[error("config error: {message}")]
    Config { message: String },
}

impl ApplicationError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
