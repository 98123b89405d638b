//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::TreeError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("tree structure is invalid")]
    InvalidStructure,

    #[error("{0}")]
    Usage(String),
}

impl From<TreeError> for CliError {
    fn from(e: TreeError) -> Self {
        CliError::Application(e.into())
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Io { .. } => crate::exitcode::IOERR,
            CliError::InvalidStructure => crate::exitcode::SOFTWARE,
            CliError::Application(e) => match e {
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::UnknownCommand(_) | ApplicationError::MissingArgument { .. } => {
                    crate::exitcode::USAGE
                }
                ApplicationError::Tree(_)
                | ApplicationError::InvalidInput { .. }
                | ApplicationError::Duplicate(_)
                | ApplicationError::NotFound(_) => crate::exitcode::DATAERR,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_each_error_kind_when_mapping_then_exit_code_matches() {
        assert_eq!(
            CliError::from(TreeError::EmptyTree).exit_code(),
            crate::exitcode::DATAERR
        );
        assert_eq!(
            CliError::from(ApplicationError::config("x")).exit_code(),
            crate::exitcode::CONFIG
        );
        assert_eq!(
            CliError::Usage("x".into()).exit_code(),
            crate::exitcode::USAGE
        );
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        assert_eq!(CliError::io("write", io).exit_code(), crate::exitcode::IOERR);
    }

    #[test]
    fn given_domain_error_when_displayed_then_message_passes_through() {
        assert_eq!(
            CliError::from(TreeError::ElementNotFound).to_string(),
            "Element not found in the tree"
        );
    }
}
