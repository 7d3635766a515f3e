//! CLI-specific error types with exit codes.

use std::fmt;
use fslink::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error writing output.
    Io(std::io::Error),

    /// Configuration error.
    Config(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 2: Not found
    /// - 3: Invalid path
    /// - 4: Operation not supported by the filesystem
    /// - 5: Malformed link target
    /// - 6: I/O error
    /// - 7: Configuration error
    /// - 8: Invalid arguments
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Library(lib_err) => {
                if lib_err.is_not_found() {
                    return 2;
                }
                match lib_err {
                    LibError::InvalidPath { .. } => 3,
                    LibError::Unsupported { .. } => 4,
                    LibError::MalformedLink { .. } => 5,
                    LibError::Configuration(_) | LibError::Validation { .. } => 7,
                    LibError::NotFound { .. } | LibError::Io { .. } => 6,
                }
            }
            CliError::Io(_) => 6,
            CliError::Config(_) => 7,
            CliError::InvalidArguments(_) => 8,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
