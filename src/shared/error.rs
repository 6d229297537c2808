use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let build scripts distinguish a missing page from a broken
/// data set or a bad invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable data files, invalid catalog, I/O, etc.)
    ApplicationError = 3,
    /// The requested vertical or integration page does not exist
    PageNotFound = 4,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error returned from the application layer.
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<PseoError>() {
            Some(PseoError::PageNotFound { .. }) | Some(PseoError::VerticalNotFound { .. }) => {
                ExitCode::PageNotFound
            }
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
            ExitCode::PageNotFound => write!(f, "Page Not Found (4)"),
        }
    }
}

/// Application-specific errors.
///
/// The selector itself only ever reports "not found"; the remaining variants
/// come from loading data files and writing output.
#[derive(Debug, Error)]
pub enum PseoError {
    #[error("Page not found: /{vertical}/integration/{slug}\n\n💡 Hint: Run `pseo-content list {vertical}` to see every valid integration slug")]
    PageNotFound { vertical: String, slug: String },

    #[error("Vertical not found: {vertical}\n\n💡 Hint: Run `pseo-content verticals` to see the known verticals")]
    VerticalNotFound { vertical: String },

    #[error("Data file not found: {path}\n\n💡 Hint: {suggestion}")]
    DataFileNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse data file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file contains valid JSON in the expected shape")]
    DataParseError { path: PathBuf, details: String },

    #[error("Invalid catalog: {reason}")]
    InvalidCatalog { reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid output directory: {path}\nReason: {reason}\n\n💡 Hint: Create the directory first or pass an existing one with --out-dir")]
    InvalidOutputDir { path: PathBuf, reason: String },

    /// Validation error for value objects and builders
    #[error("Validation error: {message}")]
    Validation { message: String },
}
