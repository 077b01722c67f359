//! Error handling for the pystamp application.
//! Defines custom error types and results used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for pystamp operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// A filesystem operation failed while materializing the output tree.
    /// Carries the offending path; the walk is aborted without cleanup.
    #[error("Filesystem operation failed at '{}': {source}.", path.display())]
    FsError { path: PathBuf, source: io::Error },

    /// Represents errors that occur during template rendering
    #[error("Render error: {0}.")]
    RenderError(#[from] minijinja::Error),

    /// Represents errors raised by git repository initialization
    #[error("Git error: {0}.")]
    GitError(#[from] git2::Error),

    /// Represents errors that occur during configuration resolution
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents validation failures in user input
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// Represents errors raised during interactive prompting
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// The output directory already exists and the user declined to replace it
    #[error("Directory '{output_dir}' already exists. Pass --force to replace it.")]
    OutputDirectoryExistsError { output_dir: String },
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
