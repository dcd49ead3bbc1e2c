use std::fmt;

/// Errors surfaced by CLI commands. Details are reported through `ui` before
/// the error is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliError {
    FileError,
    InputError,
    ListingError,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileError => write!(f, "Failed to read catalog file"),
            CliError::InputError => write!(f, "Invalid catalog input"),
            CliError::ListingError => write!(f, "Listing request failed"),
        }
    }
}

impl std::error::Error for CliError {}
