//! Helper functionality to ease the handling and displaying of errors.
//!
//! Mostly wraps the existing std::io::Error values, which fit in nearly all situations, and
//! attaches the path the failure occurred on so the message names the offending file.

use std::path::PathBuf;
use std::{error, fmt, io};

/// Provide an enum for all possible errors that might arise in this program.
#[derive(Debug)]
pub enum TreeError {
    /// The contents of a directory could not be listed.
    ReadDir(PathBuf, io::Error),
    /// The file type or size of a single entry could not be examined.
    Metadata(PathBuf, io::Error),
}

impl fmt::Display for TreeError {
    /// Shows a human-readable description of the `TreeError`.
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::ReadDir(path, err) => {
                write!(fmt, "cannot read directory `{}`: {}", path.display(), err)
            }
            TreeError::Metadata(path, err) => {
                write!(fmt, "cannot examine `{}`: {}", path.display(), err)
            }
        }
    }
}

impl error::Error for TreeError {
    /// Expose the underlying io::Error.
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            TreeError::ReadDir(_, err) | TreeError::Metadata(_, err) => Some(err),
        }
    }
}
