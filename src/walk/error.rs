//! Walk error types.
//!
//! Only environment failures are errors. Missing files and references are
//! recorded in the [`Report`](super::Report) instead.

use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort a walk.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("failed to read `{0}`")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("failed to create directory `{0}`")]
    CreateDir(PathBuf, #[source] std::io::Error),

    #[error("failed to write `{0}`")]
    Write(PathBuf, #[source] std::io::Error),

    #[error("`{0}` is not valid UTF-8")]
    Decode(PathBuf, #[source] std::string::FromUtf8Error),

    #[error("entry `{0}` has no file name")]
    InvalidEntry(PathBuf),
}
