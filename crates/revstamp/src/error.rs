//! Error types for revstamp.

use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the annotator. All of them are fatal to the build:
/// the host aborts on the first error, there is no retry or partial mode.
#[derive(Error, Debug)]
pub enum StampError {
    #[error("no repository found at {0}: the build must run from a checked-out working tree")]
    RepositoryNotFound(PathBuf),

    #[error("repository has no commits, cannot resolve a head revision")]
    NoCommits,

    #[error("commit timestamp {0} is outside the representable range")]
    InvalidTimestamp(i64),

    #[error("invalid display timezone {0:?}: expected a UTC offset like \"+08:00\"")]
    InvalidTimezone(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("git error: {0}")]
    Git(#[from] git2::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
