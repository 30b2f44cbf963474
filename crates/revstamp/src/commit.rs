//! Head-commit metadata read from the working tree's repository.

use std::path::Path;

use chrono::{DateTime, FixedOffset, Utc};
use git2::{ErrorCode, Repository};
use tracing::debug;

use crate::error::StampError;

/// Display prefix length for commit identifiers.
pub const SHORT_HASH_LEN: usize = 8;

/// Snapshot of the head commit, taken once per build and immutable after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRef {
    /// First [`SHORT_HASH_LEN`] hex characters of the full commit id.
    pub short_hash: String,
    /// Commit time as recorded by the committer.
    pub committed_at: DateTime<Utc>,
}

impl CommitRef {
    /// Read the head commit of the repository rooted at `root`.
    pub fn from_repo(root: &Path) -> Result<Self, StampError> {
        let repo = Repository::open(root).map_err(|err| {
            if err.code() == ErrorCode::NotFound {
                StampError::RepositoryNotFound(root.to_path_buf())
            } else {
                StampError::Git(err)
            }
        })?;

        // An unborn HEAD means the repository exists but has zero commits.
        let head = repo.head().map_err(|err| match err.code() {
            ErrorCode::UnbornBranch | ErrorCode::NotFound => StampError::NoCommits,
            _ => StampError::Git(err),
        })?;
        let commit = head.peel_to_commit().map_err(StampError::Git)?;

        let full = commit.id().to_string();
        let short_hash = full[..SHORT_HASH_LEN].to_string();

        let secs = commit.time().seconds();
        let committed_at =
            DateTime::from_timestamp(secs, 0).ok_or(StampError::InvalidTimestamp(secs))?;

        debug!(
            "resolved head commit {} committed at {}",
            short_hash, committed_at
        );

        Ok(Self {
            short_hash,
            committed_at,
        })
    }

    /// Render the display string written into the template globals.
    ///
    /// Without an offset this is the bare short hash. With one, the commit
    /// time is shifted into that zone and appended after the hash.
    pub fn display(&self, offset: Option<FixedOffset>) -> String {
        match offset {
            None => self.short_hash.clone(),
            Some(offset) => format!(
                "{}, {}",
                self.short_hash,
                self.committed_at
                    .with_timezone(&offset)
                    .format("%Y-%m-%d %H:%M:%S %:z")
            ),
        }
    }
}
