//! Revstamp - source-revision annotation for documentation builds.
//!
//! Resolves the head commit of the working tree and writes a `buildsha`
//! display string into the site generator's template globals during the
//! environment-ready build phase. The generator itself is an external
//! collaborator; this crate provides the hook, the context types that form
//! the host contract, and a priority-ordered dispatcher for that contract.

pub mod commit;
pub mod config;
pub mod context;
pub mod error;
pub mod hook;

pub use commit::{CommitRef, SHORT_HASH_LEN};
pub use config::{StampConfig, CONFIG_FILE};
pub use context::{BuildConfig, ContentFile, TemplateGlobals};
pub use error::StampError;
pub use hook::{
    run_env_hooks, EnvHook, RevisionAnnotator, ANNOTATOR_PRIORITY, BUILDSHA_KEY, SOCIAL_KEY,
};
