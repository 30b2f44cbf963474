//! Environment-hook dispatch and the revision annotator.
//!
//! Hooks run once the build environment is assembled, ordered by
//! descending priority. The annotator registers well below the default
//! priority so its globals land after every other hook has written its
//! own and cannot be clobbered before rendering.

use std::path::PathBuf;

use chrono::FixedOffset;
use serde_json::Value;
use tracing::{debug, info};

use crate::commit::CommitRef;
use crate::config::StampConfig;
use crate::context::{BuildConfig, ContentFile, TemplateGlobals};
use crate::error::StampError;

/// Template-global key carrying the revision display string.
pub const BUILDSHA_KEY: &str = "buildsha";

/// Extra-config key for the social display feature.
pub const SOCIAL_KEY: &str = "social";

/// Dispatch priority for [`RevisionAnnotator`].
pub const ANNOTATOR_PRIORITY: i32 = -100;

/// A callback bound to the environment-ready phase of a site build.
pub trait EnvHook {
    /// Name used in dispatch logs.
    fn name(&self) -> &str;

    /// Dispatch priority. Higher runs earlier; ties keep registration order.
    fn priority(&self) -> i32 {
        0
    }

    /// Mutate the template globals and site config for this build.
    fn on_env(
        &self,
        env: &mut TemplateGlobals,
        config: &mut BuildConfig,
        files: &[ContentFile],
    ) -> Result<(), StampError>;
}

/// Run `hooks` against the build context in priority order.
///
/// The first failing hook aborts dispatch; later hooks do not run and the
/// error propagates to the host, which aborts the build.
pub fn run_env_hooks(
    hooks: &[&dyn EnvHook],
    env: &mut TemplateGlobals,
    config: &mut BuildConfig,
    files: &[ContentFile],
) -> Result<(), StampError> {
    let mut ordered: Vec<&&dyn EnvHook> = hooks.iter().collect();
    ordered.sort_by_key(|hook| std::cmp::Reverse(hook.priority()));

    for hook in ordered {
        debug!(
            "running env hook {} (priority {})",
            hook.name(),
            hook.priority()
        );
        hook.on_env(env, config, files)?;
    }
    Ok(())
}

/// Writes the current source revision into the build's template globals.
pub struct RevisionAnnotator {
    repo_root: PathBuf,
    display_offset: Option<FixedOffset>,
}

impl RevisionAnnotator {
    /// Annotator for the repository at `repo_root`, bare-hash display.
    pub fn new(repo_root: impl Into<PathBuf>) -> Self {
        Self {
            repo_root: repo_root.into(),
            display_offset: None,
        }
    }

    /// Annotator with the display timezone taken from `config`.
    pub fn from_config(
        repo_root: impl Into<PathBuf>,
        config: &StampConfig,
    ) -> Result<Self, StampError> {
        Ok(Self {
            repo_root: repo_root.into(),
            display_offset: config.display_offset()?,
        })
    }

    /// Render the commit time in this offset after the hash.
    pub fn with_display_offset(mut self, offset: FixedOffset) -> Self {
        self.display_offset = Some(offset);
        self
    }

    /// Resolve the head commit and render its display string.
    pub fn stamp(&self) -> Result<String, StampError> {
        let head = CommitRef::from_repo(&self.repo_root)?;
        Ok(head.display(self.display_offset))
    }
}

impl EnvHook for RevisionAnnotator {
    fn name(&self) -> &str {
        "revision-annotator"
    }

    fn priority(&self) -> i32 {
        ANNOTATOR_PRIORITY
    }

    fn on_env(
        &self,
        env: &mut TemplateGlobals,
        config: &mut BuildConfig,
        _files: &[ContentFile],
    ) -> Result<(), StampError> {
        // Resolve the commit before touching the context, so a failed build
        // leaves both host objects exactly as they were.
        let buildsha = self.stamp()?;
        info!("annotating build as {}", buildsha);

        env.set(BUILDSHA_KEY, buildsha);
        // Static feature toggle, not derived from repository state.
        config.extra.insert(SOCIAL_KEY.to_string(), Value::Bool(true));
        Ok(())
    }
}
