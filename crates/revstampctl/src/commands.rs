//! CLI command implementations.

use std::path::Path;

use anyhow::Result;
use revstamp::{
    run_env_hooks, BuildConfig, CommitRef, EnvHook, RevisionAnnotator, StampConfig,
    TemplateGlobals,
};
use serde_json::json;
use tracing::debug;

/// Print the buildsha display string for the head commit.
pub fn stamp(repo: &Path, timezone: Option<&str>) -> Result<()> {
    debug!("stamping repository at {}", repo.display());
    let mut config = StampConfig::load(repo)?;
    if let Some(tz) = timezone {
        config.display_timezone = Some(tz.to_string());
    }

    let annotator = RevisionAnnotator::from_config(repo, &config)?;
    println!("{}", annotator.stamp()?);
    Ok(())
}

/// Run the environment-hook path and print the mutated context as JSON.
pub fn annotate(repo: &Path) -> Result<()> {
    println!("{}", annotation_json(repo)?);
    Ok(())
}

/// The mutated globals and extra table, exactly as a host build would see
/// them after hook dispatch.
pub fn annotation_json(repo: &Path) -> Result<String> {
    let settings = StampConfig::load(repo)?;
    let annotator = RevisionAnnotator::from_config(repo, &settings)?;

    let site_name = repo
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut env = TemplateGlobals::new();
    let mut config = BuildConfig::new(site_name);
    run_env_hooks(&[&annotator as &dyn EnvHook], &mut env, &mut config, &[])?;

    let rendered = serde_json::to_string_pretty(&json!({
        "globals": env,
        "extra": config.extra,
    }))?;
    Ok(rendered)
}

/// Report the head commit, verifying the tree is annotatable.
pub fn check(repo: &Path) -> Result<()> {
    let head = CommitRef::from_repo(repo)?;
    println!(
        "ok: head {} committed {}",
        head.short_hash, head.committed_at
    );
    Ok(())
}
