//! Annotator configuration.
//!
//! Settings live in `revstamp.toml` at the repository root; an absent file
//! means default behavior. The generator's process-wide configuration is
//! modeled as this explicitly passed value, never as ambient global state.

use std::fs;
use std::path::Path;

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::error::StampError;

/// Config file looked up at the repository root.
pub const CONFIG_FILE: &str = "revstamp.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StampConfig {
    /// UTC offset the commit time is rendered in, e.g. "+08:00".
    /// When unset the display string carries the bare short hash.
    #[serde(default)]
    pub display_timezone: Option<String>,
}

impl StampConfig {
    /// Load settings from `dir`, falling back to defaults when no file exists.
    ///
    /// A file that fails to parse, or a timezone string that is not a valid
    /// UTC offset, is rejected here rather than at render time.
    pub fn load(dir: &Path) -> Result<Self, StampError> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(&path)?;
        let config: Self = toml::from_str(&raw)
            .map_err(|err| StampError::Config(format!("{}: {}", path.display(), err)))?;
        config.display_offset()?;
        Ok(config)
    }

    /// Parse the configured timezone into a fixed UTC offset.
    pub fn display_offset(&self) -> Result<Option<FixedOffset>, StampError> {
        match &self.display_timezone {
            None => Ok(None),
            Some(raw) => raw
                .parse::<FixedOffset>()
                .map(Some)
                .map_err(|_| StampError::InvalidTimezone(raw.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = StampConfig::load(dir.path()).unwrap();
        assert!(config.display_timezone.is_none());
        assert!(config.display_offset().unwrap().is_none());
    }

    #[test]
    fn offset_is_parsed_from_toml() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "display_timezone = \"+08:00\"\n",
        )
        .unwrap();

        let config = StampConfig::load(dir.path()).unwrap();
        let offset = config.display_offset().unwrap();
        assert_eq!(offset, FixedOffset::east_opt(8 * 3600));
    }

    #[test]
    fn bad_offset_fails_at_load() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "display_timezone = \"Asia/Shanghai\"\n",
        )
        .unwrap();

        let err = StampConfig::load(dir.path()).unwrap_err();
        assert!(
            matches!(err, StampError::InvalidTimezone(ref raw) if raw == "Asia/Shanghai"),
            "expected InvalidTimezone, got: {err}"
        );
    }

    #[test]
    fn unparsable_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "display_timezone = [\n").unwrap();

        let err = StampConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, StampError::Config(_)), "got: {err}");
    }
}
