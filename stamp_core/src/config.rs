use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::StampError;
use crate::StampResult;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] =
	["stamp.toml", ".stamp.toml", ".config/stamp.toml"];

/// Configuration loaded from a `stamp.toml` file.
///
/// ```toml
/// vocabulary = "moment"
/// locale = "en-GB"
/// time_zone = "Europe/London"
/// ```
///
/// Every key is optional. Missing keys fall back to the `moment` vocabulary,
/// the locale from the environment, and the system time zone.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StampConfig {
	/// Name of the vocabulary used to interpret patterns.
	#[serde(default)]
	pub vocabulary: Option<String>,
	/// BCP-47 tag (or POSIX locale name) used for names and ordinals.
	#[serde(default)]
	pub locale: Option<String>,
	/// IANA time zone applied when formatting timestamps.
	#[serde(default)]
	pub time_zone: Option<String>,
}

impl StampConfig {
	/// Return the first config file that exists under `root`.
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from `root`, or `None` when no config file exists.
	pub fn load(root: &Path) -> StampResult<Option<StampConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		tracing::debug!(path = %config_path.display(), "loading config");
		let content = std::fs::read_to_string(&config_path)?;

		Self::parse(&content).map(Some)
	}

	pub fn parse(content: &str) -> StampResult<StampConfig> {
		toml::from_str(content).map_err(|e| StampError::ConfigParse(e.to_string()))
	}
}
