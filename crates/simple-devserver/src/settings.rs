//! Server settings.
//!
//! Settings come from an optional TOML file and are then overridden by
//! command-line flags:
//!
//! ```toml
//! host = "0.0.0.0"
//! port = 8066
//! static_dir = "static"
//! index = "index.html"
//! spa_fallback = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default development port.
pub const DEFAULT_PORT: u16 = 8066;

/// Errors raised while loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
	/// The settings file could not be read.
	#[error("Failed to read settings file {}: {source}", path.display())]
	Read {
		/// Path of the settings file.
		path: PathBuf,
		/// Underlying I/O error.
		#[source]
		source: std::io::Error,
	},
	/// The settings file is not valid TOML for [`DevServerSettings`].
	#[error("Failed to parse settings file {}: {source}", path.display())]
	Parse {
		/// Path of the settings file.
		path: PathBuf,
		/// Underlying TOML error.
		#[source]
		source: toml::de::Error,
	},
}

/// Development server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DevServerSettings {
	/// Interface to bind.
	pub host: String,
	/// Port to bind.
	pub port: u16,
	/// Directory holding the built bundle.
	pub static_dir: PathBuf,
	/// Entry document, relative to `static_dir`.
	pub index: String,
	/// Whether page requests for unknown paths receive the entry document.
	pub spa_fallback: bool,
}

impl Default for DevServerSettings {
	fn default() -> Self {
		Self {
			host: "127.0.0.1".to_string(),
			port: DEFAULT_PORT,
			static_dir: PathBuf::from("dist"),
			index: "index.html".to_string(),
			spa_fallback: true,
		}
	}
}

impl DevServerSettings {
	/// Parses settings from TOML. Missing keys keep their defaults.
	pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
		toml::from_str(source)
	}

	/// Loads settings from a TOML file.
	pub fn load(path: &Path) -> Result<Self, SettingsError> {
		let source = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_toml_str(&source).map_err(|source| SettingsError::Parse {
			path: path.to_path_buf(),
			source,
		})
	}

	/// Returns `host:port`.
	pub fn address(&self) -> String {
		format!("{}:{}", self.host, self.port)
	}

	/// Returns the request path of the entry document.
	pub fn index_route(&self) -> String {
		format!("/{}", self.index.trim_start_matches('/'))
	}
}
