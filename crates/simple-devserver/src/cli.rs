//! Command-line interface.

use crate::settings::{DevServerSettings, SettingsError};
use clap::Parser;
use std::path::PathBuf;

/// Serve a built single-page application with history fallback.
#[derive(Debug, Parser)]
#[command(name = "simple-devserver")]
#[command(about = "Development server for simple-spa", long_about = None)]
#[command(version)]
pub struct Cli {
	/// TOML settings file
	#[arg(short, long, value_name = "FILE")]
	pub config: Option<PathBuf>,

	/// Interface to bind (default: 127.0.0.1)
	#[arg(long)]
	pub host: Option<String>,

	/// Port to bind (default: 8066)
	#[arg(short, long)]
	pub port: Option<u16>,

	/// Directory holding the built bundle (default: dist)
	#[arg(long, value_name = "DIR")]
	pub static_dir: Option<PathBuf>,

	/// Disable the history fallback and serve files only
	#[arg(long)]
	pub no_spa: bool,

	/// Verbosity level (can be repeated)
	#[arg(short, long, action = clap::ArgAction::Count)]
	pub verbosity: u8,
}

impl Cli {
	/// Loads the settings file, if any, and applies the flags on top.
	pub fn settings(&self) -> Result<DevServerSettings, SettingsError> {
		let mut settings = match &self.config {
			Some(path) => DevServerSettings::load(path)?,
			None => DevServerSettings::default(),
		};

		if let Some(host) = &self.host {
			settings.host = host.clone();
		}
		if let Some(port) = self.port {
			settings.port = port;
		}
		if let Some(static_dir) = &self.static_dir {
			settings.static_dir = static_dir.clone();
		}
		if self.no_spa {
			settings.spa_fallback = false;
		}

		Ok(settings)
	}

	/// Default log filter for the requested verbosity. `RUST_LOG` wins when set.
	pub fn log_filter(&self) -> &'static str {
		match self.verbosity {
			0 => "info",
			1 => "debug,hyper=info",
			_ => "trace",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::io::Write;

	#[rstest]
	fn test_no_flags_gives_defaults() {
		let cli = Cli::try_parse_from(["simple-devserver"]).unwrap();
		assert_eq!(cli.settings().unwrap(), DevServerSettings::default());
	}

	#[rstest]
	fn test_flags_override_defaults() {
		let cli = Cli::try_parse_from([
			"simple-devserver",
			"--host",
			"0.0.0.0",
			"--port",
			"9000",
			"--static-dir",
			"static",
			"--no-spa",
		])
		.unwrap();

		let settings = cli.settings().unwrap();

		assert_eq!(settings.address(), "0.0.0.0:9000");
		assert_eq!(settings.static_dir, PathBuf::from("static"));
		assert!(!settings.spa_fallback);
	}

	#[rstest]
	fn test_flags_override_settings_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "port = 7000\nstatic_dir = \"public\"").unwrap();
		let path = file.path().to_str().unwrap().to_string();

		let cli = Cli::try_parse_from(["simple-devserver", "--config", &path, "--port", "7001"]).unwrap();
		let settings = cli.settings().unwrap();

		assert_eq!(settings.port, 7001);
		assert_eq!(settings.static_dir, PathBuf::from("public"));
	}

	#[rstest]
	#[case(None, "info")]
	#[case(Some("-v"), "debug,hyper=info")]
	#[case(Some("-vv"), "trace")]
	#[case(Some("-vvv"), "trace")]
	fn test_log_filter(#[case] flag: Option<&str>, #[case] expected: &str) {
		let args = std::iter::once("simple-devserver").chain(flag);
		let cli = Cli::try_parse_from(args).unwrap();
		assert_eq!(cli.log_filter(), expected);
	}

	#[rstest]
	fn test_invalid_port_rejected() {
		assert!(Cli::try_parse_from(["simple-devserver", "--port", "99999"]).is_err());
	}
}
