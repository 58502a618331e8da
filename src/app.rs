//! Router construction for the application.

use crate::routes::{AppRoute, route_table};
use simple_router::{Container, History, Router, RouterConfig, RouterError};
use std::rc::Rc;
use thiserror::Error;

/// Errors raised while booting the application.
#[derive(Debug, Error)]
pub enum AppError {
	/// The embedded router configuration is not valid JSON for [`RouterConfig`].
	#[error("Invalid router configuration: {0}")]
	Config(#[from] serde_json::Error),
	/// The router failed to start.
	#[error(transparent)]
	Router(#[from] RouterError),
}

/// Parses the embedded router configuration. Absent or blank input yields
/// the defaults.
pub fn parse_config(json: Option<&str>) -> Result<RouterConfig, AppError> {
	match json.map(str::trim) {
		Some(json) if !json.is_empty() => Ok(RouterConfig::from_json(json)?),
		_ => Ok(RouterConfig::default()),
	}
}

/// Builds the application router without rendering anything.
pub fn build_router(
	history: Rc<dyn History>,
	container: Rc<dyn Container>,
	config: RouterConfig,
) -> Router<AppRoute> {
	Router::new(route_table(), history, container, config)
}

/// Builds the router, subscribes it to history and mounts the current page.
pub fn launch(
	history: Rc<dyn History>,
	container: Rc<dyn Container>,
	config_json: Option<&str>,
) -> Result<Router<AppRoute>, AppError> {
	let config = parse_config(config_json)?;
	let router = build_router(history, container, config);
	router.start()?;
	Ok(router)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use simple_router::{TrailingSlash, UnmatchedPolicy};

	#[rstest]
	#[case(None)]
	#[case(Some(""))]
	#[case(Some("  \n\t"))]
	fn test_parse_config_defaults(#[case] json: Option<&str>) {
		assert_eq!(parse_config(json).unwrap(), RouterConfig::default());
	}

	#[rstest]
	fn test_parse_config_values() {
		let config = parse_config(Some(r#"{"unmatched":"fail","trailing_slash":"ignore"}"#)).unwrap();
		assert_eq!(config.unmatched, UnmatchedPolicy::Fail);
		assert_eq!(config.trailing_slash, TrailingSlash::Ignore);
	}

	#[rstest]
	fn test_parse_config_invalid() {
		let err = parse_config(Some("{not json")).unwrap_err();
		assert!(matches!(err, AppError::Config(_)));
		assert!(err.to_string().starts_with("Invalid router configuration"));
	}
}
