//! Router configuration.
//!
//! ```ignore
//! use simple_router::RouterConfig;
//!
//! let config = RouterConfig::from_json(r#"{ "unmatched": "fail" }"#)?;
//! ```

use serde::{Deserialize, Serialize};

/// What the router does with a path that no route claims.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmatchedPolicy {
	/// Mount the view of the route table's not-found variant.
	#[default]
	Fallback,
	/// Return [`RouterError::NotFound`](crate::RouterError::NotFound) and leave
	/// the document untouched.
	Fail,
}

/// How a trailing slash takes part in route lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailingSlash {
	/// `/bar/` and `/bar` are different keys.
	#[default]
	Strict,
	/// `/bar/` is looked up as `/bar`.
	Ignore,
}

/// Runtime options for a [`Router`](crate::Router).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
	/// Handling of unmapped paths.
	pub unmatched: UnmatchedPolicy,
	/// Trailing slash handling during lookup.
	pub trailing_slash: TrailingSlash,
}

impl RouterConfig {
	/// Parses a configuration from JSON. Missing keys keep their defaults.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}

	/// Sets the unmatched path policy.
	pub fn unmatched(mut self, policy: UnmatchedPolicy) -> Self {
		self.unmatched = policy;
		self
	}

	/// Sets the trailing slash policy.
	pub fn trailing_slash(mut self, policy: TrailingSlash) -> Self {
		self.trailing_slash = policy;
		self
	}
}
