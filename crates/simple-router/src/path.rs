//! URL path helpers.
//!
//! Navigation targets are resolved with the WHATWG URL rules the browser
//! applies to a URL handed to `history.pushState`, so the entry that gets
//! pushed and the route that gets mounted always agree.

use crate::config::TrailingSlash;
use crate::error::RouterError;
use url::Url;

/// Origin used when the history has no real one (native targets, tests).
pub const DEFAULT_ORIGIN: &str = "http://localhost";

/// Resolves `target` against the `base` location under [`DEFAULT_ORIGIN`].
pub fn resolve(base: &str, target: &str) -> Result<String, RouterError> {
	resolve_at(DEFAULT_ORIGIN, base, target)
}

/// Resolves `target` against the `base` location of a page served from
/// `origin`, and returns the result as path, query and fragment.
///
/// # Errors
///
/// Returns [`RouterError::InvalidPath`] if `origin`, `base` or `target` do
/// not parse, and [`RouterError::CrossOrigin`] if `target` points at another
/// origin (`//host/x`, `https://elsewhere/`), which `pushState` refuses.
pub fn resolve_at(origin: &str, base: &str, target: &str) -> Result<String, RouterError> {
	let base_url = Url::parse(origin)
		.and_then(|origin| origin.join(base))
		.map_err(|e| RouterError::InvalidPath(format!("{}: {}", base, e)))?;
	let resolved = base_url
		.join(target)
		.map_err(|e| RouterError::InvalidPath(format!("{}: {}", target, e)))?;

	if resolved.origin() != base_url.origin() {
		return Err(RouterError::CrossOrigin(target.to_string()));
	}

	let mut url = resolved.path().to_string();
	if let Some(query) = resolved.query() {
		url.push('?');
		url.push_str(query);
	}
	if let Some(fragment) = resolved.fragment() {
		url.push('#');
		url.push_str(fragment);
	}
	Ok(url)
}

/// Returns the path part of a URL, without query string or fragment.
pub fn route_key(url: &str) -> &str {
	split_suffix(url).0
}

/// Applies the trailing slash policy to a lookup key.
pub fn lookup_key(path: &str, policy: TrailingSlash) -> &str {
	match policy {
		TrailingSlash::Strict => path,
		TrailingSlash::Ignore => {
			let trimmed = path.trim_end_matches('/');
			if trimmed.is_empty() { "/" } else { trimmed }
		}
	}
}

fn split_suffix(url: &str) -> (&str, &str) {
	match url.find(['?', '#']) {
		Some(index) => url.split_at(index),
		None => (url, ""),
	}
}
