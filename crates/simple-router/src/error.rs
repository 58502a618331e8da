//! Error types for client-side routing.

use thiserror::Error;

/// Error type for router operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
	/// No route is registered for the path and the router runs with
	/// [`UnmatchedPolicy::Fail`](crate::config::UnmatchedPolicy::Fail).
	#[error("Route not found: {0}")]
	NotFound(String),
	/// A route table key does not start with `/`, or a navigation target is
	/// not a valid URL.
	#[error("Invalid route path: {0}")]
	InvalidPath(String),
	/// A navigation target resolves to another origin.
	#[error("Cross-origin navigation rejected: {0}")]
	CrossOrigin(String),
	/// The same path was registered twice.
	#[error("Duplicate route: {0}")]
	DuplicateRoute(String),
	/// A view tried to bind a handler to an element its template lacks.
	#[error("Element not found: {0}")]
	ElementNotFound(String),
	/// A browser API call failed.
	#[error("Platform error: {0}")]
	Platform(String),
	/// [`Router::start`](crate::router::Router::start) was called twice.
	#[error("Router already started")]
	AlreadyStarted,
	/// A navigator outlived the router it points to.
	#[error("Router is no longer alive")]
	Detached,
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for RouterError {
	fn from(value: wasm_bindgen::JsValue) -> Self {
		Self::Platform(
			value
				.as_string()
				.unwrap_or_else(|| format!("{:?}", value)),
		)
	}
}
