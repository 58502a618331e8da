//! Route variants and the route table.
//!
//! Applications describe their pages as a closed enum implementing
//! [`Routable`] and register one path per variant in a [`RouteTable`]:
//!
//! ```ignore
//! #[derive(Debug, Clone, PartialEq)]
//! enum AppRoute { Home, About, NotFound }
//!
//! let table = RouteTable::new()
//!     .route("/home", AppRoute::Home)
//!     .route("/about", AppRoute::About)
//!     .alias("/", "/home");
//! ```

use crate::error::RouterError;
use crate::view::View;
use std::collections::HashMap;
use std::fmt;

/// A closed set of pages.
pub trait Routable: Clone + PartialEq + fmt::Debug + 'static {
	/// The variant mounted when no route claims a path.
	fn not_found() -> Self;

	/// Builds a fresh view for this variant.
	fn create_view(&self) -> Box<dyn View>;
}

/// Mapping from path to route variant, plus single-level path aliases.
#[derive(Clone)]
pub struct RouteTable<R> {
	routes: HashMap<String, R>,
	aliases: HashMap<String, String>,
}

impl<R: fmt::Debug> fmt::Debug for RouteTable<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RouteTable")
			.field("routes", &self.routes)
			.field("aliases", &self.aliases)
			.finish()
	}
}

impl<R: Routable> Default for RouteTable<R> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R: Routable> RouteTable<R> {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self {
			routes: HashMap::new(),
			aliases: HashMap::new(),
		}
	}

	/// Registers `route` under `path`.
	///
	/// # Errors
	///
	/// Returns [`RouterError::InvalidPath`] if `path` does not start with `/`
	/// and [`RouterError::DuplicateRoute`] if it is already taken by a route
	/// or an alias.
	pub fn try_route(mut self, path: &str, route: R) -> Result<Self, RouterError> {
		self.check_free(path)?;
		self.routes.insert(path.to_string(), route);
		Ok(self)
	}

	/// Registers `route` under `path`.
	///
	/// # Panics
	///
	/// Panics if the path is malformed or already registered.
	/// Use [`RouteTable::try_route`] for fallible construction.
	pub fn route(self, path: &str, route: R) -> Self {
		self.try_route(path, route)
			.unwrap_or_else(|e| panic!("Invalid route '{}': {}", path, e))
	}

	/// Makes `from` resolve to the route registered under `to`.
	///
	/// # Errors
	///
	/// Returns [`RouterError::InvalidPath`] or [`RouterError::DuplicateRoute`]
	/// for a bad `from`, and [`RouterError::NotFound`] if `to` is not a
	/// registered route.
	pub fn try_alias(mut self, from: &str, to: &str) -> Result<Self, RouterError> {
		self.check_free(from)?;
		if !self.routes.contains_key(to) {
			return Err(RouterError::NotFound(to.to_string()));
		}
		self.aliases.insert(from.to_string(), to.to_string());
		Ok(self)
	}

	/// Makes `from` resolve to the route registered under `to`.
	///
	/// # Panics
	///
	/// Panics under the same conditions [`RouteTable::try_alias`] errors.
	pub fn alias(self, from: &str, to: &str) -> Self {
		self.try_alias(from, to)
			.unwrap_or_else(|e| panic!("Invalid alias '{}' -> '{}': {}", from, to, e))
	}

	/// Returns the path an alias points at, or `path` itself.
	pub fn canonical<'a>(&'a self, path: &'a str) -> &'a str {
		self.aliases.get(path).map(String::as_str).unwrap_or(path)
	}

	/// Looks up the route for an exact path key, following aliases.
	pub fn recognize(&self, path: &str) -> Option<&R> {
		self.routes.get(self.canonical(path))
	}

	/// Returns the registered route paths, sorted.
	pub fn paths(&self) -> Vec<&str> {
		let mut paths: Vec<&str> = self.routes.keys().map(String::as_str).collect();
		paths.sort_unstable();
		paths
	}

	/// Returns the number of registered routes, aliases excluded.
	pub fn len(&self) -> usize {
		self.routes.len()
	}

	/// Returns whether no route is registered.
	pub fn is_empty(&self) -> bool {
		self.routes.is_empty()
	}

	fn check_free(&self, path: &str) -> Result<(), RouterError> {
		if !path.starts_with('/') {
			return Err(RouterError::InvalidPath(path.to_string()));
		}
		if self.routes.contains_key(path) || self.aliases.contains_key(path) {
			return Err(RouterError::DuplicateRoute(path.to_string()));
		}
		Ok(())
	}
}
