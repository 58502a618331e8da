//! Core Router Implementation.
//!
//! A [`Router`] owns the route table, a [`History`] and the [`Container`]
//! views mount into. It is constructed by the application entry point and
//! handed to views as a non-owning [`Navigator`].
//!
//! ```ignore
//! let router = Router::new(route_table(), history, container, RouterConfig::default());
//! router.start()?;
//! router.go("/bar")?;
//! ```

use crate::config::{RouterConfig, UnmatchedPolicy};
use crate::dom::Container;
use crate::error::RouterError;
use crate::history::{History, HistoryEntry, PopListener};
use crate::path::{lookup_key, resolve_at, route_key};
use crate::route::{Routable, RouteTable};
use crate::{debug_log, error_log, info_log, warn_log};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

/// Navigation entry point used by views and the pop listener.
trait Navigate {
	fn go(&self, path: &str) -> Result<(), RouterError>;
}

/// A non-owning handle views use to trigger navigation.
///
/// Holding a navigator does not keep the router alive; once the router is
/// dropped every call returns [`RouterError::Detached`].
#[derive(Clone)]
pub struct Navigator {
	target: Weak<dyn Navigate>,
}

impl fmt::Debug for Navigator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Navigator")
			.field("attached", &(self.target.strong_count() > 0))
			.finish()
	}
}

impl Navigator {
	/// Pushes `path` onto the history and mounts its view.
	pub fn go(&self, path: &str) -> Result<(), RouterError> {
		let target = self.target.upgrade().ok_or(RouterError::Detached)?;
		target.go(path)
	}

	/// Like [`Navigator::go`], for event handlers that have no caller to
	/// return an error to.
	pub fn go_or_log(&self, path: &str) {
		if let Err(err) = self.go(path) {
			error_log!("Navigation to {} failed: {}", path, err);
		}
	}
}

struct RouterInner<R: Routable> {
	table: RouteTable<R>,
	config: RouterConfig,
	history: Rc<dyn History>,
	container: Rc<dyn Container>,
	current_route: RefCell<Option<R>>,
	current_path: RefCell<Option<String>>,
	started: Cell<bool>,
	this: Weak<RouterInner<R>>,
}

impl<R: Routable> RouterInner<R> {
	fn navigator(&self) -> Navigator {
		let target: Weak<dyn Navigate> = self.this.clone();
		Navigator { target }
	}

	fn resolve_route(&self, path: &str) -> Result<R, RouterError> {
		let key = lookup_key(route_key(path), self.config.trailing_slash);
		debug_log!("Resolving {} (lookup key {})", path, key);

		if let Some(route) = self.table.recognize(key) {
			return Ok(route.clone());
		}

		match self.config.unmatched {
			UnmatchedPolicy::Fallback => {
				warn_log!("No route for {}, mounting fallback view", path);
				Ok(R::not_found())
			}
			UnmatchedPolicy::Fail => Err(RouterError::NotFound(path.to_string())),
		}
	}

	// Route and path are recorded before mounting, so they match the
	// container after a failed mount and a redirect from `mount` records last.
	fn load(&self, path: &str) -> Result<R, RouterError> {
		let route = self.resolve_route(path)?;
		let view = route.create_view();

		*self.current_route.borrow_mut() = Some(route.clone());
		*self.current_path.borrow_mut() = Some(path.to_string());
		self.container.reset();

		if let Err(err) = view.mount(&*self.container, &self.navigator()) {
			error_log!("Mounting {:?} for {} failed: {}", route, path, err);
			return Err(err);
		}

		info_log!("Mounted {:?} for {}", route, path);
		Ok(route)
	}

	fn push(&self, path: &str) -> Result<String, RouterError> {
		let base = self.history.current_url()?;
		let url = resolve_at(&self.history.origin()?, &base, path)?;
		self.history.push(HistoryEntry::new(url.clone()))?;
		Ok(url)
	}
}

impl<R: Routable> Navigate for RouterInner<R> {
	fn go(&self, path: &str) -> Result<(), RouterError> {
		let url = self.push(path)?;
		self.load(&url).map(|_| ())
	}
}

/// The client-side router.
///
/// Cloning yields another handle to the same router.
pub struct Router<R: Routable> {
	inner: Rc<RouterInner<R>>,
}

impl<R: Routable> Clone for Router<R> {
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}
}

impl<R: Routable> fmt::Debug for Router<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Router")
			.field("routes", &self.inner.table.paths())
			.field("config", &self.inner.config)
			.field("current_route", &self.inner.current_route.borrow())
			.field("started", &self.inner.started.get())
			.finish()
	}
}

impl<R: Routable> Router<R> {
	/// Creates a router. Nothing is rendered until [`Router::start`] or
	/// [`Router::go`] is called.
	pub fn new(
		table: RouteTable<R>,
		history: Rc<dyn History>,
		container: Rc<dyn Container>,
		config: RouterConfig,
	) -> Self {
		let inner = Rc::new_cyclic(|this| RouterInner {
			table,
			config,
			history,
			container,
			current_route: RefCell::new(None),
			current_path: RefCell::new(None),
			started: Cell::new(false),
			this: this.clone(),
		});
		Self { inner }
	}

	/// Subscribes to back/forward navigation and mounts the view for the
	/// current location.
	///
	/// Pop events re-resolve and remount the location the browser moved to.
	/// Errors raised while handling a pop event are logged.
	pub fn start(&self) -> Result<R, RouterError> {
		if self.inner.started.replace(true) {
			return Err(RouterError::AlreadyStarted);
		}

		let weak = Rc::downgrade(&self.inner);
		let listener: PopListener = Rc::new(move |url: &str| {
			let Some(inner) = weak.upgrade() else {
				return;
			};
			if let Err(err) = inner.load(url) {
				error_log!("Handling popstate for {} failed: {}", url, err);
			}
		});
		self.inner.history.on_pop(listener)?;

		let url = self.inner.history.current_url()?;
		self.inner.load(&url)
	}

	/// Pushes a history entry for `path` (empty state, empty title) and mounts
	/// its view.
	///
	/// Relative paths are resolved against the current location first.
	/// Targets on another origin are rejected with
	/// [`RouterError::CrossOrigin`] before anything is pushed. The entry is
	/// pushed even when the path turns out to be unmapped.
	pub fn go(&self, path: &str) -> Result<R, RouterError> {
		let url = self.inner.push(path)?;
		self.inner.load(&url)
	}

	/// Resolves `path` and mounts its view without touching history.
	///
	/// `/` resolves through the table's aliases like any other path.
	pub fn load(&self, path: &str) -> Result<R, RouterError> {
		self.inner.load(path)
	}

	/// Resolves `path` without mounting anything.
	pub fn resolve(&self, path: &str) -> Result<R, RouterError> {
		self.inner.resolve_route(path)
	}

	/// Returns a handle views use to navigate.
	pub fn navigator(&self) -> Navigator {
		self.inner.navigator()
	}

	/// Returns the route last mounted.
	pub fn current_route(&self) -> Option<R> {
		self.inner.current_route.borrow().clone()
	}

	/// Returns the path the current route was mounted for.
	pub fn current_path(&self) -> Option<String> {
		self.inner.current_path.borrow().clone()
	}

	/// Returns whether [`Router::start`] has run.
	pub fn is_started(&self) -> bool {
		self.inner.started.get()
	}

	/// Returns the route table.
	pub fn table(&self) -> &RouteTable<R> {
		&self.inner.table
	}

	/// Returns the active configuration.
	pub fn config(&self) -> &RouterConfig {
		&self.inner.config
	}
}
