//! Browser history integration.
//!
//! The router talks to session history through the [`History`] trait.
//! [`BrowserHistory`] wraps `window.history` on `wasm32`; [`MemoryHistory`]
//! keeps the entry stack in memory and fires pop listeners on
//! [`back`](MemoryHistory::back) / [`forward`](MemoryHistory::forward), the
//! way the browser fires `popstate`.

use crate::error::RouterError;
use crate::path::DEFAULT_ORIGIN;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Callback run with the new location URL after a pop navigation.
pub type PopListener = Rc<dyn Fn(&str)>;

/// One session history entry.
///
/// The router always pushes an empty state object and an empty title.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
	/// State object associated with the entry.
	pub state: serde_json::Value,
	/// Title passed alongside the state (ignored by browsers).
	pub title: String,
	/// The entry's URL.
	pub url: String,
}

impl HistoryEntry {
	/// Creates an entry with empty state and title.
	pub fn new(url: impl Into<String>) -> Self {
		Self {
			state: serde_json::Value::Object(serde_json::Map::new()),
			title: String::new(),
			url: url.into(),
		}
	}
}

/// Session history as seen by the router.
pub trait History {
	/// Returns the current location, path plus query and fragment.
	fn current_url(&self) -> Result<String, RouterError>;

	/// Returns the origin navigation targets must stay on.
	fn origin(&self) -> Result<String, RouterError> {
		Ok(DEFAULT_ORIGIN.to_string())
	}

	/// Appends `entry` after the current one, discarding forward entries.
	fn push(&self, entry: HistoryEntry) -> Result<(), RouterError>;

	/// Registers a listener for back/forward navigation. Listeners stay
	/// registered for the life of the history.
	fn on_pop(&self, listener: PopListener) -> Result<(), RouterError>;
}

/// In-memory session history.
#[derive(Default)]
pub struct MemoryHistory {
	entries: RefCell<Vec<HistoryEntry>>,
	index: Cell<usize>,
	listeners: RefCell<Vec<PopListener>>,
}

impl std::fmt::Debug for MemoryHistory {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("MemoryHistory")
			.field("entries", &self.entries.borrow())
			.field("index", &self.index.get())
			.field("listeners", &self.listeners.borrow().len())
			.finish()
	}
}

impl MemoryHistory {
	/// Creates a history whose single entry is `initial_url`.
	pub fn new(initial_url: impl Into<String>) -> Self {
		Self {
			entries: RefCell::new(vec![HistoryEntry::new(initial_url)]),
			index: Cell::new(0),
			listeners: RefCell::new(Vec::new()),
		}
	}

	/// Returns the number of entries.
	pub fn len(&self) -> usize {
		self.entries.borrow().len()
	}

	/// Returns whether the history has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.borrow().is_empty()
	}

	/// Returns the position of the current entry.
	pub fn index(&self) -> usize {
		self.index.get()
	}

	/// Returns a snapshot of all entries.
	pub fn entries(&self) -> Vec<HistoryEntry> {
		self.entries.borrow().clone()
	}

	/// Moves one entry back. Returns `false` at the start of the history.
	pub fn back(&self) -> bool {
		self.traverse(-1)
	}

	/// Moves one entry forward. Returns `false` at the end of the history.
	pub fn forward(&self) -> bool {
		self.traverse(1)
	}

	/// Moves `delta` entries and notifies pop listeners. Out of range deltas
	/// and `0` do nothing.
	pub fn traverse(&self, delta: isize) -> bool {
		let target = match self.index.get().checked_add_signed(delta) {
			Some(target) if delta != 0 && target < self.len() => target,
			_ => return false,
		};
		self.index.set(target);

		let url = self.entries.borrow()[target].url.clone();
		let listeners: Vec<PopListener> = self.listeners.borrow().iter().cloned().collect();
		for listener in listeners {
			listener(&url);
		}
		true
	}
}

impl History for MemoryHistory {
	fn current_url(&self) -> Result<String, RouterError> {
		self.entries
			.borrow()
			.get(self.index.get())
			.map(|entry| entry.url.clone())
			.ok_or_else(|| RouterError::Platform("history has no current entry".to_string()))
	}

	fn push(&self, entry: HistoryEntry) -> Result<(), RouterError> {
		let mut entries = self.entries.borrow_mut();
		let next = if entries.is_empty() {
			0
		} else {
			self.index.get() + 1
		};
		entries.truncate(next);
		entries.push(entry);
		self.index.set(next);
		Ok(())
	}

	fn on_pop(&self, listener: PopListener) -> Result<(), RouterError> {
		self.listeners.borrow_mut().push(listener);
		Ok(())
	}
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserHistory;

#[cfg(target_arch = "wasm32")]
mod browser {
	use super::{History, HistoryEntry, PopListener};
	use crate::error::RouterError;
	use crate::error_log;
	use wasm_bindgen::JsCast;
	use wasm_bindgen::prelude::*;
	use web_sys::{Event, Location, Window};

	fn location_url(location: &Location) -> Result<String, RouterError> {
		Ok(format!(
			"{}{}{}",
			location.pathname()?,
			location.search()?,
			location.hash()?
		))
	}

	/// Session history of the current browser window.
	#[derive(Debug, Clone)]
	pub struct BrowserHistory {
		window: Window,
	}

	impl BrowserHistory {
		/// Wraps the current window.
		pub fn new() -> Result<Self, RouterError> {
			let window = web_sys::window()
				.ok_or_else(|| RouterError::Platform("No window object".to_string()))?;
			Ok(Self { window })
		}

		/// Triggers a browser back navigation.
		pub fn back(&self) -> Result<(), RouterError> {
			self.window.history()?.back()?;
			Ok(())
		}
	}

	impl History for BrowserHistory {
		fn current_url(&self) -> Result<String, RouterError> {
			location_url(&self.window.location())
		}

		fn origin(&self) -> Result<String, RouterError> {
			Ok(self.window.location().origin()?)
		}

		fn push(&self, entry: HistoryEntry) -> Result<(), RouterError> {
			let state = js_sys::JSON::parse(&entry.state.to_string())?;
			self.window
				.history()?
				.push_state_with_url(&state, &entry.title, Some(entry.url.as_str()))?;
			Ok(())
		}

		fn on_pop(&self, listener: PopListener) -> Result<(), RouterError> {
			let location = self.window.location();
			let handler = Closure::wrap(Box::new(move |_event: Event| {
				match location_url(&location) {
					Ok(url) => listener(&url),
					Err(err) => error_log!("Reading location after popstate failed: {}", err),
				}
			}) as Box<dyn FnMut(_)>);

			self.window
				.add_event_listener_with_callback("popstate", handler.as_ref().unchecked_ref())?;
			// Page-lifetime listener
			handler.forget();
			Ok(())
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn recording(history: &MemoryHistory) -> Rc<RefCell<Vec<String>>> {
		let seen = Rc::new(RefCell::new(Vec::new()));
		let sink = Rc::clone(&seen);
		history
			.on_pop(Rc::new(move |url: &str| sink.borrow_mut().push(url.to_string())))
			.unwrap();
		seen
	}

	#[rstest]
	fn test_history_entry_defaults() {
		let entry = HistoryEntry::new("/foo");
		assert_eq!(entry.state, serde_json::json!({}));
		assert_eq!(entry.title, "");
		assert_eq!(entry.url, "/foo");
	}

	#[rstest]
	fn test_push_appends_and_moves() {
		let history = MemoryHistory::new("/");
		history.push(HistoryEntry::new("/foo")).unwrap();
		history.push(HistoryEntry::new("/bar")).unwrap();

		assert_eq!(history.len(), 3);
		assert_eq!(history.index(), 2);
		assert_eq!(history.current_url().unwrap(), "/bar");
	}

	#[rstest]
	fn test_back_fires_listeners_without_new_entry() {
		let history = MemoryHistory::new("/");
		let seen = recording(&history);
		history.push(HistoryEntry::new("/foo")).unwrap();
		history.push(HistoryEntry::new("/bar")).unwrap();

		assert!(history.back());

		assert_eq!(history.current_url().unwrap(), "/foo");
		assert_eq!(history.len(), 3);
		assert_eq!(*seen.borrow(), vec!["/foo".to_string()]);
	}

	#[rstest]
	fn test_push_discards_forward_entries() {
		let history = MemoryHistory::new("/");
		history.push(HistoryEntry::new("/foo")).unwrap();
		history.push(HistoryEntry::new("/bar")).unwrap();
		history.back();
		history.back();

		history.push(HistoryEntry::new("/baz")).unwrap();

		let urls: Vec<String> = history.entries().into_iter().map(|e| e.url).collect();
		assert_eq!(urls, vec!["/", "/baz"]);
		assert!(!history.forward());
	}

	#[rstest]
	#[case(0)]
	#[case(-1)]
	#[case(1)]
	#[case(5)]
	fn test_traverse_out_of_range_is_ignored(#[case] delta: isize) {
		let history = MemoryHistory::new("/");
		let seen = recording(&history);

		assert!(!history.traverse(delta));

		assert_eq!(history.index(), 0);
		assert!(seen.borrow().is_empty());
	}

	#[rstest]
	fn test_forward_after_back() {
		let history = MemoryHistory::new("/");
		let seen = recording(&history);
		history.push(HistoryEntry::new("/foo")).unwrap();
		history.back();

		assert!(history.forward());

		assert_eq!(history.current_url().unwrap(), "/foo");
		assert_eq!(*seen.borrow(), vec!["/".to_string(), "/foo".to_string()]);
	}

	#[rstest]
	fn test_listener_may_push() {
		let history = Rc::new(MemoryHistory::new("/"));
		history.push(HistoryEntry::new("/foo")).unwrap();
		let inner = Rc::clone(&history);
		history
			.on_pop(Rc::new(move |_: &str| {
				inner.push(HistoryEntry::new("/redirected")).unwrap();
			}))
			.unwrap();

		history.back();

		assert_eq!(history.current_url().unwrap(), "/redirected");
	}
}
