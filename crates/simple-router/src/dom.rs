//! Mount targets.
//!
//! A [`Container`] is the surface a view renders into: the document body,
//! the document title and the view stylesheets. [`DomContainer`] drives the
//! real document on `wasm32`; [`MemoryContainer`] records everything in memory
//! and lets tests click bound elements.

use crate::error::RouterError;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Handler invoked when a bound element is clicked.
pub type ClickHandler = Rc<dyn Fn()>;

/// The surface views mount into.
pub trait Container {
	/// Sets the document title.
	fn set_title(&self, title: &str) -> Result<(), RouterError>;

	/// Replaces the container's markup.
	fn set_inner_html(&self, html: &str) -> Result<(), RouterError>;

	/// Installs a stylesheet once per `key`. Later calls with the same key are
	/// ignored.
	fn adopt_stylesheet(&self, key: &str, css: &str) -> Result<(), RouterError>;

	/// Binds `handler` to clicks on the first element matching `selector`.
	///
	/// Returns [`RouterError::ElementNotFound`] when nothing matches.
	fn on_click(&self, selector: &str, handler: ClickHandler) -> Result<(), RouterError>;

	/// Releases every handler bound since the previous reset.
	fn reset(&self);
}

/// In-memory container for native targets and tests.
///
/// Selector support covers what templates in this workspace use: `.class`,
/// `#id` and bare tag names.
#[derive(Default)]
pub struct MemoryContainer {
	html: RefCell<String>,
	title: RefCell<String>,
	stylesheets: RefCell<BTreeMap<String, String>>,
	handlers: RefCell<Vec<(String, ClickHandler)>>,
}

impl std::fmt::Debug for MemoryContainer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("MemoryContainer")
			.field("title", &self.title.borrow())
			.field("html_len", &self.html.borrow().len())
			.field("stylesheets", &self.stylesheets.borrow().keys().collect::<Vec<_>>())
			.field("handlers", &self.handlers.borrow().len())
			.finish()
	}
}

impl MemoryContainer {
	/// Creates an empty container.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the current markup.
	pub fn html(&self) -> String {
		self.html.borrow().clone()
	}

	/// Returns the current document title.
	pub fn title(&self) -> String {
		self.title.borrow().clone()
	}

	/// Returns the installed stylesheet keys.
	pub fn stylesheet_keys(&self) -> Vec<String> {
		self.stylesheets.borrow().keys().cloned().collect()
	}

	/// Returns the number of bound handlers.
	pub fn handler_count(&self) -> usize {
		self.handlers.borrow().len()
	}

	/// Simulates a click on the element bound under `selector`.
	///
	/// The handler runs after the internal borrow is released, so it may
	/// navigate and remount this container.
	pub fn click(&self, selector: &str) -> Result<(), RouterError> {
		let handler = self
			.handlers
			.borrow()
			.iter()
			.find(|(bound, _)| bound == selector)
			.map(|(_, handler)| Rc::clone(handler))
			.ok_or_else(|| RouterError::ElementNotFound(selector.to_string()))?;
		handler();
		Ok(())
	}
}

impl Container for MemoryContainer {
	fn set_title(&self, title: &str) -> Result<(), RouterError> {
		*self.title.borrow_mut() = title.to_string();
		Ok(())
	}

	fn set_inner_html(&self, html: &str) -> Result<(), RouterError> {
		*self.html.borrow_mut() = html.to_string();
		Ok(())
	}

	fn adopt_stylesheet(&self, key: &str, css: &str) -> Result<(), RouterError> {
		self.stylesheets
			.borrow_mut()
			.entry(key.to_string())
			.or_insert_with(|| css.to_string());
		Ok(())
	}

	fn on_click(&self, selector: &str, handler: ClickHandler) -> Result<(), RouterError> {
		if !markup_matches(&self.html.borrow(), selector) {
			return Err(RouterError::ElementNotFound(selector.to_string()));
		}
		self.handlers
			.borrow_mut()
			.push((selector.to_string(), handler));
		Ok(())
	}

	fn reset(&self) {
		self.handlers.borrow_mut().clear();
	}
}

/// Approximates `querySelector` for a single simple selector.
fn markup_matches(html: &str, selector: &str) -> bool {
	if let Some(class) = selector.strip_prefix('.') {
		attribute_values(html, "class")
			.any(|value| value.split_whitespace().any(|token| token == class))
	} else if let Some(id) = selector.strip_prefix('#') {
		attribute_values(html, "id").any(|value| value == id)
	} else {
		let open = format!("<{}", selector);
		html.match_indices(&open).any(|(index, _)| {
			html[index + open.len()..]
				.chars()
				.next()
				.is_some_and(|c| c == '>' || c == '/' || c.is_whitespace())
		})
	}
}

fn attribute_values<'a>(html: &'a str, name: &str) -> impl Iterator<Item = &'a str> + 'a {
	let needle = format!("{}=\"", name);
	html.match_indices(&needle)
		.filter(|(index, _)| {
			html[..*index]
				.chars()
				.next_back()
				.is_some_and(char::is_whitespace)
		})
		.filter_map(move |(index, matched)| {
			let rest = &html[index + matched.len()..];
			rest.find('"').map(|end| &rest[..end])
		})
		.collect::<Vec<_>>()
		.into_iter()
}

#[cfg(target_arch = "wasm32")]
pub use browser::DomContainer;

#[cfg(target_arch = "wasm32")]
mod browser {
	use super::{ClickHandler, Container};
	use crate::error::RouterError;
	use crate::warn_log;
	use std::cell::RefCell;
	use wasm_bindgen::JsCast;
	use wasm_bindgen::prelude::*;
	use web_sys::{Document, Element, Event, HtmlElement};

	struct BoundHandler {
		element: Element,
		closure: Closure<dyn FnMut(Event)>,
	}

	/// Container backed by `document.body`.
	pub struct DomContainer {
		document: Document,
		root: HtmlElement,
		handlers: RefCell<Vec<BoundHandler>>,
	}

	impl std::fmt::Debug for DomContainer {
		fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
			f.debug_struct("DomContainer")
				.field("handlers", &self.handlers.borrow().len())
				.finish()
		}
	}

	impl DomContainer {
		/// Targets the body of the current window's document.
		pub fn body() -> Result<Self, RouterError> {
			let document = web_sys::window()
				.and_then(|w| w.document())
				.ok_or_else(|| RouterError::Platform("No document object".to_string()))?;
			let root = document
				.body()
				.ok_or_else(|| RouterError::Platform("No body element".to_string()))?;
			Ok(Self::new(document, root))
		}

		/// Targets an arbitrary element of `document`.
		pub fn new(document: Document, root: HtmlElement) -> Self {
			Self {
				document,
				root,
				handlers: RefCell::new(Vec::new()),
			}
		}

		/// Returns the element views are mounted into.
		pub fn root(&self) -> &HtmlElement {
			&self.root
		}
	}

	impl Container for DomContainer {
		fn set_title(&self, title: &str) -> Result<(), RouterError> {
			self.document.set_title(title);
			Ok(())
		}

		fn set_inner_html(&self, html: &str) -> Result<(), RouterError> {
			self.root.set_inner_html(html);
			Ok(())
		}

		fn adopt_stylesheet(&self, key: &str, css: &str) -> Result<(), RouterError> {
			let selector = format!("style[data-view-style=\"{}\"]", key);
			if self.document.query_selector(&selector)?.is_some() {
				return Ok(());
			}
			let head = self
				.document
				.head()
				.ok_or_else(|| RouterError::Platform("No head element".to_string()))?;
			let style = self.document.create_element("style")?;
			style.set_attribute("data-view-style", key)?;
			style.set_text_content(Some(css));
			head.append_child(&style)?;
			Ok(())
		}

		fn on_click(&self, selector: &str, handler: ClickHandler) -> Result<(), RouterError> {
			let element = self
				.root
				.query_selector(selector)?
				.ok_or_else(|| RouterError::ElementNotFound(selector.to_string()))?;
			let closure = Closure::wrap(Box::new(move |_event: Event| handler()) as Box<dyn FnMut(_)>);
			element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
			self.handlers
				.borrow_mut()
				.push(BoundHandler { element, closure });
			Ok(())
		}

		fn reset(&self) {
			// Dropping a closure mid-call is deferred by wasm-bindgen until it returns.
			let bound = std::mem::take(&mut *self.handlers.borrow_mut());
			for BoundHandler { element, closure } in bound {
				if let Err(err) = element
					.remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
				{
					warn_log!("Removing click listener failed: {:?}", err);
				}
			}
		}
	}
}
