//! Browser adapter tests
//!
//! Run with: `wasm-pack test --headless --chrome crates/simple-router`

#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use simple_router::{BrowserHistory, Container, DomContainer, History, HistoryEntry, RouterError};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn scratch() -> DomContainer {
	let document = web_sys::window().unwrap().document().unwrap();
	let root = document
		.create_element("div")
		.unwrap()
		.dyn_into::<web_sys::HtmlElement>()
		.unwrap();
	document.body().unwrap().append_child(&root).unwrap();
	DomContainer::new(document, root)
}

#[wasm_bindgen_test]
fn test_push_updates_location() {
	let history = BrowserHistory::new().unwrap();

	history.push(HistoryEntry::new("/pushed?x=1")).unwrap();

	assert_eq!(history.current_url().unwrap(), "/pushed?x=1");
}

#[wasm_bindgen_test]
async fn test_back_fires_pop_listener() {
	let history = BrowserHistory::new().unwrap();
	history.push(HistoryEntry::new("/first")).unwrap();
	history.push(HistoryEntry::new("/second?tab=1")).unwrap();
	let seen = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&seen);
	history
		.on_pop(Rc::new(move |url: &str| sink.borrow_mut().push(url.to_string())))
		.unwrap();

	history.back().unwrap();
	// popstate is delivered asynchronously
	for _ in 0..100 {
		if !seen.borrow().is_empty() {
			break;
		}
		TimeoutFuture::new(10).await;
	}

	assert_eq!(*seen.borrow(), vec!["/first".to_string()]);
	assert_eq!(history.current_url().unwrap(), "/first");
}

#[wasm_bindgen_test]
fn test_origin_matches_location() {
	let history = BrowserHistory::new().unwrap();
	let origin = web_sys::window().unwrap().location().origin().unwrap();

	assert_eq!(history.origin().unwrap(), origin);
}

#[wasm_bindgen_test]
fn test_title_and_markup() {
	let container = scratch();

	container.set_title("foo").unwrap();
	container.set_inner_html("<p class=\"hello\">hi</p>").unwrap();

	let document = web_sys::window().unwrap().document().unwrap();
	assert_eq!(document.title(), "foo");
	assert_eq!(container.root().inner_html(), "<p class=\"hello\">hi</p>");
}

#[wasm_bindgen_test]
fn test_stylesheet_added_once() {
	let container = scratch();

	container.adopt_stylesheet("wasm-test", "p { color: red; }").unwrap();
	container.adopt_stylesheet("wasm-test", "p { color: blue; }").unwrap();

	let document = web_sys::window().unwrap().document().unwrap();
	let styles = document
		.query_selector_all("style[data-view-style=\"wasm-test\"]")
		.unwrap();
	assert_eq!(styles.length(), 1);
}

#[wasm_bindgen_test]
fn test_click_handler_and_reset() {
	let container = scratch();
	container.set_inner_html("<button class=\"go\">go</button>").unwrap();
	let clicks = Rc::new(Cell::new(0));
	let counter = Rc::clone(&clicks);
	container
		.on_click(".go", Rc::new(move || counter.set(counter.get() + 1)))
		.unwrap();
	let button = container
		.root()
		.query_selector(".go")
		.unwrap()
		.unwrap()
		.dyn_into::<web_sys::HtmlElement>()
		.unwrap();

	button.click();
	container.reset();
	button.click();

	assert_eq!(clicks.get(), 1);
}

#[wasm_bindgen_test]
fn test_missing_element() {
	let container = scratch();
	container.set_inner_html("<p>no buttons</p>").unwrap();

	let result = container.on_click(".go", Rc::new(|| {}));

	assert_eq!(result, Err(RouterError::ElementNotFound(".go".to_string())));
}
