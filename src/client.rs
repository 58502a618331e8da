//! WASM entry point.

use crate::app::launch;
use simple_router::{BrowserHistory, DomContainer, error_log};
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// Element holding the optional JSON router configuration.
const CONFIG_ELEMENT_ID: &str = "router-config";

/// WASM entry point
///
/// Builds the router against the real browser and mounts the page for the
/// current location into `document.body`.
#[allow(clippy::main_recursion)]
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
	// Set up panic hook for better error messages in console
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();

	let document = web_sys::window()
		.and_then(|w| w.document())
		.ok_or_else(|| JsValue::from_str("No document object"))?;
	let config = document
		.get_element_by_id(CONFIG_ELEMENT_ID)
		.and_then(|el| el.text_content());

	let history = Rc::new(BrowserHistory::new().map_err(|e| JsValue::from_str(&e.to_string()))?);
	let body = Rc::new(DomContainer::body().map_err(|e| JsValue::from_str(&e.to_string()))?);

	let router = launch(history, body, config.as_deref()).map_err(|e| {
		error_log!("Failed to start router: {}", e);
		JsValue::from_str(&e.to_string())
	})?;

	// The router lives as long as the page
	std::mem::forget(router);
	Ok(())
}
