//! Fallback page for paths no route claims.

use super::PageSpec;
use simple_router::{Container, Navigator, RouterError, View};

const PAGE: PageSpec = PageSpec {
	name: "not_found",
	title: "not found",
	template: include_str!("not_found/index.html"),
	style: include_str!("not_found/style.css"),
	trigger: (".not_found_home", "/"),
};

/// Mounted under the fallback policy when a path is unmapped.
#[derive(Debug, Default)]
pub struct NotFoundView;

impl View for NotFoundView {
	fn mount(&self, container: &dyn Container, navigator: &Navigator) -> Result<(), RouterError> {
		PAGE.mount(container, navigator)
	}
}
