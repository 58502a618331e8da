//! The `bar` page.

use super::PageSpec;
use simple_router::{Container, Navigator, RouterError, View};

const PAGE: PageSpec = PageSpec {
	name: "bar",
	title: "bar",
	template: include_str!("bar/index.html"),
	style: include_str!("bar/style.css"),
	trigger: (".bar_gofoo", "foo"),
};

/// Second page. Its button navigates back to `foo`.
#[derive(Debug, Default)]
pub struct BarView;

impl View for BarView {
	fn mount(&self, container: &dyn Container, navigator: &Navigator) -> Result<(), RouterError> {
		PAGE.mount(container, navigator)
	}
}
