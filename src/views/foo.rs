//! The `foo` page, also served at `/`.

use super::PageSpec;
use simple_router::{Container, Navigator, RouterError, View};

const PAGE: PageSpec = PageSpec {
	name: "foo",
	title: "foo",
	template: include_str!("foo/index.html"),
	style: include_str!("foo/style.css"),
	trigger: (".foo_gobar", "bar"),
};

/// Landing page. Its button navigates to `bar`.
#[derive(Debug, Default)]
pub struct FooView;

impl View for FooView {
	fn mount(&self, container: &dyn Container, navigator: &Navigator) -> Result<(), RouterError> {
		PAGE.mount(container, navigator)
	}
}
