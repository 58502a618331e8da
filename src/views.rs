//! Page views.
//!
//! Each view owns its template and stylesheet (`views/<name>/index.html`,
//! `views/<name>/style.css`) and one navigation trigger.

mod bar;
mod foo;
mod not_found;

pub use bar::BarView;
pub use foo::FooView;
pub use not_found::NotFoundView;

use simple_router::{Container, Navigator, RouterError};
use std::rc::Rc;

/// Static description of a page.
pub(crate) struct PageSpec {
	/// Stylesheet key.
	pub name: &'static str,
	pub title: &'static str,
	pub template: &'static str,
	pub style: &'static str,
	/// Selector of the navigation trigger and the path it navigates to.
	pub trigger: (&'static str, &'static str),
}

impl PageSpec {
	/// Renders the page into `container` and wires its trigger.
	pub(crate) fn mount(
		&self,
		container: &dyn Container,
		navigator: &Navigator,
	) -> Result<(), RouterError> {
		container.adopt_stylesheet(self.name, self.style)?;
		container.set_title(self.title)?;
		container.set_inner_html(self.template)?;

		let (selector, target) = self.trigger;
		let navigator = navigator.clone();
		container.on_click(selector, Rc::new(move || navigator.go_or_log(target)))
	}
}
