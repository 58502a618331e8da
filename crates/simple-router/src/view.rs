//! The view capability.

use crate::dom::Container;
use crate::error::RouterError;
use crate::router::Navigator;

/// A page that can render itself into a container.
///
/// `mount` replaces the container's content, sets the document title and
/// binds the page's interactive handlers. Navigation triggers call back into
/// the router through the [`Navigator`] rather than a global.
///
/// There is no unmount hook: handlers bound through
/// [`Container::on_click`] are released by the container when the next view
/// mounts.
///
/// # Example
///
/// ```ignore
/// struct About;
///
/// impl View for About {
///     fn mount(&self, container: &dyn Container, navigator: &Navigator) -> Result<(), RouterError> {
///         container.set_title("about")?;
///         container.set_inner_html(r#"<button class="home">Home</button>"#)?;
///         let navigator = navigator.clone();
///         container.on_click(".home", Rc::new(move || navigator.go_or_log("/")))
///     }
/// }
/// ```
pub trait View {
	/// Renders into `container`.
	fn mount(&self, container: &dyn Container, navigator: &Navigator) -> Result<(), RouterError>;
}

impl<F> View for F
where
	F: Fn(&dyn Container, &Navigator) -> Result<(), RouterError>,
{
	fn mount(&self, container: &dyn Container, navigator: &Navigator) -> Result<(), RouterError> {
		self(container, navigator)
	}
}
