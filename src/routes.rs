//! Application routes.

use crate::views::{BarView, FooView, NotFoundView};
use simple_router::{Routable, RouteTable, View};

/// Every page of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
	/// `/foo`, and `/` through the root alias
	Foo,
	/// `/bar`
	Bar,
	/// Any unmapped path
	NotFound,
}

impl Routable for AppRoute {
	fn not_found() -> Self {
		AppRoute::NotFound
	}

	fn create_view(&self) -> Box<dyn View> {
		match self {
			AppRoute::Foo => Box::new(FooView),
			AppRoute::Bar => Box::new(BarView),
			AppRoute::NotFound => Box::new(NotFoundView),
		}
	}
}

/// Builds the application's route table.
pub fn route_table() -> RouteTable<AppRoute> {
	RouteTable::new()
		.route("/foo", AppRoute::Foo)
		.route("/bar", AppRoute::Bar)
		.alias("/", "/foo")
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("/foo", Some(AppRoute::Foo))]
	#[case("/bar", Some(AppRoute::Bar))]
	#[case("/", Some(AppRoute::Foo))]
	#[case("/baz", None)]
	#[case("foo", None)]
	fn test_route_table(#[case] path: &str, #[case] expected: Option<AppRoute>) {
		assert_eq!(route_table().recognize(path).copied(), expected);
	}

	#[rstest]
	fn test_route_table_size() {
		assert_eq!(route_table().paths(), vec!["/bar", "/foo"]);
	}
}
