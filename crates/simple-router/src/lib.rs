//! Simple Router - History API routing for single-page applications
//!
//! Maps URL paths to page views and keeps them in sync with the browser's
//! session history. Built directly on wasm-bindgen and web-sys.
//!
//! ## Architecture
//!
//! - [`route`]: closed route enums ([`Routable`]) and the [`RouteTable`]
//! - [`router`]: the [`Router`] and the [`Navigator`] handle views receive
//! - [`view`]: the [`View`] mount capability
//! - [`history`]: session history ([`MemoryHistory`], `BrowserHistory` on WASM)
//! - [`dom`]: mount targets ([`MemoryContainer`], `DomContainer` on WASM)
//! - [`path`]: relative path resolution and lookup keys
//! - [`config`]: [`RouterConfig`]
//! - [`logging`]: `debug_log!`, `info_log!`, `warn_log!`, `error_log!`
//!
//! ## Example
//!
//! ```ignore
//! use simple_router::{RouteTable, Router, RouterConfig};
//!
//! let table = RouteTable::new()
//!     .route("/foo", AppRoute::Foo)
//!     .route("/bar", AppRoute::Bar)
//!     .alias("/", "/foo");
//!
//! let router = Router::new(
//!     table,
//!     Rc::new(BrowserHistory::new()?),
//!     Rc::new(DomContainer::body()?),
//!     RouterConfig::default(),
//! );
//! router.start()?;
//! ```
//!
//! On native targets the same router runs against [`MemoryHistory`] and
//! [`MemoryContainer`], which is how the test suites drive it.

#![warn(missing_docs)]

pub mod config;
pub mod dom;
pub mod error;
pub mod history;
pub mod logging;
pub mod path;
pub mod route;
pub mod router;
pub mod view;

pub use config::{RouterConfig, TrailingSlash, UnmatchedPolicy};
#[cfg(target_arch = "wasm32")]
pub use dom::DomContainer;
pub use dom::{ClickHandler, Container, MemoryContainer};
pub use error::RouterError;
#[cfg(target_arch = "wasm32")]
pub use history::BrowserHistory;
pub use history::{History, HistoryEntry, MemoryHistory, PopListener};
pub use route::{Routable, RouteTable};
pub use router::{Navigator, Router};
pub use view::View;

// Logging macros are exported at the crate root via #[macro_export]:
// simple_router::debug_log!, simple_router::info_log!, ...
