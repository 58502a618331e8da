//! # Simple SPA development server
//!
//! Serves the built bundle of `simple-spa` and answers page requests for
//! unknown paths with `index.html`, so deep links such as `/bar` load the
//! application and the client-side router renders the right page.
//!
//! ```bash
//! simple-devserver --static-dir static --port 8066
//! ```
//!
//! Settings can also come from a TOML file (see [`DevServerSettings`]);
//! command-line flags take precedence.

#![warn(missing_docs)]

pub mod cli;
pub mod server;
pub mod settings;

pub use cli::Cli;
pub use server::{DevServerError, app, is_page_request, serve};
pub use settings::{DEFAULT_PORT, DevServerSettings, SettingsError};
