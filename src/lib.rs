//! # Simple SPA
//!
//! A two-page single-page application: `/foo` and `/bar`, with `/` aliased to
//! `/foo` and a fallback page for everything else. Navigation goes through
//! the History API, so the browser's back and forward buttons move between
//! pages without reloading.
//!
//! ## Layout
//!
//! - [`routes`]: the [`AppRoute`] enum and the route table
//! - [`views`]: one module per page, each with its own template and stylesheet
//! - [`app`]: configuration parsing and router construction
//! - `client` (WASM only): the `#[wasm_bindgen(start)]` entry point
//!
//! ## Building
//!
//! ```bash
//! wasm-pack build --target web --out-dir static/pkg
//! cargo run -p simple-devserver -- --static-dir static
//! ```
//!
//! The development server answers every unknown path with `index.html`, so
//! deep links such as `/bar` reach the client-side router.
//!
//! ## Configuration
//!
//! `index.html` may embed router options as JSON:
//!
//! ```html
//! <script id="router-config" type="application/json">{"unmatched": "fallback"}</script>
//! ```

#![warn(missing_docs)]

pub mod app;
pub mod routes;
pub mod views;

#[cfg(target_arch = "wasm32")]
mod client;

pub use app::{AppError, build_router, launch, parse_config};
pub use routes::{AppRoute, route_table};
