//! Static file service with single-page-application fallback.
//!
//! Page requests for paths the bundle does not contain are answered with the
//! entry document so the client-side router can take over. A request counts
//! as a page request when:
//!
//! - the method is `GET` or `HEAD`
//! - the `Accept` header names `text/html` or `*/*`
//! - the last path segment has no dot (`/bar`, not `/bar.js`)
//!
//! Everything else goes straight to the file service, so a missing script
//! still produces a 404 instead of an HTML document.

use crate::settings::{DevServerSettings, SettingsError};
use axum::extract::{Request, State};
use axum::http::{HeaderMap, Method, Uri, header};
use axum::middleware;
use std::path::PathBuf;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Errors raised while starting or running the server.
#[derive(Debug, Error)]
pub enum DevServerError {
	/// Settings could not be loaded.
	#[error(transparent)]
	Settings(#[from] SettingsError),
	/// The static directory does not exist.
	#[error("Static directory not found: {}", .0.display())]
	MissingStaticDir(PathBuf),
	/// The entry document route is not a valid URI.
	#[error("Invalid index document: {0}")]
	InvalidIndex(String),
	/// Binding the listener failed.
	#[error("Failed to bind {address}: {source}")]
	Bind {
		/// Address that was requested.
		address: String,
		/// Underlying I/O error.
		#[source]
		source: std::io::Error,
	},
	/// The server stopped with an I/O error.
	#[error("Server error: {0}")]
	Serve(#[from] std::io::Error),
}

/// Returns `true` if the request should be answered with the entry document.
pub fn is_page_request(method: &Method, headers: &HeaderMap, path: &str) -> bool {
	if method != Method::GET && method != Method::HEAD {
		return false;
	}

	let accepts_html = headers
		.get_all(header::ACCEPT)
		.iter()
		.filter_map(|value| value.to_str().ok())
		.any(|value| value.contains("text/html") || value.contains("*/*"));
	if !accepts_html {
		return false;
	}

	let last_segment = path.rsplit('/').next().unwrap_or_default();
	!last_segment.contains('.')
}

async fn rewrite_page_request(State(index): State<Uri>, mut request: Request) -> Request {
	if request.uri().path() != "/"
		&& is_page_request(request.method(), request.headers(), request.uri().path())
	{
		tracing::debug!(from = %request.uri(), to = %index, "history fallback");
		*request.uri_mut() = index;
	}
	request
}

/// Builds the application service for `settings`.
pub fn app(settings: &DevServerSettings) -> Result<axum::Router, DevServerError> {
	let files = ServeDir::new(&settings.static_dir).append_index_html_on_directories(true);
	let mut router = axum::Router::new().fallback_service(files);

	if settings.spa_fallback {
		let index_route = settings.index_route();
		let index = index_route
			.parse::<Uri>()
			.map_err(|_| DevServerError::InvalidIndex(settings.index.clone()))?;
		router = router.layer(middleware::map_request_with_state(index, rewrite_page_request));
	}

	Ok(router.layer(TraceLayer::new_for_http()))
}

/// Serves `settings.static_dir` until Ctrl-C is pressed.
pub async fn serve(settings: DevServerSettings) -> Result<(), DevServerError> {
	if !settings.static_dir.is_dir() {
		return Err(DevServerError::MissingStaticDir(settings.static_dir));
	}

	let app = app(&settings)?;
	let address = settings.address();
	let listener = TcpListener::bind(&address)
		.await
		.map_err(|source| DevServerError::Bind {
			address: address.clone(),
			source,
		})?;

	tracing::info!(
		static_dir = %settings.static_dir.display(),
		spa_fallback = settings.spa_fallback,
		"Serving on http://{}",
		address
	);

	axum::serve(listener, app)
		.with_graceful_shutdown(shutdown_signal())
		.await?;

	tracing::info!("Server stopped");
	Ok(())
}

async fn shutdown_signal() {
	if let Err(e) = tokio::signal::ctrl_c().await {
		tracing::error!("Failed to listen for Ctrl-C: {}", e);
		return;
	}
	tracing::info!("Received Ctrl-C, shutting down");
}
