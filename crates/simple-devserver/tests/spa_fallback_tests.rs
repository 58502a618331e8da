//! History fallback tests for the development server
//!
//! Each test builds the axum app over a temporary bundle directory and sends
//! requests through `oneshot`, without binding a socket.

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use rstest::{fixture, rstest};
use simple_devserver::{DevServerError, DevServerSettings, app, serve};
use std::fs;
use tempfile::TempDir;
use tower::ServiceExt;

const INDEX: &str = "<!doctype html><title>simple-spa</title>";
const SCRIPT: &str = "console.log('bundle');";

struct Bundle {
	dir: TempDir,
}

impl Bundle {
	fn settings(&self, spa_fallback: bool) -> DevServerSettings {
		DevServerSettings {
			static_dir: self.dir.path().to_path_buf(),
			spa_fallback,
			..DevServerSettings::default()
		}
	}
}

#[fixture]
fn bundle() -> Bundle {
	let dir = tempfile::tempdir().unwrap();
	fs::write(dir.path().join("index.html"), INDEX).unwrap();
	fs::create_dir(dir.path().join("pkg")).unwrap();
	fs::write(dir.path().join("pkg").join("simple_spa.js"), SCRIPT).unwrap();
	Bundle { dir }
}

async fn get(settings: &DevServerSettings, uri: &str, accept: &str) -> (StatusCode, String) {
	let request = Request::builder()
		.uri(uri)
		.header(header::ACCEPT, accept)
		.body(Body::empty())
		.unwrap();
	let response = app(settings).unwrap().oneshot(request).await.unwrap();
	let status = response.status();
	let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
	(status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Success Criterion 1: deep links load the application
#[rstest]
#[case("/bar")]
#[case("/foo")]
#[case("/baz")]
#[case("/bar?tab=1")]
#[tokio::test]
async fn test_page_request_gets_index(bundle: Bundle, #[case] uri: &str) {
	let (status, body) = get(&bundle.settings(true), uri, "text/html").await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body, INDEX);
}

#[rstest]
#[tokio::test]
async fn test_root_serves_index(bundle: Bundle) {
	let (status, body) = get(&bundle.settings(true), "/", "text/html").await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body, INDEX);
}

/// Success Criterion 2: assets are served unchanged
#[rstest]
#[tokio::test]
async fn test_asset_served(bundle: Bundle) {
	let (status, body) = get(&bundle.settings(true), "/pkg/simple_spa.js", "*/*").await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body, SCRIPT);
}

#[rstest]
#[tokio::test]
async fn test_missing_asset_is_not_rewritten(bundle: Bundle) {
	let (status, _) = get(&bundle.settings(true), "/pkg/missing.js", "*/*").await;

	assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn test_non_html_request_is_not_rewritten(bundle: Bundle) {
	let (status, _) = get(&bundle.settings(true), "/bar", "application/json").await;

	assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Success Criterion 3: fallback can be switched off
#[rstest]
#[tokio::test]
async fn test_no_spa_returns_not_found(bundle: Bundle) {
	let settings = bundle.settings(false);

	let (status, _) = get(&settings, "/bar", "text/html").await;
	assert_eq!(status, StatusCode::NOT_FOUND);

	let (status, body) = get(&settings, "/pkg/simple_spa.js", "*/*").await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body, SCRIPT);
}

#[rstest]
#[tokio::test]
async fn test_serve_rejects_missing_static_dir() {
	let settings = DevServerSettings {
		static_dir: "/definitely/not/a/bundle".into(),
		..DevServerSettings::default()
	};

	let result = serve(settings).await;

	assert!(matches!(result, Err(DevServerError::MissingStaticDir(_))));
}
