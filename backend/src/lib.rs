use std::sync::Arc;
use axum::{routing::get, Router};
use once_cell::sync::OnceCell;
use tower_http::{services::{ServeDir, ServeFile}, trace::TraceLayer};

pub mod config;
pub mod api;
pub mod festival_page;
pub mod licenses;
pub mod robots;

use config::Config;

#[macro_export]
macro_rules! print_and_ret{
	($err: expr, $ret_str: literal) => {{
		tracing::error!($ret_str);
		return ($err, format!($ret_str));
	}};
	($ret_str:literal) => {
		$crate::print_and_ret!(axum::http::StatusCode::INTERNAL_SERVER_ERROR, $ret_str)
	}
}

#[derive(Clone)]
pub struct AppState {
	pub public_url: Arc<str>,
	// only built the first time someone asks for it
	pub sitemap: Arc<OnceCell<String>>
}

pub fn router(config: &Config) -> Router {
	let state = AppState {
		public_url: config.public_url.as_str().into(),
		sitemap: Arc::default()
	};

	// Anything we don't have a route for is either part of the built frontend or a path that the
	// frontend's router will deal with, so those all get index.html
	let frontend = ServeDir::new(&config.dist_dir)
		.fallback(ServeFile::new(config.dist_dir.join("index.html")));

	Router::new()
		.route("/sem-js", get(festival_page::get_festival_page))
		.route("/api/ingressos", get(api::get_catalog))
		.route("/licenses", get(licenses::get_license_page))
		.route("/robots.txt", get(robots::get_robots_txt))
		.route("/sitemap.xml", get(robots::get_sitemap_xml))
		.fallback_service(frontend)
		.layer(TraceLayer::new_for_http())
		.with_state(state)
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::{body::Body, http::{Request, StatusCode}};
	use std::path::PathBuf;
	use tower::ServiceExt;

	const INDEX: &str = "<!DOCTYPE html><html><body>castelo</body></html>";

	// every test gets its own directory so they don't trip over each other writing index.html
	fn config(name: &str) -> Config {
		let dist_dir: PathBuf = std::env::temp_dir().join(format!("festival-dist-{name}-{}", std::process::id()));
		std::fs::create_dir_all(&dist_dir).unwrap();
		std::fs::write(dist_dir.join("index.html"), INDEX).unwrap();

		Config {
			port: 8080,
			host: [127, 0, 0, 1].into(),
			dist_dir,
			public_url: "https://castelorock.example".into(),
			log_level: tracing::Level::INFO
		}
	}

	async fn get_body(config: &Config, uri: &str) -> (StatusCode, String) {
		let res = router(config)
			.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
			.await
			.unwrap();

		let status = res.status();
		let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
		(status, String::from_utf8(bytes.to_vec()).unwrap())
	}

	#[tokio::test]
	async fn serves_frontend_for_unknown_paths() {
		let config = config("fallback");

		let (status, body) = get_body(&config, "/").await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body, INDEX);

		let (status, body) = get_body(&config, "/some/route/the/frontend/handles").await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body, INDEX);
	}

	#[tokio::test]
	async fn robots_points_at_sitemap() {
		let (status, body) = get_body(&config("robots"), "/robots.txt").await;
		assert_eq!(status, StatusCode::OK);
		assert!(body.contains("Sitemap: https://castelorock.example/sitemap.xml"));
	}

	#[tokio::test]
	async fn sitemap_is_served() {
		let (status, body) = get_body(&config("sitemap"), "/sitemap.xml").await;
		assert_eq!(status, StatusCode::OK);
		assert!(body.contains("https://castelorock.example/sem-js"));
	}

	#[tokio::test]
	async fn catalog_has_both_tickets() {
		let (status, body) = get_body(&config("catalog"), "/api/ingressos").await;
		assert_eq!(status, StatusCode::OK);

		let json: serde_json::Value = serde_json::from_str(&body).unwrap();
		assert_eq!(json["tickets"][0]["price"], 20);
		assert_eq!(json["tickets"][1]["price"], 50);
		assert_eq!(json["tickets"][1]["includes_shirt"], true);
		assert_eq!(json["sizes"], serde_json::json!(["P", "M", "G"]));
		assert_eq!(json["pix_key"], "98984595785");
		assert_eq!(json["event"]["location"], "Arari - MA");
	}

	#[tokio::test]
	async fn no_js_page_is_rendered() {
		let (status, body) = get_body(&config("nojs"), "/sem-js").await;
		assert_eq!(status, StatusCode::OK);
		assert!(body.contains("Ingresso + Camisa"));
		assert!(body.contains("R$ 50,00"));
	}
}
