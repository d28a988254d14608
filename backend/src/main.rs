use festival_backend::{config::Config, router};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// Can't log anything nicely until we know what level to log at, so config errors just go
	// straight to stderr
	let config = match Config::from_env() {
		Ok(config) => config,
		Err(e) => {
			eprintln!("Couldn't read configuration: {e}");
			return Err(e.into());
		}
	};

	tracing_subscriber::fmt()
		.with_max_level(config.log_level)
		.init();

	info!("Serving frontend from {}", config.dist_dir.display());
	info!("Public url is {}", config.public_url);

	let addr = config.addr();
	let listener = tokio::net::TcpListener::bind(addr).await?;

	info!("Listening on {addr}...");

	axum::serve(listener, router(&config)).await?;

	Ok(())
}
