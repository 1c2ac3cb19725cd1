mod config;
mod routes;

use std::io;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};

use bisaya_ipsum_core::model::generator::Generator;
use bisaya_ipsum_core::words::WordBank;

use config::ServerConfig;
use routes::SharedData;

const ENDPOINTS: &[&str] = &[
	"GET  /api/health",
	"GET  /api/words",
	"GET  /api/words/{category}",
	"GET  /api/generate?paragraphs=3&curseLevel=medium&format=json",
	"GET  /api/generate/paragraph?curseLevel=medium",
	"GET  /api/generate/sentence?curseLevel=medium",
	"POST /api/generate",
];

/// Main entry point for the server.
///
/// Validates the built-in word bank, then starts an Actix-web HTTP server
/// sharing one read-only generator between all workers.
///
/// # Notes
/// - The listen address comes from `HOST` and `PORT` (default 0.0.0.0:3002).
/// - Log filtering follows `RUST_LOG`, `info` by default.
#[actix_web::main]
async fn main() -> io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let config = ServerConfig::from_env()?;
	let generator = Generator::new(WordBank::bisaya()).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
	let shared_data = web::Data::new(SharedData { generator });

	log::info!("Bisaya Ipsum API running on http://{}:{}", config.host, config.port);
	log::info!("{} phrases loaded", shared_data.generator.words().total());
	for endpoint in ENDPOINTS {
		log::info!("  {endpoint}");
	}

	HttpServer::new(move || {
		App::new()
			.app_data(shared_data.clone())
			.wrap(Cors::permissive())
			.wrap(middleware::Logger::default())
			.configure(routes::configure)
	})
		.bind((config.host.as_str(), config.port))?
		.run()
		.await
}
