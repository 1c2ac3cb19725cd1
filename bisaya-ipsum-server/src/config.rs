use std::env;
use std::io;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3002;

/// Listen address of the server, read from `HOST` and `PORT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
	pub host: String,
	pub port: u16,
}

impl Default for ServerConfig {
	fn default() -> Self {
		Self { host: DEFAULT_HOST.to_owned(), port: DEFAULT_PORT }
	}
}

impl ServerConfig {
	/// Reads the configuration from the process environment.
	///
	/// # Errors
	/// Returns `io::ErrorKind::InvalidInput` if `PORT` is not a valid port number.
	pub fn from_env() -> io::Result<Self> {
		Self::from_vars(env::var("HOST").ok(), env::var("PORT").ok())
	}

	fn from_vars(host: Option<String>, port: Option<String>) -> io::Result<Self> {
		let host = match host {
			Some(h) if !h.trim().is_empty() => h.trim().to_owned(),
			_ => DEFAULT_HOST.to_owned(),
		};
		let port = match port {
			None => DEFAULT_PORT,
			Some(p) => p.trim().parse::<u16>().map_err(|e| {
				io::Error::new(io::ErrorKind::InvalidInput, format!("invalid PORT '{p}': {e}"))
			})?,
		};
		Ok(Self { host, port })
	}
}
