//! Server configuration -- resolved once from built-in defaults, an
//! optional `grayserve.toml` file, and `GRAYSERVE_*` environment variables

use config::{Config, ConfigError, Environment, File};
use once_cell::sync::Lazy;
use serde::Deserialize;

/// Log filter applied when `RUST_LOG` is unset
pub const RUST_LOG: &str = "info,actix_web=info";

/// Settings for the HTTP server. The request contract itself takes no
/// configuration; these only control binding and startup.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Address the server binds to
    pub host: String,
    /// Port the server listens on
    pub port: u16,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8080)?
            .add_source(File::with_name("grayserve").required(false))
            .add_source(Environment::with_prefix("GRAYSERVE"))
            .build()?
            .try_deserialize()
    }
}

pub static SETTINGS: Lazy<Settings> =
    Lazy::new(|| Settings::new().expect("invalid server configuration"));
