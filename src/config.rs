use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Optional file layered over the defaults.
pub const CONFIG_FILE: &str = "config.toml";
/// Prefix for environment overrides, e.g. `MERGINGTON_DATABASE_URL`.
pub const ENV_PREFIX: &str = "MERGINGTON_";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Socket address the HTTP server binds to.
    pub listen_addr: String,
    /// sqlx SQLite URL; the file is created on first start.
    pub database_url: String,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            database_url: "sqlite:data.db".to_string(),
            static_dir: PathBuf::from("static"),
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    /// Defaults, then `config.toml` if present, then `MERGINGTON_*` env vars.
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }
}
