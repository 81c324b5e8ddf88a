use serde::Deserialize;
use std::env;

pub const DEFAULT_ENDPOINT: &str = "https://reqres.in/api/cupcakes";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub client: ClientConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    /// Where orders are POSTed.
    pub endpoint: String,
}

/// Local mock endpoint.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Self::defaults()?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. `CUPCAKE__CLIENT__ENDPOINT=http://localhost:8080/api/cupcakes`
            .add_source(config::Environment::with_prefix("CUPCAKE").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        config::Config::builder()
            .set_default("client.endpoint", DEFAULT_ENDPOINT)?
            .set_default("server.port", 8080)
    }
}
