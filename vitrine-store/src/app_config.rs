use serde::Deserialize;
use std::env;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;
use vitrine_catalog::ShippingConfig;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub latency: LatencyConfig,
    #[serde(default)]
    pub aggregation: AggregationConfig,
    #[serde(default)]
    pub shipping: ShippingConfig,
    #[serde(default)]
    pub logger: LoggerConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

/// Locations of the JSON datasets backing each collaborator
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DataConfig {
    pub products_file: String,
    pub sellers_file: String,
    pub reviews_file: String,
    pub questions_file: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            products_file: "./data/products.json".to_string(),
            sellers_file: "./data/sellers.json".to_string(),
            reviews_file: "./data/reviews.json".to_string(),
            questions_file: "./data/questions.json".to_string(),
        }
    }
}

/// Simulated network latency of the file-backed services, in milliseconds
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LatencyConfig {
    pub products_ms: u64,
    pub seller_ms: u64,
    pub reviews_ms: u64,
    pub questions_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            products_ms: 0,
            seller_ms: 15,
            reviews_ms: 20,
            questions_ms: 18,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AggregationConfig {
    pub question_limit: usize,
    pub related_limit: usize,
    /// 0 disables the deadline
    pub enrichment_timeout_ms: u64,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            question_limit: 10,
            related_limit: 4,
            enrichment_timeout_ms: 500,
        }
    }
}

impl AggregationConfig {
    pub fn enrichment_timeout(&self) -> Option<Duration> {
        (self.enrichment_timeout_ms > 0).then(|| Duration::from_millis(self.enrichment_timeout_ms))
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggerConfig {
    pub level: String,
    /// "json" or "text"
    pub format: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "json".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// Layers `{dir}/default`, `{dir}/{RUN_MODE}`, `{dir}/local` and `VITRINE__*`
    /// environment variables over the built-in defaults
    pub fn load_from(dir: &Path) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Every section has built-in defaults, so all files are optional
            .add_source(config::File::from(dir.join("default")).required(false))
            .add_source(config::File::from(dir.join(&run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::from(dir.join("local")).required(false))
            // Eg.. `VITRINE__SERVER__PORT=9000` sets `server.port`
            .add_source(
                config::Environment::with_prefix("VITRINE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        s.try_deserialize()
    }
}
