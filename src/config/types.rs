use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    /// Downstream address for outbound events. Unset means reply mode.
    #[serde(default)]
    pub sink: Option<String>,
    /// Target bucket for archived descriptions.
    #[serde(default)]
    pub bucket: Option<String>,
    /// Language code passed to the sentiment classifier.
    #[serde(default = "default_language")]
    pub language: String,
    /// Used to build the outbound event source.
    #[serde(default)]
    pub namespace: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Config {
    /// Sink address, ignoring an empty value.
    pub fn sink(&self) -> Option<&str> {
        self.sink.as_deref().filter(|s| !s.is_empty())
    }

    pub fn require_bucket(&self) -> crate::Result<&str> {
        self.bucket
            .as_deref()
            .filter(|b| !b.is_empty())
            .ok_or_else(|| crate::Error::config("BUCKET must be set"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            sink: None,
            bucket: None,
            language: default_language(),
            namespace: String::new(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_language() -> String {
    "en".to_string()
}
