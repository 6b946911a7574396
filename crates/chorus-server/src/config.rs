//! Server configuration loading from file and environment variables.

use chorus_provision::{LlmSettings, ProvisionConfig, TtsSettings};
use serde::Deserialize;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr};
use thiserror::Error;

/// Top-level gateway configuration.
///
/// Loaded once at startup into an immutable value and passed into every
/// component; nothing downstream reads ambient process state.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Server network settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Identity-provider app credentials used by the token signer.
    #[serde(default)]
    pub rtc: RtcConfig,

    /// Upstream provisioning service settings.
    #[serde(default)]
    pub provision: ProvisionConfig,

    /// LLM backend settings.
    #[serde(default)]
    pub llm: LlmSettings,

    /// TTS vendor selection and per-vendor fields.
    #[serde(default)]
    pub tts: TtsSettings,
}

/// Network configuration for the HTTP server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "chorus_server=debug,info").
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to output logs in JSON format.
    #[serde(default)]
    pub json: bool,
}

/// App id and certificate for the channel identity provider.
#[derive(Clone, Default, Deserialize)]
pub struct RtcConfig {
    #[serde(default)]
    pub app_id: String,
    #[serde(default)]
    pub app_certificate: String,
}

impl fmt::Debug for RtcConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RtcConfig")
            .field("app_id", &self.app_id)
            .field("app_certificate", &"[REDACTED]")
            .finish()
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1))
}

fn default_port() -> u16 {
    3030
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Loads configuration from a TOML file, falling back to defaults.
///
/// Environment variable overrides:
/// - `CHORUS_HOST` / `CHORUS_PORT` override `server.host` / `server.port`
/// - `CHORUS_LOG_LEVEL` / `CHORUS_LOG_JSON` override the `logging` section
/// - `CHORUS_APP_ID` / `CHORUS_APP_CERTIFICATE` override the `rtc` section
/// - `CHORUS_PROVISION_BASE_URL`, `CHORUS_CUSTOMER_ID`,
///   `CHORUS_CUSTOMER_SECRET`, `CHORUS_AGENT_UID` override `provision`
/// - `CHORUS_LLM_URL`, `CHORUS_LLM_API_KEY`, `CHORUS_LLM_MODEL` override `llm`
/// - `CHORUS_TTS_VENDOR` overrides `tts.vendor`
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(contents) => toml::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = p, "config file not found, using defaults");
                Config::default()
            }
            Err(e) => return Err(ConfigError::FileRead(e)),
        },
        None => Config::default(),
    };

    // Environment variable overrides
    if let Ok(host) = std::env::var("CHORUS_HOST") {
        if let Ok(parsed) = host.parse() {
            config.server.host = parsed;
        }
    }
    if let Ok(port) = std::env::var("CHORUS_PORT") {
        if let Ok(parsed) = port.parse() {
            config.server.port = parsed;
        }
    }
    if let Ok(level) = std::env::var("CHORUS_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Ok(json) = std::env::var("CHORUS_LOG_JSON") {
        config.logging.json = json == "true" || json == "1";
    }
    if let Ok(app_id) = std::env::var("CHORUS_APP_ID") {
        config.rtc.app_id = app_id;
    }
    if let Ok(cert) = std::env::var("CHORUS_APP_CERTIFICATE") {
        config.rtc.app_certificate = cert;
    }
    if let Ok(base_url) = std::env::var("CHORUS_PROVISION_BASE_URL") {
        config.provision.base_url = base_url;
    }
    if let Ok(customer_id) = std::env::var("CHORUS_CUSTOMER_ID") {
        config.provision.customer_id = customer_id;
    }
    if let Ok(customer_secret) = std::env::var("CHORUS_CUSTOMER_SECRET") {
        config.provision.customer_secret = customer_secret;
    }
    if let Ok(agent_uid) = std::env::var("CHORUS_AGENT_UID") {
        config.provision.agent_uid = agent_uid;
    }
    if let Ok(url) = std::env::var("CHORUS_LLM_URL") {
        config.llm.url = url;
    }
    if let Ok(api_key) = std::env::var("CHORUS_LLM_API_KEY") {
        config.llm.api_key = api_key;
    }
    if let Ok(model) = std::env::var("CHORUS_LLM_MODEL") {
        config.llm.model = model;
    }
    if let Ok(vendor) = std::env::var("CHORUS_TTS_VENDOR") {
        config.tts.vendor = vendor;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_a_file() {
        let config = load_config(None).unwrap();
        assert_eq!(config.server.port, 3030);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.provision.agent_uid, "Agent");
        assert!(config.rtc.app_id.is_empty());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load_config(Some("/nonexistent/chorus.toml")).unwrap();
        assert_eq!(config.server.port, 3030);
    }

    #[test]
    fn toml_sections_parse() {
        let raw = r#"
            [server]
            port = 8080

            [rtc]
            app_id = "app-1"
            app_certificate = "cert-1"

            [provision]
            base_url = "https://api.example.com/v1/projects"
            customer_id = "cust"
            customer_secret = "sec"

            [llm]
            url = "https://llm.example/v1/chat"
            api_key = "sk-test"
            model = "gpt-4o-mini"

            [tts]
            vendor = "elevenlabs"

            [tts.elevenlabs]
            key = "k"
            voice_id = "v"
            model_id = "m"
        "#;

        let config: Config = toml::from_str(raw).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.rtc.app_id, "app-1");
        assert_eq!(config.provision.customer_id, "cust");
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.tts.vendor, "elevenlabs");
        assert_eq!(config.tts.elevenlabs.voice_id.as_deref(), Some("v"));
        // Unselected vendor table stays absent without error.
        assert!(config.tts.microsoft.key.is_none());
    }

    #[test]
    fn config_file_is_loaded_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[server]\nport = 4040\n\n[tts]\nvendor = \"microsoft\"\n",
        )
        .unwrap();

        let config = load_config(path.to_str()).unwrap();
        assert_eq!(config.server.port, 4040);
        assert_eq!(config.tts.vendor, "microsoft");
    }

    #[test]
    fn unreadable_file_contents_are_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "server = not valid toml [").unwrap();

        assert!(matches!(
            load_config(path.to_str()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn debug_output_redacts_app_certificate() {
        let config: Config = toml::from_str(
            r#"
            [rtc]
            app_id = "app-1"
            app_certificate = "c3rt-value"
        "#,
        )
        .unwrap();
        let rendered = format!("{:?}", config.rtc);
        assert!(!rendered.contains("c3rt-value"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
