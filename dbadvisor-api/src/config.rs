use config::{Config, ConfigError, Environment, File};
use dbadvisor_agent::advisor::provider::ProviderKind;
use dbadvisor_agent::AdvisorConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 8004

[cors]
allowed_origins = ["http://localhost:3000"]

[llm]
provider = "gemini"  # Options: gemini, openai
# model = "gemini-2.5-flash"
timeout_secs = 30
verify_on_startup = true

[api_keys]
# gemini_api_key = "your-gemini-key"
# openai_api_key = "your-openai-key"

[logging]
# directory = "~/.local/state/dbadvisor/logs"
"#;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub server: ServerConfig,
    pub cors: Option<CorsConfig>,
    #[serde(default)]
    pub llm: LlmConfig,
    pub api_keys: Option<ApiKeysConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LlmConfig {
    pub provider: ProviderKind,
    pub model: Option<String>,
    pub timeout_secs: u64,
    pub verify_on_startup: bool,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            model: None,
            timeout_secs: 30,
            verify_on_startup: true,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiKeysConfig {
    pub gemini_api_key: Option<String>,
    pub openai_api_key: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub directory: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8004,
            },
            cors: Some(CorsConfig {
                allowed_origins: vec!["http://localhost:3000".to_string()],
            }),
            llm: LlmConfig::default(),
            api_keys: None,
            logging: None,
        }
    }
}

impl ApiConfig {
    /// Load from `path`, or from the default location when `None`.
    ///
    /// The default file is written with commented defaults on first run.
    /// `DBADVISOR_*` environment variables override file values, with `__`
    /// separating sections (`DBADVISOR_SERVER__PORT=9000`).
    pub fn load(path: Option<&Path>) -> Result<(Self, PathBuf), ConfigError> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let config_path = get_config_path();
                write_default_config(&config_path)?;
                config_path
            }
        };

        let mut config = Self::from_file(&config_path)?;

        if let Some(directory) = config.logging.as_mut().and_then(|l| l.directory.as_mut()) {
            *directory = expand_tilde(directory);
        }

        Ok((config, config_path))
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path))
            .add_source(
                Environment::with_prefix("DBADVISOR")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    pub fn advisor_config(&self) -> AdvisorConfig {
        AdvisorConfig {
            timeout: Duration::from_secs(self.llm.timeout_secs),
            verify_on_startup: self.llm.verify_on_startup,
            ..Default::default()
        }
    }

    /// Credential for the configured provider as written in the file
    pub fn file_api_key(&self) -> Option<&str> {
        let keys = self.api_keys.as_ref()?;
        match self.llm.provider {
            ProviderKind::Gemini => keys.gemini_api_key.as_deref(),
            ProviderKind::OpenAI => keys.openai_api_key.as_deref(),
        }
    }

    pub fn allowed_origins(&self) -> &[String] {
        self.cors
            .as_ref()
            .map(|c| c.allowed_origins.as_slice())
            .unwrap_or_default()
    }

    pub fn log_directory(&self) -> Option<&Path> {
        self.logging.as_ref()?.directory.as_deref()
    }
}

fn write_default_config(config_path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::Message(format!("Failed to create config directory: {e}"))
        })?;
    }

    if !config_path.exists() {
        std::fs::write(config_path, DEFAULT_CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to write default config: {e}")))?;
    }

    Ok(())
}

fn expand_tilde(path: &Path) -> PathBuf {
    if path.starts_with("~") {
        if let Some(home) = home::home_dir() {
            let path_str = path.to_string_lossy();
            return PathBuf::from(path_str.replacen('~', &home.to_string_lossy(), 1));
        }
    }
    path.to_path_buf()
}

fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("dbadvisor/api.toml")
    } else {
        PathBuf::from("api.toml")
    }
}
