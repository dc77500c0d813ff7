use contracts::shell::metadata::Verification;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory with favicons, social images, hero image and the client bundle.
    pub public_dir: String,
    /// Module script that boots the client; omitted → server-rendered shell only.
    #[serde(default)]
    pub client_entry: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SiteConfig {
    /// Search-engine ownership tokens.
    #[serde(default)]
    pub verification: Verification,
}

/// Environment variable overriding `server.port`.
pub const PORT_ENV: &str = "PORT";

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
public_dir = "public"
client_entry = "/pkg/frontend.js"

[site.verification]
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = read_config()?;
    if let Some(port) = port_override(std::env::var(PORT_ENV).ok().as_deref()) {
        tracing::info!("Port overridden by {}: {}", PORT_ENV, port);
        config.server.port = port;
    }
    Ok(config)
}

fn read_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str(contents)?)
}

fn port_override(raw: Option<&str>) -> Option<u16> {
    raw.and_then(|value| value.trim().parse().ok())
}

/// Get the public asset directory from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_public_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.server.public_dir);

    if dir.is_absolute() {
        return dir.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(dir);
        }
    }

    PathBuf::from(&config.server.public_dir)
}
