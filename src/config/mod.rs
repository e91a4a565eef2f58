//! Configuration management
//!
//! This module provides YAML-based configuration management with support for:
//! - Environment variable overrides
//! - Multiple configuration file locations
//! - Default values for all settings
//! - Application mount paths and map widget defaults

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::utils::validation::validate_mount_path;

/// Main application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub app: AppSettings,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Number of tokio worker threads
    #[serde(default = "default_workers")]
    pub workers: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_workers() -> usize {
    num_cpus::get()
}

/// Authentication and session configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Secret used to sign session tokens
    pub jwt_secret: String,
    #[serde(default = "default_session_expiry")]
    pub session_expiry_hours: u64,
    #[serde(default = "default_password_min_length")]
    pub password_min_length: usize,
    /// Name of the session cookie
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Only send the session cookie over HTTPS
    #[serde(default)]
    pub cookie_secure: bool,
}

/// Longest accepted session lifetime (one year)
pub const MAX_SESSION_EXPIRY_HOURS: u64 = 24 * 365;

fn default_session_expiry() -> u64 {
    24
}

fn default_password_min_length() -> usize {
    6
}

fn default_cookie_name() -> String {
    "session".to_string()
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
}

fn default_max_connections() -> u32 {
    5
}

fn default_min_connections() -> u32 {
    1
}

fn default_connect_timeout() -> u64 {
    30
}

fn default_idle_timeout() -> u64 {
    600
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
    /// Log output target (console or file)
    #[serde(default = "default_log_target")]
    pub target: LogTarget,
    /// Directory for log files (used when target is "file")
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
    /// Log file name prefix
    #[serde(default = "default_log_prefix")]
    pub log_prefix: String,
    /// Enable daily log rotation
    #[serde(default = "default_log_rotation")]
    pub daily_rotation: bool,
}

/// Log output target
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogTarget {
    /// Log to console (stdout/stderr) - default for development
    #[default]
    Console,
    /// Log to file with optional rotation - recommended for production
    File,
    /// Log to both console and file
    Both,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
    Compact,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}

fn default_log_target() -> LogTarget {
    LogTarget::Console
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("./logs")
}

fn default_log_prefix() -> String {
    "my-first-app".to_string()
}

fn default_log_rotation() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            target: default_log_target(),
            log_dir: default_log_dir(),
            log_prefix: default_log_prefix(),
            daily_rotation: default_log_rotation(),
        }
    }
}

/// Application page settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppSettings {
    /// Title shown in the page header
    #[serde(default = "default_app_title")]
    pub title: String,
    /// Path under which the application pages are mounted
    #[serde(default = "default_root_url")]
    pub root_url: String,
    /// Login page path (unauthenticated users are redirected here)
    #[serde(default = "default_login_url")]
    pub login_url: String,
    #[serde(default = "default_logout_url")]
    pub logout_url: String,
    /// Seed the stream gage table on startup when it is empty
    #[serde(default = "default_seed_gages")]
    pub seed_gages: bool,
    #[serde(default)]
    pub map: MapSettings,
}

fn default_app_title() -> String {
    "My First App".to_string()
}

fn default_root_url() -> String {
    "/apps/my-first-app".to_string()
}

fn default_login_url() -> String {
    "/accounts/login/".to_string()
}

fn default_logout_url() -> String {
    "/accounts/logout/".to_string()
}

fn default_seed_gages() -> bool {
    true
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            title: default_app_title(),
            root_url: default_root_url(),
            login_url: default_login_url(),
            logout_url: default_logout_url(),
            seed_gages: default_seed_gages(),
            map: MapSettings::default(),
        }
    }
}

impl AppSettings {
    /// Build an absolute page path below the mount point
    ///
    /// `page("map/")` yields `/apps/my-first-app/map/`.
    pub fn page(&self, relative: &str) -> String {
        format!("{}/{}", self.root_url.trim_end_matches('/'), relative)
    }
}

/// Map widget defaults
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MapSettings {
    #[serde(default = "default_map_height")]
    pub height: String,
    #[serde(default = "default_map_width")]
    pub width: String,
    #[serde(default = "default_basemap")]
    pub basemap: String,
    /// Zoom level for the all-gages view
    #[serde(default = "default_overview_zoom")]
    pub overview_zoom: f64,
    /// Zoom level when a single gage is selected
    #[serde(default = "default_detail_zoom")]
    pub detail_zoom: f64,
}

fn default_map_height() -> String {
    "100%".to_string()
}

fn default_map_width() -> String {
    "100%".to_string()
}

fn default_basemap() -> String {
    "OpenStreetMap".to_string()
}

fn default_overview_zoom() -> f64 {
    12.0
}

fn default_detail_zoom() -> f64 {
    15.0
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            height: default_map_height(),
            width: default_map_width(),
            basemap: default_basemap(),
            overview_zoom: default_overview_zoom(),
            detail_zoom: default_detail_zoom(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: default_host(),
                port: default_port(),
                workers: default_workers(),
            },
            auth: AuthConfig {
                jwt_secret: "change-me-in-production-minimum-32-characters-long".to_string(),
                session_expiry_hours: default_session_expiry(),
                password_min_length: default_password_min_length(),
                cookie_name: default_cookie_name(),
                cookie_secure: false,
            },
            database: DatabaseConfig {
                url: "sqlite://./data/my-first-app.db?mode=rwc".to_string(),
                max_connections: default_max_connections(),
                min_connections: default_min_connections(),
                connect_timeout_secs: default_connect_timeout(),
                idle_timeout_secs: default_idle_timeout(),
            },
            logging: LoggingConfig::default(),
            app: AppSettings::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file (YAML)
    /// 3. Environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if it exists
        let _ = dotenvy::dotenv();

        let config_path = std::env::var("MY_FIRST_APP_CONFIG")
            .map(PathBuf::from)
            .ok()
            .or_else(Self::find_config_file);

        let mut config = match config_path {
            Some(ref path) if path.exists() => {
                eprintln!("[CONFIG] Loading configuration from: {:?}", path);
                Self::from_file(path)?
            }
            Some(ref path) => {
                eprintln!("[CONFIG] Config file not found: {:?}, using defaults", path);
                AppConfig::default()
            }
            None => {
                eprintln!("[CONFIG] No config file found, using defaults");
                AppConfig::default()
            }
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parse a YAML configuration file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        serde_norway::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Find the configuration file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let paths = [
            // Current directory
            PathBuf::from("config.yaml"),
            PathBuf::from("config/config.yaml"),
            // System config directory
            PathBuf::from("/etc/my-first-app/config.yaml"),
            // User config directory
            dirs::config_dir()
                .map(|p| p.join("my-first-app/config.yaml"))
                .unwrap_or_default(),
        ];

        paths.into_iter().find(|p| p.exists())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        // Server overrides
        if let Ok(host) = std::env::var("MY_FIRST_APP_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("MY_FIRST_APP_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        // Database overrides
        if let Ok(url) = std::env::var("DATABASE_URL") {
            self.database.url = url;
        }

        // Auth overrides
        if let Ok(secret) = std::env::var("JWT_SECRET") {
            self.auth.jwt_secret = secret;
        }

        // Logging overrides
        if let Ok(level) = std::env::var("RUST_LOG") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("MY_FIRST_APP_LOG_FORMAT") {
            self.logging.format = match format.to_lowercase().as_str() {
                "json" => LogFormat::Json,
                "compact" => LogFormat::Compact,
                _ => LogFormat::Pretty,
            };
        }

        // Mount point override
        if let Ok(root) = std::env::var("MY_FIRST_APP_ROOT_URL") {
            self.app.root_url = root;
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.auth.jwt_secret.len() < 32 {
            anyhow::bail!("JWT secret must be at least 32 characters long");
        }

        if !(1..=MAX_SESSION_EXPIRY_HOURS).contains(&self.auth.session_expiry_hours) {
            anyhow::bail!(
                "auth.session_expiry_hours must be between 1 and {}",
                MAX_SESSION_EXPIRY_HOURS
            );
        }

        if self.server.port == 0 {
            anyhow::bail!("Server port cannot be 0");
        }

        if self.server.workers == 0 {
            anyhow::bail!("Server workers must be at least 1");
        }

        if self.database.url.is_empty() {
            anyhow::bail!("Database URL cannot be empty");
        }

        for (name, path) in [
            ("root_url", &self.app.root_url),
            ("login_url", &self.app.login_url),
            ("logout_url", &self.app.logout_url),
        ] {
            if !validate_mount_path(path) {
                anyhow::bail!("Invalid app.{}: {:?} must be an absolute path", name, path);
            }
        }

        if self.app.root_url.trim_end_matches('/').is_empty() {
            anyhow::bail!("app.root_url cannot be the site root");
        }

        Ok(())
    }

    /// Create a default configuration file
    pub fn create_default_config(path: &PathBuf) -> Result<()> {
        let config = AppConfig::default();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_norway::to_string(&config)?;
        std::fs::write(path, yaml)?;

        Ok(())
    }
}
