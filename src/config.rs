//! Configuration management for Tariff Zones
//!
//! This module handles loading, validation, and management of the application
//! configuration from YAML files. The only environment override is the listen
//! address (`TARIFF_ZONES_ADDR`).

use crate::error::{Result, TariffError};
use crate::logging::parse_log_level;
use crate::tariff::Zone;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

mod defaults;

/// Environment variable overriding `web.host` and `web.port`
pub const LISTEN_ADDR_ENV: &str = "TARIFF_ZONES_ADDR";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Web server binding configuration
    pub web: WebConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Page rendering configuration
    pub display: DisplayConfig,
}

/// Web server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    /// Bind address
    pub host: String,

    /// TCP port
    pub port: u16,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    pub level: String,

    /// Optional console-specific level; falls back to `level`
    pub console_level: Option<String>,

    /// Optional file-specific level; falls back to `level`
    pub file_level: Option<String>,

    /// Log file path or directory; empty disables file logging
    pub file: String,

    /// Number of rotated files to keep
    pub backup_count: u32,

    /// Whether to log to console
    pub console_output: bool,

    /// Whether to use JSON format
    pub json_format: bool,
}

/// Language used for page text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Sl,
}

/// Colours for the five zones, as `#RRGGBB`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZonePalette {
    pub zone1: String,
    pub zone2: String,
    pub zone3: String,
    pub zone4: String,
    pub zone5: String,
}

impl ZonePalette {
    pub fn color(&self, zone: Zone) -> &str {
        match zone {
            Zone::One => &self.zone1,
            Zone::Two => &self.zone2,
            Zone::Three => &self.zone3,
            Zone::Four => &self.zone4,
            Zone::Five => &self.zone5,
        }
    }
}

/// Rendered page configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Page language
    pub language: Language,

    /// Seconds between live updates pushed to the page
    pub refresh_interval_secs: u64,

    /// Zone colours
    pub palette: ZonePalette,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load from the first default location that exists, else defaults
    pub fn load() -> Result<Self> {
        let default_paths = ["tariff_zones.yaml", "/etc/tariff-zones/config.yaml"];

        for path in &default_paths {
            if Path::new(path).exists() {
                return Self::from_file(path);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to a YAML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Apply `TARIFF_ZONES_ADDR` if set
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        match std::env::var(LISTEN_ADDR_ENV) {
            Ok(value) if !value.trim().is_empty() => self.apply_listen_addr(&value),
            _ => Ok(()),
        }
    }

    /// Override host and port from a `host:port` string
    pub fn apply_listen_addr(&mut self, value: &str) -> Result<()> {
        let value = value.trim();
        if let Ok(addr) = value.parse::<SocketAddr>() {
            self.web.host = addr.ip().to_string();
            self.web.port = addr.port();
            return Ok(());
        }
        let (host, port) = value.rsplit_once(':').ok_or_else(|| {
            TariffError::validation(LISTEN_ADDR_ENV, format!("Expected host:port, got '{value}'"))
        })?;
        let port = port.parse::<u16>().map_err(|_| {
            TariffError::validation(LISTEN_ADDR_ENV, format!("Invalid port '{port}'"))
        })?;
        self.web.host = host.to_string();
        self.web.port = port;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.web.host.trim().is_empty() {
            return Err(TariffError::validation(
                "web.host",
                "Host cannot be empty",
            ));
        }

        if self.web.port == 0 {
            return Err(TariffError::validation(
                "web.port",
                "Port must be greater than 0",
            ));
        }

        parse_log_level(&self.logging.level)
            .map_err(|e| TariffError::validation("logging.level", e.to_string()))?;
        if let Some(level) = &self.logging.console_level {
            parse_log_level(level)
                .map_err(|e| TariffError::validation("logging.console_level", e.to_string()))?;
        }
        if let Some(level) = &self.logging.file_level {
            parse_log_level(level)
                .map_err(|e| TariffError::validation("logging.file_level", e.to_string()))?;
        }

        if !(1..=3600).contains(&self.display.refresh_interval_secs) {
            return Err(TariffError::validation(
                "display.refresh_interval_secs",
                "Must be between 1 and 3600",
            ));
        }

        for zone in Zone::ALL {
            let color = self.display.palette.color(zone);
            if !is_hex_color(color) {
                return Err(TariffError::validation(
                    format!("display.palette.zone{zone}"),
                    format!("'{color}' is not a #RRGGBB colour"),
                ));
            }
        }

        Ok(())
    }
}

fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}
