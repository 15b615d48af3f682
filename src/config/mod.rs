use anyhow::Result;
use std::env;
use tracing::{debug, warn};

pub mod settings;

pub use settings::Settings;

use crate::cli::Args;
use crate::snmp::SnmpVersion;

/// Итоговая конфигурация запуска.
/// Приоритет: флаг CLI > переменная окружения > YAML (--config) > значения по умолчанию.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub settings: Settings,
}

impl AppConfig {
    pub fn from_args(args: &Args) -> Result<Self> {
        Self::resolve(args, |key| env::var(key).ok())
    }

    /// `lookup` подменяет окружение (в тестах)
    pub fn resolve(args: &Args, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut settings = match &args.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };

        if let Some(community) = lookup("SNMP_COMMUNITY") {
            settings.auth.community = community;
        }
        if let Some(version) = lookup("SNMP_VERSION") {
            settings.auth.version = version.parse::<SnmpVersion>()?;
        }
        if let Some(raw) = lookup("SNMP_TIMEOUT") {
            match raw.parse() {
                Ok(timeout) => settings.connection.timeout = timeout,
                Err(_) => warn!(value = %raw, "SNMP_TIMEOUT не число, игнорируем"),
            }
        }
        if let Some(raw) = lookup("SNMP_PORT") {
            match raw.parse() {
                Ok(port) => settings.connection.port = port,
                Err(_) => warn!(value = %raw, "SNMP_PORT не число, игнорируем"),
            }
        }

        if let Some(community) = &args.community {
            settings.auth.community = community.clone();
        }
        if let Some(version) = args.snmp_version {
            settings.auth.version = version;
        }
        if let Some(timeout) = args.timeout {
            settings.connection.timeout = timeout;
        }
        if let Some(port) = args.port {
            settings.connection.port = port;
        }

        let host = args.host.trim().to_string();
        if host.is_empty() {
            anyhow::bail!("Не указан хост (-H)");
        }
        if settings.connection.timeout == 0 {
            anyhow::bail!("Таймаут должен быть больше нуля");
        }

        let config = Self { host, settings };
        debug!(
            host = %config.host,
            port = config.port(),
            version = %config.version(),
            timeout = config.timeout(),
            "конфигурация"
        );
        Ok(config)
    }

    pub fn timeout(&self) -> u64 {
        self.settings.connection.timeout
    }

    pub fn port(&self) -> u16 {
        self.settings.connection.port
    }

    pub fn version(&self) -> SnmpVersion {
        self.settings.auth.version
    }

    pub fn community(&self) -> Vec<u8> {
        self.settings.auth.community.clone().into_bytes()
    }
}
