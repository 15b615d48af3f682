use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::snmp::SnmpVersion;

/// Базовые настройки подключения
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Настройки подключения
    pub connection: ConnectionSettings,
    /// Настройки аутентификации
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionSettings {
    /// Таймаут на весь опрос (секунды)
    pub timeout: u64,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthSettings {
    pub community: String,
    pub version: SnmpVersion,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            timeout: 30,
            port: 161,
        }
    }
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            community: "public".to_string(),
            version: SnmpVersion::V1,
        }
    }
}

impl Settings {
    /// Читает настройки из YAML; отсутствующие поля берутся по умолчанию
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .context(format!("Не удалось прочитать файл: {}", path.display()))?;

        let settings: Settings = serde_yml::from_str(&content)
            .context(format!("Не удалось распарсить YAML: {}", path.display()))?;

        Ok(settings)
    }
}
