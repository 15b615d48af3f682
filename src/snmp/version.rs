use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnmpVersionError {
    #[error("SNMPv3 не поддерживается, используйте 1 или 2c")]
    V3Unsupported,
    #[error("неизвестная версия SNMP '{0}' (ожидается 1 или 2c)")]
    Unknown(String),
}

/// Версия протокола для сессии
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnmpVersion {
    #[default]
    V1,
    V2c,
}

impl FromStr for SnmpVersion {
    type Err = SnmpVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "v1" => Ok(SnmpVersion::V1),
            "2" | "2c" | "v2" | "v2c" => Ok(SnmpVersion::V2c),
            "3" | "v3" => Err(SnmpVersionError::V3Unsupported),
            other => Err(SnmpVersionError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for SnmpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnmpVersion::V1 => f.write_str("1"),
            SnmpVersion::V2c => f.write_str("2c"),
        }
    }
}

// В YAML версия бывает и числом (`version: 1`), и строкой (`version: 2c`)
impl<'de> Deserialize<'de> for SnmpVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Num(u64),
            Str(String),
        }

        let raw = match Repr::deserialize(deserializer)? {
            Repr::Num(n) => n.to_string(),
            Repr::Str(s) => s,
        };
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl Serialize for SnmpVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}
