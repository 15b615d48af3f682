use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::snmp::RawValue;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("неизвестное состояние '{0}' (допустимо: unknown, invalid, not-runnable, runnable, running)")]
pub struct ParseStateError(pub String);

/// Состояние процесса. Дискриминант = порядок сортировки в отчёте.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProcessState {
    Unknown = 0,
    Invalid = 1,
    NotRunnable = 2,
    Runnable = 3,
    Running = 4,
}

impl ProcessState {
    pub fn label(self) -> &'static str {
        match self {
            ProcessState::Unknown => "Unknown",
            ProcessState::Invalid => "Invalid",
            ProcessState::NotRunnable => "Not Runnable",
            ProcessState::Runnable => "Runnable",
            ProcessState::Running => "Running",
        }
    }

    /// hrSWRunStatus: running(1), runnable(2), notRunnable(3), invalid(4).
    /// Порядок в MIB обратный нашему, поэтому только явная таблица.
    /// Всё, что не 1..=4 (или отсутствует), это Unknown.
    pub fn from_raw_status(value: Option<&RawValue>) -> Self {
        match value.and_then(RawValue::as_integer) {
            Some(1) => ProcessState::Running,
            Some(2) => ProcessState::Runnable,
            Some(3) => ProcessState::NotRunnable,
            Some(4) => ProcessState::Invalid,
            _ => ProcessState::Unknown,
        }
    }
}

impl fmt::Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ProcessState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// "not-runnable", "Not Runnable", "NOT_RUNNABLE" -> NotRunnable
impl FromStr for ProcessState {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        match normalized.as_str() {
            "unknown" => Ok(ProcessState::Unknown),
            "invalid" => Ok(ProcessState::Invalid),
            "not runnable" => Ok(ProcessState::NotRunnable),
            "runnable" => Ok(ProcessState::Runnable),
            "running" => Ok(ProcessState::Running),
            _ => Err(ParseStateError(s.to_string())),
        }
    }
}
