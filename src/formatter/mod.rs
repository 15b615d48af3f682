use serde::Serialize;

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::process::{ListEntry, ProcessState, QueryResult, Verdict};

/// Статус плагина мониторинга (Nagios-совместимые коды выхода)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Ok,
    #[allow(dead_code)]
    Warning,
    Critical,
    Unknown,
}

impl Status {
    pub fn exit_code(self) -> i32 {
        match self {
            Status::Ok => 0,
            Status::Warning => 1,
            Status::Critical => 2,
            Status::Unknown => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Warning => "WARNING",
            Status::Critical => "CRITICAL",
            Status::Unknown => "UNKNOWN",
        }
    }
}

impl From<Verdict> for Status {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Passing => Status::Ok,
            Verdict::Failing => Status::Critical,
        }
    }
}

/// Что печатаем по итогам запуска
#[derive(Debug, Clone)]
pub enum Report {
    Evaluation {
        expected: ProcessState,
        result: QueryResult,
    },
    Listing(Vec<ListEntry>),
    /// Ошибка ввода или транспорта
    Failure(String),
}

impl Report {
    pub fn status(&self) -> Status {
        match self {
            Report::Evaluation { result, .. } => Status::from(result.verdict),
            Report::Listing(_) => Status::Ok,
            Report::Failure(_) => Status::Unknown,
        }
    }

    /// "Unknown: gamma; Running: alpha", группы по возрастанию серьёзности
    pub fn summary(result: &QueryResult) -> String {
        result
            .groups
            .iter()
            .map(|(state, names)| format!("{}: {}", state, names.join(", ")))
            .collect::<Vec<_>>()
            .join("; ")
    }
}
