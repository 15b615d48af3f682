use serde::Serialize;

use super::{Report, Status};
use crate::process::{ListEntry, ProcessState};

/// JSON структура для систем, которые не разбирают текстовый вывод
#[derive(Debug, Clone, Serialize)]
pub struct ReportJson<'a> {
    pub status: Status,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<ProcessState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<GroupJson<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processes: Option<&'a [ListEntry]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'a str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupJson<'a> {
    pub state: ProcessState,
    pub processes: &'a [String],
}

/// JSON форматтер результата проверки
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn format_report(report: &Report) -> ReportJson<'_> {
        let mut json = ReportJson {
            status: report.status(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            expected: None,
            summary: None,
            groups: None,
            processes: None,
            error: None,
        };

        match report {
            Report::Evaluation { expected, result } => {
                json.expected = Some(*expected);
                json.summary = Some(Report::summary(result));
                json.groups = Some(
                    result
                        .groups
                        .iter()
                        .map(|(state, names)| GroupJson {
                            state: *state,
                            processes: names,
                        })
                        .collect(),
                );
            }
            Report::Listing(entries) => json.processes = Some(entries.as_slice()),
            Report::Failure(message) => json.error = Some(message.as_str()),
        }

        json
    }

    /// Компактный JSON, одной строкой
    pub fn render(report: &Report) -> anyhow::Result<String> {
        serde_json::to_string(&Self::format_report(report))
            .map_err(|e| anyhow::anyhow!("Ошибка сериализации в JSON: {}", e))
    }
}
