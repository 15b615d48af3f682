use super::{Report, Status};

const SERVICE: &str = "PROCESS";

/// Текстовый вывод плагина
pub struct TextFormatter;

impl TextFormatter {
    pub fn render(report: &Report) -> String {
        match report {
            Report::Evaluation { result, .. } => Self::status_line(report.status(), &Report::summary(result)),
            Report::Listing(entries) if entries.is_empty() => {
                Self::status_line(Status::Ok, "агент не вернул ни одного процесса")
            }
            Report::Listing(entries) => entries
                .iter()
                .map(|entry| format!("{}: {}", entry.name, entry.state))
                .collect::<Vec<_>>()
                .join("\n"),
            Report::Failure(message) => Self::status_line(Status::Unknown, message),
        }
    }

    fn status_line(status: Status, message: &str) -> String {
        // Перевод строки сломал бы однострочный вывод плагина
        let message = message.replace(['\n', '\r'], " ");
        format!("{} {} - {}", SERVICE, status.label(), message)
    }
}
