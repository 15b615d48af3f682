use std::collections::HashMap;
use tracing::{debug, warn};

use super::state::ProcessState;
use crate::collector::RawTable;

/// hrSWRunEntry (HOST-RESOURCES-MIB)
pub const HR_SW_RUN_ENTRY: &str = "1.3.6.1.2.1.25.4.2.1";
/// hrSWRunName
const NAME_COLUMN: u32 = 2;
/// hrSWRunStatus
const STATUS_COLUMN: u32 = 7;

/// Таблица процессов: имя -> индекс строки, поверх исходного walk
#[derive(Debug)]
pub struct ProcessTable<'a> {
    raw: &'a RawTable,
    rows: HashMap<String, String>,
}

impl<'a> ProcessTable<'a> {
    /// Собирает имена из колонки hrSWRunName. Пустые имена пропускаются.
    /// При повторе имени остаётся строка, встреченная последней в порядке walk.
    pub fn reconstruct(raw: &'a RawTable) -> Self {
        let prefix = format!("{}.{}.", HR_SW_RUN_ENTRY, NAME_COLUMN);
        let mut rows: HashMap<String, String> = HashMap::new();

        for (oid, value) in raw.iter() {
            let Some(row) = oid.strip_prefix(&prefix) else {
                continue;
            };
            if row.is_empty() || value.is_empty() {
                continue;
            }

            let name = value.to_string();
            if let Some(previous) = rows.insert(name.clone(), row.to_string()) {
                warn!(
                    process = %name,
                    dropped_row = %previous,
                    kept_row = %row,
                    "несколько строк с одинаковым именем процесса, берём последнюю"
                );
            }
        }

        debug!(processes = rows.len(), "таблица процессов восстановлена");
        Self { raw, rows }
    }

    /// Имя в том виде, в каком оно хранится в таблице, и индекс его строки
    pub fn resolve(&self, name: &str) -> Option<(&str, &str)> {
        self.rows
            .get_key_value(name)
            .map(|(name, row)| (name.as_str(), row.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Никогда не падает: нет имени, нет статуса или мусор в статусе дают Unknown
    pub fn classify(&self, name: &str) -> ProcessState {
        let Some((_, row)) = self.resolve(name) else {
            return ProcessState::Unknown;
        };

        let status_oid = format!("{}.{}.{}", HR_SW_RUN_ENTRY, STATUS_COLUMN, row);
        ProcessState::from_raw_status(self.raw.get(&status_oid))
    }
}
