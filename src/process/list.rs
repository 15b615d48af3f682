use serde::Serialize;

use super::state::ProcessState;
use super::table::ProcessTable;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    pub name: String,
    pub state: ProcessState,
}

/// Все процессы таблицы, по имени (побайтово, с учётом регистра)
pub fn list(table: &ProcessTable<'_>) -> Vec<ListEntry> {
    let mut names: Vec<&str> = table.names().collect();
    names.sort_unstable();

    names
        .into_iter()
        .map(|name| ListEntry {
            name: name.to_string(),
            state: table.classify(name),
        })
        .collect()
}
