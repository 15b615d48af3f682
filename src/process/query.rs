use serde::Serialize;
use std::collections::BTreeMap;

use super::state::ProcessState;
use super::table::ProcessTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Passing,
    Failing,
}

/// Итог проверки: вердикт и имена, сгруппированные по состоянию
#[derive(Debug, Clone)]
pub struct QueryResult {
    pub verdict: Verdict,
    pub groups: BTreeMap<ProcessState, Vec<String>>,
}

/// Раскрывает "a,b" в ["a", "b"], если включён --comma-separated
pub fn expand_names(args: &[String], comma_separated: bool) -> Vec<String> {
    if !comma_separated {
        return args.to_vec();
    }

    args.iter()
        .flat_map(|arg| arg.split(','))
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Одно несовпадение с ожидаемым состоянием делает вердикт Failing.
/// Повторы не схлопываются: каждый запрос попадает в отчёт.
pub fn evaluate(table: &ProcessTable<'_>, requested: &[String], want: ProcessState) -> QueryResult {
    let mut verdict = Verdict::Passing;
    let mut groups: BTreeMap<ProcessState, Vec<String>> = BTreeMap::new();

    for token in requested {
        let state = table.classify(token);
        if state != want {
            verdict = Verdict::Failing;
        }

        let name = match table.resolve(token) {
            Some((canonical, _)) => canonical.to_string(),
            None => token.clone(),
        };
        groups.entry(state).or_default().push(name);
    }

    QueryResult { verdict, groups }
}
