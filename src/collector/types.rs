use std::collections::HashMap;

use crate::snmp::RawValue;

/// Плоский результат walk: "<base>.<column>.<row>" -> значение, в порядке обхода
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    entries: Vec<(String, RawValue)>,
    index: HashMap<String, usize>,
}

impl RawTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Повторный OID заменяет значение, но сохраняет исходную позицию
    pub fn insert(&mut self, oid: String, value: RawValue) {
        match self.index.get(&oid) {
            Some(&pos) => self.entries[pos].1 = value,
            None => {
                self.index.insert(oid.clone(), self.entries.len());
                self.entries.push((oid, value));
            }
        }
    }

    pub fn get(&self, oid: &str) -> Option<&RawValue> {
        self.index.get(oid).map(|&pos| &self.entries[pos].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.entries.iter().map(|(oid, value)| (oid.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, RawValue)> for RawTable {
    fn from_iter<I: IntoIterator<Item = (String, RawValue)>>(iter: I) -> Self {
        let mut table = RawTable::new();
        for (oid, value) in iter {
            table.insert(oid, value);
        }
        table
    }
}
