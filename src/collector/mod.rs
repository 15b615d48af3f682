use anyhow::{Context, Result};
use tokio::time::{Duration, timeout};
use tracing::{info, warn};

pub mod types;

pub use types::RawTable;

use crate::config::AppConfig;
use crate::snmp::{create_client, format_target, parse_oid};

/// Коллектор таблицы процессов: одна сессия, один walk, один общий таймаут
pub struct TableCollector;

impl TableCollector {
    /// Забирает поддерево `table_oid` целиком. Частичных результатов нет:
    /// таймаут или ошибка транспорта возвращаются как Err.
    pub async fn fetch_table(config: &AppConfig, table_oid: &str) -> Result<RawTable> {
        let root_oid = parse_oid(table_oid)?;
        let target = format_target(&config.host, config.port());
        let timeout_duration = Duration::from_secs(config.timeout());

        let work = async {
            let mut client = create_client(&target, &config.community(), config.version())
                .await
                .with_context(|| format!("Не удалось подключиться к {}", target))?;
            client.walk(&root_oid).await
        };

        let rows = match timeout(timeout_duration, work).await {
            Ok(Ok(rows)) => rows,
            Ok(Err(e)) => return Err(e.context(format!("SNMP walk {} на {} не удался", table_oid, target))),
            Err(_) => anyhow::bail!(
                "Таймаут {}с при опросе {} ({})",
                config.timeout(),
                target,
                table_oid
            ),
        };

        let table: RawTable = rows
            .into_iter()
            .map(|(oid, value)| (oid.to_string(), value))
            .collect();

        if table.is_empty() {
            warn!(addr = %target, oid = table_oid, "агент вернул пустую таблицу");
        } else {
            info!(addr = %target, rows = table.len(), "таблица получена");
        }

        Ok(table)
    }
}
