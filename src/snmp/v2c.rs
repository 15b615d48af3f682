use anyhow::{Context, Result};
use snmp2::{AsyncSession, Oid, Value};
use tracing::debug;

use super::value::RawValue;

/// Сколько строк запрашивать за один GETBULK
const MAX_REPETITIONS: u32 = 10;

pub struct SnmpClientV2c {
    pub(crate) session: AsyncSession,
}

impl SnmpClientV2c {
    pub async fn new(target: &str, community: &[u8]) -> Result<Self> {
        let session = AsyncSession::new_v2c(target, community, 2)
            .await
            .context("Не удалось создать SNMP сессию")?;

        Ok(Self { session })
    }

    pub async fn walk(&mut self, start_oid: &Oid<'_>) -> Result<Vec<(Oid<'static>, RawValue)>> {
        self.walk_bulk(start_oid, MAX_REPETITIONS).await
    }

    pub async fn walk_bulk(
        &mut self,
        start_oid: &Oid<'_>,
        max_repetitions: u32,
    ) -> Result<Vec<(Oid<'static>, RawValue)>> {
        let mut results: Vec<(Oid<'static>, RawValue)> = Vec::new();
        let mut current_oid = start_oid.to_owned();

        loop {
            let resp = self
                .session
                .getbulk(&[&current_oid], 0, max_repetitions)
                .await
                .context("SNMP GETBULK запрос не удался")?;

            let mut advanced = false;

            for (oid, value) in resp.varbinds {
                if !oid.starts_with(start_oid) || matches!(value, Value::EndOfMibView) {
                    debug!(rows = results.len(), "walk завершён");
                    return Ok(results);
                }

                // Агент, который не двигается вперёд, иначе зациклит walk
                if oid.to_string() == current_oid.to_string() {
                    return Ok(results);
                }

                results.push((oid.to_owned(), RawValue::from(&value)));
                current_oid = oid.to_owned();
                advanced = true;
            }

            if !advanced {
                break;
            }
        }

        Ok(results)
    }
}
