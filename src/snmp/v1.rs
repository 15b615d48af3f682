use anyhow::{Context, Result};
use snmp2::{AsyncSession, Oid, Value};
use tracing::debug;

use super::value::RawValue;

/// error-status noSuchName: в SNMPv1 так агент сообщает о конце MIB
const NO_SUCH_NAME: u32 = 2;

pub struct SnmpClientV1 {
    pub(crate) session: AsyncSession,
}

impl SnmpClientV1 {
    pub async fn new(target: &str, community: &[u8]) -> Result<Self> {
        let session = AsyncSession::new_v1(target, community, 2)
            .await
            .context("Не удалось создать SNMP сессию")?;

        Ok(Self { session })
    }

    /// Walk через последовательные GETNEXT (GETBULK в v1 нет)
    pub async fn walk(&mut self, start_oid: &Oid<'_>) -> Result<Vec<(Oid<'static>, RawValue)>> {
        let mut results: Vec<(Oid<'static>, RawValue)> = Vec::new();
        let mut current_oid = start_oid.to_owned();

        loop {
            let resp = self
                .session
                .getnext(&current_oid)
                .await
                .context("SNMP GETNEXT запрос не удался")?;

            if resp.error_status == NO_SUCH_NAME {
                break;
            }
            if resp.error_status != 0 {
                anyhow::bail!("SNMP агент вернул error-status {}", resp.error_status);
            }

            let Some((oid, value)) = resp.varbinds.into_iter().next() else {
                break;
            };

            if !oid.starts_with(start_oid) || matches!(value, Value::EndOfMibView) {
                break;
            }
            if oid.to_string() == current_oid.to_string() {
                break;
            }

            results.push((oid.to_owned(), RawValue::from(&value)));
            current_oid = oid.to_owned();
        }

        debug!(rows = results.len(), "walk завершён");
        Ok(results)
    }
}
