use anyhow::Result;
use snmp2::Oid;
use tracing::debug;

pub mod clients_enum;
pub mod oid;
pub mod v1;
pub mod v2c;
pub mod value;
pub mod version;

pub use clients_enum::SnmpClient;
pub use oid::{format_target, parse_oid};
pub use v1::SnmpClientV1;
pub use v2c::SnmpClientV2c;
pub use value::RawValue;
pub use version::SnmpVersion;

impl SnmpClient {
    pub async fn walk(&mut self, root_oid: &Oid<'_>) -> Result<Vec<(Oid<'static>, RawValue)>> {
        match self {
            SnmpClient::V1(client) => client.walk(root_oid).await,
            SnmpClient::V2c(client) => client.walk(root_oid).await,
        }
    }
}

/// Создаёт клиента нужной версии
pub async fn create_client(
    target: &str,
    community: &[u8],
    version: SnmpVersion,
) -> Result<SnmpClient> {
    debug!(addr = target, %version, "создаём SNMP сессию");
    match version {
        SnmpVersion::V1 => Ok(SnmpClient::V1(SnmpClientV1::new(target, community).await?)),
        SnmpVersion::V2c => Ok(SnmpClient::V2c(SnmpClientV2c::new(target, community).await?)),
    }
}
