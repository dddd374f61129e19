//! Deposit address models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A business deposit address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Address ID
    pub id: Uuid,
    /// Owning business ID
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub business_id: Uuid,
    /// Currency, e.g. `BTC`
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub currency_id: String,
    /// Chain, e.g. `ETH`
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub chain: String,
    /// On-chain address
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub address: String,
    /// Memo/tag for chains that need one
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub memo: String,
    /// Label
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub label: String,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Request body for creating an address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRequest {
    /// Currency of the address, e.g. `USDT`
    pub currency_id: String,
    /// Chains to generate the address on, e.g. `["TRX", "ETH"]`
    pub chains: Vec<String>,
    /// Optional label
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,
}
