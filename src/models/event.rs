//! Webhook event models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::charge::{ChargeAddress, ChargePayment, ChargePricing, ChargeTimeline};

/// An event recorded for a business resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Event ID
    pub id: String,
    /// Owning business ID
    #[serde(
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "super::null_as_default"
    )]
    pub business_id: String,
    /// Resource kind, e.g. `charge`
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub resource: String,
    /// When the event happened
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Snapshot of the resource
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub data: EventData,
}

/// Resource snapshot carried by an event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventData {
    /// Resource ID
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: Uuid,
    /// Owning business ID
    #[serde(deserialize_with = "super::null_as_default")]
    pub business_id: Uuid,
    /// Resource reference
    #[serde(deserialize_with = "super::null_as_default")]
    pub reference: String,
    /// Payment page URL
    #[serde(deserialize_with = "super::null_as_default")]
    pub hosted_url: String,
    /// Whether the price is fixed
    #[serde(deserialize_with = "super::null_as_default")]
    pub price_fixed: bool,
    /// Local currency code
    #[serde(deserialize_with = "super::null_as_default")]
    pub local_currency: String,
    /// Webhook callback URL
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "super::null_as_default")]
    pub callback_url: String,
    /// Merchant metadata
    pub meta: Value,
    /// Expiry time
    pub expires_at: Option<DateTime<Utc>>,
    /// Creation time
    pub created_at: Option<DateTime<Utc>>,
    /// Event type, e.g. `charge:confirmed`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    /// ID of the resource the event refers to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<Uuid>,
    /// Status history
    #[serde(deserialize_with = "super::null_as_default")]
    pub timeline: Vec<ChargeTimeline>,
    /// Deposit addresses
    #[serde(deserialize_with = "super::null_as_default")]
    pub addresses: Vec<ChargeAddress>,
    /// Payments received
    #[serde(deserialize_with = "super::null_as_default")]
    pub payments: Vec<ChargePayment>,
    /// Pricing
    #[serde(deserialize_with = "super::null_as_default")]
    pub pricing: Vec<ChargePricing>,
}
