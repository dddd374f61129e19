//! Payment link models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Pricing mode of a payment link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentLinkType {
    /// Customer chooses the amount
    Donation,
    /// Amount set by the merchant
    #[default]
    FixedPrice,
}

/// A shareable payment link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentLink {
    /// Payment link ID
    pub id: Uuid,
    /// Owning business ID
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub business_id: String,
    /// Name
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub name: String,
    /// Description
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub description: String,
    /// Pricing mode
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub payment_link_type: PaymentLinkType,
    /// Customer details requested
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub requested_info: Vec<String>,
    /// Amount in the local currency
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub local_amount: Decimal,
    /// Local currency code
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub local_currency: String,
    /// Whether the link accepts payments
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub active: bool,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Request body for creating or updating a payment link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentLinkRequest {
    /// Name
    pub name: String,
    /// Description
    pub description: String,
    /// Pricing mode
    pub payment_link_type: PaymentLinkType,
    /// Customer details requested
    pub requested_info: Vec<String>,
    /// Amount in the local currency
    pub local_amount: Decimal,
    /// Local currency code
    pub local_currency: String,
}
