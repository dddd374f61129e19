//! Checkout models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Pricing mode of a checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutType {
    /// Customer chooses the amount
    Donation,
    /// Amount set by the merchant
    #[default]
    FixedPrice,
}

/// A reusable checkout page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkout {
    /// Checkout ID
    pub id: Uuid,
    /// Owning business ID
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub business_id: String,
    /// Name shown to customers
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub name: String,
    /// Description shown to customers
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub description: String,
    /// Pricing mode
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub checkout_type: CheckoutType,
    /// Customer details requested, e.g. `["name", "email"]`
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub requested_info: Vec<String>,
    /// Amount in the local currency
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub local_amount: Decimal,
    /// Local currency code
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub local_currency: String,
    /// Whether the checkout accepts payments
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub active: bool,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Request body for creating or updating a checkout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// Name shown to customers
    pub name: String,
    /// Description shown to customers
    pub description: String,
    /// Pricing mode
    pub checkout_type: CheckoutType,
    /// Customer details requested, e.g. `["name", "email", "phone_number"]`
    pub requested_info: Vec<String>,
    /// Amount in the local currency
    pub local_amount: Decimal,
    /// Local currency code
    pub local_currency: String,
}
