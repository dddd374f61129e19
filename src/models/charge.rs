//! Charge models.
//!
//! A charge is a single crypto payment request. Customers pay it at its
//! `hosted_url` using any of the supported assets.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    /// Charge ID
    pub id: Uuid,
    /// Owning business ID
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub business_id: Uuid,
    /// Owning business name
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub business_name: String,
    /// Charge reference
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub reference: String,
    /// Payment page URL
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub hosted_url: String,
    /// Whether the price is fixed
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub price_fixed: bool,
    /// Merchant-supplied metadata
    #[serde(default)]
    pub meta: Value,
    /// When the charge stops accepting payments
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    /// Status history
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub timeline: Vec<ChargeTimeline>,
    /// Assets the charge can be paid with
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub supported_assets: Vec<ChargeSupportedAsset>,
    /// Over/underpayment tolerance
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub payment_threshold: PaymentThreshold,
    /// Payments received
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub payments: Vec<ChargePayment>,
    /// Price in each supported currency
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub pricing: Vec<ChargePricing>,
    /// Deposit addresses
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub addresses: Vec<ChargeAddress>,
    /// Webhook callback URL
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub callback_url: String,
    /// Amount in the local currency
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub local_amount: Decimal,
    /// Local currency code, e.g. `NGN`
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub local_currency: String,
}

/// A deposit address attached to a charge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChargeAddress {
    /// Currency, e.g. `BTC`
    #[serde(deserialize_with = "super::null_as_default")]
    pub currency_id: String,
    /// Chain, e.g. `TRX`
    #[serde(deserialize_with = "super::null_as_default")]
    pub chain: String,
    /// On-chain address
    #[serde(deserialize_with = "super::null_as_default")]
    pub address: String,
    /// Memo/tag for chains that need one
    #[serde(deserialize_with = "super::null_as_default")]
    pub memo: String,
    /// Label
    #[serde(deserialize_with = "super::null_as_default")]
    pub label: String,
}

/// Charge price in one currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChargePricing {
    /// Currency, e.g. `USDT`
    #[serde(deserialize_with = "super::null_as_default")]
    pub currency_id: String,
    /// Amount in that currency
    #[serde(deserialize_with = "super::null_as_default")]
    pub amount: Decimal,
    /// Exchange rate used
    #[serde(deserialize_with = "super::null_as_default")]
    pub rate: Decimal,
    /// Whether this is the local currency
    #[serde(deserialize_with = "super::null_as_default")]
    pub is_local: bool,
}

/// A payment received against a charge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChargePayment {
    /// Chain the payment arrived on
    #[serde(deserialize_with = "super::null_as_default")]
    pub chain: String,
    /// Value in the local currency
    #[serde(deserialize_with = "super::null_as_default")]
    pub local_amount: Decimal,
    /// Local currency code
    #[serde(deserialize_with = "super::null_as_default")]
    pub local_currency: String,
    /// Crypto amount
    #[serde(deserialize_with = "super::null_as_default")]
    pub amount: Decimal,
    /// Crypto currency
    #[serde(deserialize_with = "super::null_as_default")]
    pub currency: String,
    /// Transaction ID
    #[serde(deserialize_with = "super::null_as_default")]
    pub transaction_id: String,
    /// On-chain transaction hash
    #[serde(deserialize_with = "super::null_as_default")]
    pub transaction_hash: String,
    /// Payment reference
    #[serde(deserialize_with = "super::null_as_default")]
    pub reference: String,
    /// Payment status
    #[serde(deserialize_with = "super::null_as_default")]
    pub status: String,
    /// Whether the payment was traded into the settlement currency
    #[serde(deserialize_with = "super::null_as_default")]
    pub traded: bool,
    /// Receiving address
    #[serde(deserialize_with = "super::null_as_default")]
    pub address: String,
    /// Confirmations seen
    #[serde(deserialize_with = "super::null_as_default")]
    pub confirmation: i64,
    /// Thresholds applied
    #[serde(deserialize_with = "super::null_as_default")]
    pub payment_threshold: Vec<PaymentThreshold>,
    /// Block explorer URL
    #[serde(deserialize_with = "super::null_as_default")]
    pub block_url: String,
    /// Whether the payment was an internal transfer
    #[serde(deserialize_with = "super::null_as_default")]
    pub internal: bool,
}

/// One status transition of a charge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChargeTimeline {
    /// Status entered, e.g. `NEW`, `PENDING`, `COMPLETED`
    #[serde(deserialize_with = "super::null_as_default")]
    pub status: String,
    /// Context, e.g. `UNDERPAID`
    #[serde(deserialize_with = "super::null_as_default")]
    pub context: String,
    /// When it happened
    pub created_at: Option<DateTime<Utc>>,
}

/// Over/underpayment tolerances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentThreshold {
    /// Absolute overpayment tolerance
    #[serde(deserialize_with = "super::null_as_default")]
    pub overpayment_absolute_threshold: Decimal,
    /// Relative overpayment tolerance
    #[serde(deserialize_with = "super::null_as_default")]
    pub overpayment_relative_threshold: Decimal,
    /// Absolute underpayment tolerance
    #[serde(deserialize_with = "super::null_as_default")]
    pub underpayment_absolute_threshold: Decimal,
    /// Relative underpayment tolerance
    #[serde(deserialize_with = "super::null_as_default")]
    pub underpayment_relative_threshold: Decimal,
}

/// An asset a charge can be paid with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChargeSupportedAsset {
    /// Currency, e.g. `ETH`
    #[serde(deserialize_with = "super::null_as_default")]
    pub currency_id: String,
    /// Chains accepted for it
    #[serde(deserialize_with = "super::null_as_default")]
    pub chains: Vec<String>,
    /// Display name
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
}

/// Request body for creating a charge.
///
/// # Example
///
/// ```
/// use busha_commerce::models::ChargeRequest;
/// use rust_decimal::Decimal;
///
/// let req = ChargeRequest::fixed(Decimal::new(5000, 0), "NGN")
///     .with_reference("order-1001");
/// assert!(req.fixed_price);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChargeRequest {
    /// Whether the price is fixed; fixed charges need amount and currency
    pub fixed_price: bool,
    /// Amount in the local currency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_amount: Option<Decimal>,
    /// Local currency code, e.g. `NGN`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_currency: Option<String>,
    /// Custom reference, 5 to 100 characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Free-form metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
    /// Redirect after successful payment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_redirect_url: Option<String>,
    /// Redirect after cancellation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel_redirect_url: Option<String>,
}

impl ChargeRequest {
    /// A fixed-price charge.
    pub fn fixed(amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            fixed_price: true,
            local_amount: Some(amount),
            local_currency: Some(currency.into()),
            ..Default::default()
        }
    }

    /// An open-amount charge; the customer decides how much to pay.
    pub fn open() -> Self {
        Self::default()
    }

    /// Set a custom reference.
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    /// Attach metadata.
    pub fn with_meta(mut self, meta: Value) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Set the redirect URLs.
    pub fn with_redirects(
        mut self,
        success: impl Into<String>,
        cancel: impl Into<String>,
    ) -> Self {
        self.success_redirect_url = Some(success.into());
        self.cancel_redirect_url = Some(cancel.into());
        self
    }
}
