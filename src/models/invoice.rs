//! Invoice models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An invoice sent to a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Invoice ID
    pub id: Uuid,
    /// Owning business ID
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub business_id: Uuid,
    /// Invoice name
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub name: String,
    /// Description
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub description: String,
    /// Customer name
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub customer_name: String,
    /// Customer email
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub customer_email: String,
    /// Amount in the local currency
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub local_amount: Decimal,
    /// Local currency code
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub local_currency: String,
    /// Invoice status
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub status: String,
    /// Invoice reference
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub reference: String,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Date after which the invoice is void
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
}

/// Request body for creating an invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRequest {
    /// Invoice name
    pub name: String,
    /// Customer email
    pub customer_email: String,
    /// Amount in the local currency
    pub local_amount: Decimal,
    /// Local currency code
    pub local_currency: String,
    /// Customer name
    pub customer_name: String,
    /// Description
    pub description: String,
    /// Date after which the invoice is void
    pub due_date: Option<DateTime<Utc>>,
}
