//! Data models for the Busha Commerce API.
//!
//! Models are organized by domain:
//!
//! - [`primitives`] - `SecretKey` and `Environment`
//! - [`envelope`] - response envelopes and pagination metadata
//! - [`charge`] - charges and their request body
//! - [`checkout`] - checkouts
//! - [`invoice`] - invoices
//! - [`payment_link`] - payment links
//! - [`address`] - deposit addresses
//! - [`event`] - webhook events

pub mod address;
pub mod charge;
pub mod checkout;
pub mod envelope;
pub mod event;
pub mod invoice;
pub mod payment_link;
pub mod primitives;

// Re-export commonly used types
pub use address::*;
pub use charge::*;
pub use checkout::*;
pub use envelope::*;
pub use event::*;
pub use invoice::*;
pub use payment_link::*;
pub use primitives::*;

use serde::{Deserialize, Deserializer};

/// Deserialize an explicit JSON `null` as the type's default value.
///
/// `#[serde(default)]` alone only covers a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}
