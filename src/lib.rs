//! # busha-commerce
//!
//! An async Rust client for the Busha Commerce payments API.
//!
//! The crate covers charges, checkouts, invoices, payment links, deposit
//! addresses and events. Every operation goes through one dispatch path
//! that injects the secret key, encodes the JSON body, and turns non-2xx
//! responses into a structured [`ApiError`].
//!
//! ## Features
//!
//! - **Typed resources**: strongly-typed request and response models
//! - **Uniform errors**: API rejections are [`Error::Api`], local failures
//!   have their own variants
//! - **Pagination**: list operations accept [`ListParams`] and have a lazy
//!   `list_stream` companion
//! - **Async-first**: built on `reqwest` and Tokio
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use busha_commerce::{CommerceClient, ListParams};
//! use busha_commerce::models::ChargeRequest;
//! use rust_decimal_macros::dec;
//!
//! #[tokio::main]
//! async fn main() -> busha_commerce::Result<()> {
//!     let client = CommerceClient::new("test_your_secret_key")?;
//!
//!     // Create a fixed-price charge
//!     let charge = client
//!         .charges()
//!         .create(&ChargeRequest::fixed(dec!(5000), "NGN"))
//!         .await?;
//!     println!("Pay at {}", charge.data.hosted_url);
//!
//!     // List the latest charges
//!     let page = client
//!         .charges()
//!         .list(&ListParams::new().sort("desc").limit(10))
//!         .await?;
//!     println!("{} of {} charges", page.data.len(), page.pagination.total_entries_size);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Handling Errors
//!
//! ```rust,no_run
//! use busha_commerce::{CommerceClient, Error};
//!
//! # async fn example(client: CommerceClient) {
//! match client.charges().get("not-a-charge").await {
//!     Ok(charge) => println!("{:?}", charge.data.reference),
//!     Err(Error::Api(err)) => println!("rejected ({}): {}", err.status, err),
//!     Err(err) => println!("local failure: {}", err),
//! }
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use error::{ApiError, Error, Result};
pub use models::{Environment, SecretKey};
pub use client::{ClientConfig, CommerceClient, ListParams, PaginatedStream, RequestLogger};

/// Prelude module for convenient imports.
///
/// ```rust
/// use busha_commerce::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ApiError, Error, Result};
    pub use crate::models::{
        // Primitives
        Environment, SecretKey,
        // Envelopes
        DataResponse, Envelope, ListResponse, Paginator,
        // Resources
        Address, AddressRequest, Charge, ChargeRequest, Checkout, CheckoutRequest, CheckoutType,
        Event, Invoice, InvoiceRequest, PaymentLink, PaymentLinkRequest, PaymentLinkType,
    };
    pub use crate::client::{ClientConfig, CommerceClient, ListParams, PaginatedStream};
}
