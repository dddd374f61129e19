//! Charges service.

use std::sync::Arc;

use serde::Serialize;

use crate::client::paginated::{PaginatedStream, PaginatedStreamBuilder};
use crate::client::{require_id, ClientInner, ListParams};
use crate::models::{Charge, ChargeRequest, DataResponse, ListResponse};
use crate::Result;

/// Service for charge operations.
///
/// # Example
///
/// ```no_run
/// use busha_commerce::models::ChargeRequest;
/// use rust_decimal_macros::dec;
///
/// # async fn example(client: busha_commerce::CommerceClient) -> busha_commerce::Result<()> {
/// let created = client
///     .charges()
///     .create(&ChargeRequest::fixed(dec!(5000), "NGN"))
///     .await?;
/// println!("Pay at {}", created.data.hosted_url);
///
/// let fetched = client.charges().get(&created.data.id.to_string()).await?;
/// # Ok(())
/// # }
/// ```
pub struct ChargesService {
    inner: Arc<ClientInner>,
}

impl ChargesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Create a charge.
    pub async fn create(&self, req: &ChargeRequest) -> Result<DataResponse<Charge>> {
        self.inner.post("/charges", req).await
    }

    /// List charges.
    pub async fn list(&self, params: &ListParams) -> Result<ListResponse<Charge>> {
        self.inner.get(&params.apply("/charges")).await
    }

    /// Stream every charge, fetching pages lazily.
    pub fn list_stream(&self, params: ListParams) -> PaginatedStream<Charge> {
        PaginatedStreamBuilder::new(self.inner.clone(), "/charges").build(params)
    }

    /// Get a charge by ID.
    pub async fn get(&self, id: &str) -> Result<DataResponse<Charge>> {
        let id = require_id(id, "charge")?;
        self.inner.get(&format!("/charges/{}", id)).await
    }

    /// Resolve a charge flagged for manual review, e.g. an underpayment.
    pub async fn resolve(&self, id: &str, context: &str) -> Result<DataResponse<Charge>> {
        #[derive(Serialize)]
        struct Request<'a> {
            context: &'a str,
        }

        let id = require_id(id, "charge")?;
        self.inner
            .post(&format!("/charges/{}/resolve", id), &Request { context })
            .await
    }

    /// Cancel a charge that has not been paid.
    pub async fn cancel(&self, id: &str) -> Result<DataResponse<Charge>> {
        let id = require_id(id, "charge")?;
        self.inner
            .put::<_, ()>(&format!("/charges/{}/cancel", id), None)
            .await
    }
}
