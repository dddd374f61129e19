//! Payment links service.

use std::sync::Arc;

use crate::client::paginated::{PaginatedStream, PaginatedStreamBuilder};
use crate::client::{require_id, ClientInner, ListParams};
use crate::models::{
    Charge, ChargeRequest, DataResponse, Envelope, ListResponse, PaymentLink, PaymentLinkRequest,
};
use crate::Result;

/// Service for payment link operations.
pub struct PaymentLinksService {
    inner: Arc<ClientInner>,
}

impl PaymentLinksService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Create a payment link.
    pub async fn create(&self, req: &PaymentLinkRequest) -> Result<DataResponse<PaymentLink>> {
        self.inner.post("/payment_links", req).await
    }

    /// List payment links.
    pub async fn list(&self, params: &ListParams) -> Result<ListResponse<PaymentLink>> {
        self.inner.get(&params.apply("/payment_links")).await
    }

    /// Stream every payment link, fetching pages lazily.
    pub fn list_stream(&self, params: ListParams) -> PaginatedStream<PaymentLink> {
        PaginatedStreamBuilder::new(self.inner.clone(), "/payment_links").build(params)
    }

    /// Get a payment link by ID.
    pub async fn get(&self, id: &str) -> Result<DataResponse<PaymentLink>> {
        let id = require_id(id, "payment link")?;
        self.inner.get(&format!("/payment_links/{}", id)).await
    }

    /// Replace a payment link's details.
    pub async fn update(&self, id: &str, req: &PaymentLinkRequest) -> Result<Envelope> {
        let id = require_id(id, "payment link")?;
        self.inner.put(&format!("/payment_links/{}", id), Some(req)).await
    }

    /// Flip a payment link between active and inactive.
    pub async fn toggle_status(&self, id: &str) -> Result<DataResponse<PaymentLink>> {
        let id = require_id(id, "payment link")?;
        self.inner.patch(&format!("/payment_links/{}/active", id)).await
    }

    /// Delete a payment link.
    pub async fn delete(&self, id: &str) -> Result<Envelope> {
        let id = require_id(id, "payment link")?;
        self.inner.delete(&format!("/payment_links/{}", id)).await
    }

    /// Open a charge against a payment link.
    pub async fn create_charge(
        &self,
        id: &str,
        req: &ChargeRequest,
    ) -> Result<DataResponse<Charge>> {
        let id = require_id(id, "payment link")?;
        self.inner
            .post(&format!("/payment_links/{}/charge", id), req)
            .await
    }
}
