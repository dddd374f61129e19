//! Checkouts service.

use std::sync::Arc;

use crate::client::paginated::{PaginatedStream, PaginatedStreamBuilder};
use crate::client::{require_id, ClientInner, ListParams};
use crate::models::{
    Charge, ChargeRequest, Checkout, CheckoutRequest, DataResponse, Envelope, ListResponse,
};
use crate::Result;

/// Service for checkout operations.
///
/// A checkout is a reusable payment page; each payment made through it
/// becomes a charge.
pub struct CheckoutsService {
    inner: Arc<ClientInner>,
}

impl CheckoutsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Create a checkout.
    pub async fn create(&self, req: &CheckoutRequest) -> Result<DataResponse<Checkout>> {
        self.inner.post("/checkouts", req).await
    }

    /// List checkouts.
    pub async fn list(&self, params: &ListParams) -> Result<ListResponse<Checkout>> {
        self.inner.get(&params.apply("/checkouts")).await
    }

    /// Stream every checkout, fetching pages lazily.
    pub fn list_stream(&self, params: ListParams) -> PaginatedStream<Checkout> {
        PaginatedStreamBuilder::new(self.inner.clone(), "/checkouts").build(params)
    }

    /// Get a checkout by ID.
    pub async fn get(&self, id: &str) -> Result<DataResponse<Checkout>> {
        let id = require_id(id, "checkout")?;
        self.inner.get(&format!("/checkouts/{}", id)).await
    }

    /// Replace a checkout's details.
    pub async fn update(&self, id: &str, req: &CheckoutRequest) -> Result<Envelope> {
        let id = require_id(id, "checkout")?;
        self.inner.put(&format!("/checkouts/{}", id), Some(req)).await
    }

    /// Flip a checkout between active and inactive.
    pub async fn toggle_status(&self, id: &str) -> Result<DataResponse<Checkout>> {
        let id = require_id(id, "checkout")?;
        self.inner.patch(&format!("/checkouts/{}/active", id)).await
    }

    /// Delete a checkout.
    pub async fn delete(&self, id: &str) -> Result<Envelope> {
        let id = require_id(id, "checkout")?;
        self.inner.delete(&format!("/checkouts/{}", id)).await
    }

    /// Open a charge against a checkout.
    pub async fn create_charge(
        &self,
        id: &str,
        req: &ChargeRequest,
    ) -> Result<DataResponse<Charge>> {
        let id = require_id(id, "checkout")?;
        self.inner.post(&format!("/checkouts/{}/charge", id), req).await
    }
}
