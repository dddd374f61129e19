//! Addresses service.

use std::sync::Arc;

use crate::client::paginated::{PaginatedStream, PaginatedStreamBuilder};
use crate::client::{require_id, ClientInner, ListParams};
use crate::models::{Address, AddressRequest, DataResponse, ListResponse};
use crate::Result;

/// Service for deposit address operations.
///
/// The list endpoint is the only one that honours the `currency` filter.
pub struct AddressesService {
    inner: Arc<ClientInner>,
}

impl AddressesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Create an address.
    pub async fn create(&self, req: &AddressRequest) -> Result<DataResponse<Address>> {
        self.inner.post("/addresses", req).await
    }

    /// List addresses, optionally filtered by `params.currency`.
    pub async fn list(&self, params: &ListParams) -> Result<ListResponse<Address>> {
        self.inner.get(&params.apply_with_currency("/addresses")).await
    }

    /// Stream every address, fetching pages lazily.
    pub fn list_stream(&self, params: ListParams) -> PaginatedStream<Address> {
        PaginatedStreamBuilder::new(self.inner.clone(), "/addresses")
            .with_currency()
            .build(params)
    }

    /// Get an address by ID.
    pub async fn get(&self, id: &str) -> Result<DataResponse<Address>> {
        let id = require_id(id, "address")?;
        self.inner.get(&format!("/addresses/{}", id)).await
    }
}
