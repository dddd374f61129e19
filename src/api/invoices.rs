//! Invoices service.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::client::paginated::{PaginatedStream, PaginatedStreamBuilder};
use crate::client::{require_id, ClientInner, ListParams};
use crate::models::{Charge, DataResponse, Envelope, Invoice, InvoiceRequest, ListResponse};
use crate::Result;

/// Service for invoice operations.
///
/// # Example
///
/// ```no_run
/// use busha_commerce::models::InvoiceRequest;
/// use rust_decimal_macros::dec;
///
/// # async fn example(client: busha_commerce::CommerceClient) -> busha_commerce::Result<()> {
/// let invoice = client
///     .invoices()
///     .create(&InvoiceRequest {
///         name: "Consulting".into(),
///         customer_email: "client@example.com".into(),
///         customer_name: "Ada".into(),
///         local_amount: dec!(250),
///         local_currency: "USD".into(),
///         ..Default::default()
///     })
///     .await?;
///
/// client.invoices().void(&invoice.data.id.to_string()).await?;
/// # Ok(())
/// # }
/// ```
pub struct InvoicesService {
    inner: Arc<ClientInner>,
}

impl InvoicesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Create an invoice.
    pub async fn create(&self, req: &InvoiceRequest) -> Result<DataResponse<Invoice>> {
        self.inner.post("/invoices", req).await
    }

    /// List invoices.
    pub async fn list(&self, params: &ListParams) -> Result<ListResponse<Invoice>> {
        self.inner.get(&params.apply("/invoices")).await
    }

    /// Stream every invoice, fetching pages lazily.
    pub fn list_stream(&self, params: ListParams) -> PaginatedStream<Invoice> {
        PaginatedStreamBuilder::new(self.inner.clone(), "/invoices").build(params)
    }

    /// Get an invoice by ID.
    pub async fn get(&self, id: &str) -> Result<DataResponse<Invoice>> {
        let id = require_id(id, "invoice")?;
        self.inner.get(&format!("/invoices/{}", id)).await
    }

    /// Void an invoice.
    pub async fn void(&self, id: &str) -> Result<Envelope> {
        let id = require_id(id, "invoice")?;
        self.inner.delete(&format!("/invoices/{}", id)).await
    }

    /// Open a charge for an invoice.
    pub async fn create_charge(&self, id: &str) -> Result<DataResponse<Charge>> {
        let id = require_id(id, "invoice")?;
        let empty = Value::Object(Map::new());
        self.inner
            .post(&format!("/invoices/{}/charge", id), &empty)
            .await
    }
}
