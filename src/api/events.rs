//! Events service.

use std::sync::Arc;

use crate::client::paginated::{PaginatedStream, PaginatedStreamBuilder};
use crate::client::{require_id, ClientInner, ListParams};
use crate::models::{DataResponse, Event, ListResponse};
use crate::Result;

/// Service for reading recorded events.
pub struct EventsService {
    inner: Arc<ClientInner>,
}

impl EventsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List events.
    pub async fn list(&self, params: &ListParams) -> Result<ListResponse<Event>> {
        self.inner.get(&params.apply("/events")).await
    }

    /// Stream every event, fetching pages lazily.
    pub fn list_stream(&self, params: ListParams) -> PaginatedStream<Event> {
        PaginatedStreamBuilder::new(self.inner.clone(), "/events").build(params)
    }

    /// Get an event by ID.
    pub async fn get(&self, id: &str) -> Result<DataResponse<Event>> {
        let id = require_id(id, "event")?;
        self.inner.get(&format!("/events/{}", id)).await
    }
}
