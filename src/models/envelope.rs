//! Response envelopes shared by every endpoint.

use serde::{Deserialize, Serialize};

/// The `status` value the API sends on success.
pub const SUCCESS_STATUS: &str = "success";

/// `{status, message}` wrapper present on every successful response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// Outcome marker, `"success"` on success
    pub status: String,
    /// Human-readable description
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub message: String,
}

impl Envelope {
    /// Returns `true` if the server reported success.
    pub fn is_success(&self) -> bool {
        self.status == SUCCESS_STATUS
    }
}

/// Pagination metadata from list responses.
///
/// All values come from the server; none are computed locally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paginator {
    /// Current page (1-indexed)
    #[serde(deserialize_with = "super::null_as_default")]
    pub page: i64,
    /// Entries per page
    #[serde(deserialize_with = "super::null_as_default")]
    pub per_page: i64,
    /// Offset of the first entry of this page
    #[serde(deserialize_with = "super::null_as_default")]
    pub offset: i64,
    /// Total number of entries across all pages
    #[serde(deserialize_with = "super::null_as_default")]
    pub total_entries_size: i64,
    /// Number of entries on this page
    #[serde(deserialize_with = "super::null_as_default")]
    pub current_entries_size: i64,
    /// Total number of pages
    #[serde(deserialize_with = "super::null_as_default")]
    pub total_pages: i64,
}

impl Paginator {
    /// Check if there are more pages after the current one.
    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }

    /// Get the next page number, if available.
    pub fn next_page(&self) -> Option<i64> {
        if self.has_more() {
            Some(self.page + 1)
        } else {
            None
        }
    }
}

/// Response carrying a single resource under `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataResponse<T> {
    /// Status and message
    #[serde(flatten)]
    pub envelope: Envelope,
    /// The resource
    pub data: T,
}

/// Response carrying a page of resources under `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    /// Status and message
    #[serde(flatten)]
    pub envelope: Envelope,
    /// Pagination metadata
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub pagination: Paginator,
    /// Items in this page
    #[serde(alias = "events", default = "Vec::new")]
    pub data: Vec<T>,
}
