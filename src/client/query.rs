//! List-query encoding shared by every list endpoint.

use url::form_urlencoded;

/// Filter and pagination parameters for list operations.
///
/// Every field is optional; an empty string or a non-positive number means
/// "unset" and is left out of the query string.
///
/// # Example
///
/// ```
/// use busha_commerce::ListParams;
///
/// let params = ListParams::new().sort("desc").limit(20).page(2);
/// assert_eq!(params.to_query(), "sort=desc&limit=20&page=2");
/// assert_eq!(ListParams::default().to_query(), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ListParams {
    /// Sort order, e.g. `asc` or `desc`
    pub sort: String,
    /// Page number to fetch
    pub page: i64,
    /// Entries per page
    pub limit: i64,
    /// Currency filter; only the addresses endpoint honours it
    pub currency: String,
}

impl ListParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sort order.
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = sort.into();
        self
    }

    /// Set the page number.
    pub fn page(mut self, page: i64) -> Self {
        self.page = page;
        self
    }

    /// Set the page size.
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    /// Set the currency filter.
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Encode `sort`, `limit` and `page`, in that order.
    pub fn to_query(&self) -> String {
        self.encode(false)
    }

    /// Encode `sort`, `limit`, `page` and `currency`, in that order.
    pub fn to_query_with_currency(&self) -> String {
        self.encode(true)
    }

    /// Append the encoded query to `path`, if there is one.
    pub(crate) fn apply(&self, path: &str) -> String {
        with_query(path, self.to_query())
    }

    /// Like [`apply`](Self::apply) but including `currency`.
    pub(crate) fn apply_with_currency(&self, path: &str) -> String {
        with_query(path, self.to_query_with_currency())
    }

    fn encode(&self, include_currency: bool) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        if !self.sort.is_empty() {
            query.append_pair("sort", &self.sort);
        }
        if self.limit > 0 {
            query.append_pair("limit", &self.limit.to_string());
        }
        if self.page > 0 {
            query.append_pair("page", &self.page.to_string());
        }
        if include_currency && !self.currency.is_empty() {
            query.append_pair("currency", &self.currency);
        }
        query.finish()
    }
}

fn with_query(path: &str, query: String) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}
