//! Paginated stream for lazy iteration over list endpoints.
//!
//! [`PaginatedStream`] implements `Stream`, fetching one page at a time
//! and yielding the items individually.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::Stream;
use serde::de::DeserializeOwned;

use super::query::ListParams;
use super::ClientInner;
use crate::models::ListResponse;
use crate::Result;

/// Page the stream starts from when none is given.
pub const FIRST_PAGE: i64 = 1;

/// Type alias for a boxed future used internally.
type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

type FetchPage<T> = Box<dyn Fn(i64) -> BoxFuture<'static, Result<ListResponse<T>>> + Send + Sync>;

/// A stream that lazily walks the pages of a list endpoint.
///
/// The next page is requested only once the current one is drained. The
/// stream ends after the last page reported by the server, or after the
/// first error.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
/// use busha_commerce::ListParams;
///
/// # async fn example(client: busha_commerce::CommerceClient) -> busha_commerce::Result<()> {
/// let mut stream = client.charges().list_stream(ListParams::new().limit(50));
///
/// while let Some(result) = stream.next().await {
///     let charge = result?;
///     println!("{} {}", charge.reference, charge.local_amount);
/// }
/// # Ok(())
/// # }
/// ```
pub struct PaginatedStream<T> {
    fetch_page: FetchPage<T>,
    current_items: VecDeque<T>,
    next_page: Option<i64>,
    pending_fetch: Option<(i64, BoxFuture<'static, Result<ListResponse<T>>>)>,
}

impl<T> PaginatedStream<T>
where
    T: DeserializeOwned + Send + 'static,
{
    /// Create a stream starting at `first_page`.
    pub fn new<F>(first_page: i64, fetch_page: F) -> Self
    where
        F: Fn(i64) -> BoxFuture<'static, Result<ListResponse<T>>> + Send + Sync + 'static,
    {
        Self {
            fetch_page: Box::new(fetch_page),
            current_items: VecDeque::new(),
            next_page: Some(first_page),
            pending_fetch: None,
        }
    }
}

impl<T> Stream for PaginatedStream<T> {
    type Item = Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        loop {
            if let Some(item) = this.current_items.pop_front() {
                return Poll::Ready(Some(Ok(item)));
            }

            if let Some((requested, ref mut fut)) = this.pending_fetch {
                match fut.as_mut().poll(cx) {
                    Poll::Ready(Ok(response)) => {
                        this.pending_fetch = None;
                        this.current_items = response.data.into();

                        // A server that ignores `page` would otherwise loop forever.
                        this.next_page = response
                            .pagination
                            .next_page()
                            .filter(|next| *next > requested);

                        if !this.current_items.is_empty() {
                            continue;
                        }
                        return Poll::Ready(None);
                    }
                    Poll::Ready(Err(e)) => {
                        this.pending_fetch = None;
                        this.next_page = None;
                        return Poll::Ready(Some(Err(e)));
                    }
                    Poll::Pending => return Poll::Pending,
                }
            }

            if let Some(page) = this.next_page.take() {
                this.pending_fetch = Some((page, (this.fetch_page)(page)));
                continue;
            }

            return Poll::Ready(None);
        }
    }
}

impl<T> Unpin for PaginatedStream<T> {}

/// Builder wiring a list endpoint into a [`PaginatedStream`].
pub(crate) struct PaginatedStreamBuilder<T> {
    inner: Arc<ClientInner>,
    path: String,
    with_currency: bool,
    _marker: std::marker::PhantomData<T>,
}

impl<T: DeserializeOwned + Send + 'static> PaginatedStreamBuilder<T> {
    /// Create a new builder for the list endpoint at `path`.
    pub(crate) fn new(inner: Arc<ClientInner>, path: impl Into<String>) -> Self {
        Self {
            inner,
            path: path.into(),
            with_currency: false,
            _marker: std::marker::PhantomData,
        }
    }

    /// Include the `currency` filter in each page request.
    pub(crate) fn with_currency(mut self) -> Self {
        self.with_currency = true;
        self
    }

    /// Build the stream; `params.page` (or 1) is the first page fetched.
    pub(crate) fn build(self, params: ListParams) -> PaginatedStream<T> {
        let inner = self.inner;
        let path = self.path;
        let with_currency = self.with_currency;
        let first_page = if params.page > 0 { params.page } else { FIRST_PAGE };

        PaginatedStream::new(first_page, move |page: i64| {
            let inner = inner.clone();
            let params = params.clone().page(page);
            let path = if with_currency {
                params.apply_with_currency(&path)
            } else {
                params.apply(&path)
            };

            Box::pin(async move { inner.get::<ListResponse<T>>(&path).await })
        })
    }
}
