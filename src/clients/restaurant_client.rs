//! # Restaurant Client
//!
//! Provides a high‑level API for the restaurant controller. It wraps a
//! `SyncClient<CuisineFilter, Restaurant>` and adds the cuisine-specific entry points
//! the presentation layer uses.

use crate::framework::{FilterOutcome, FilterState, Resource, SubscriptionId, SyncClient, SyncError};
use crate::model::{CuisineFilter, Restaurant};
use tracing::{debug, instrument};

/// Client for interacting with the restaurant controller.
#[derive(Clone)]
pub struct RestaurantClient {
    inner: SyncClient<CuisineFilter, Restaurant>,
}

impl RestaurantClient {
    pub fn new(inner: SyncClient<CuisineFilter, Restaurant>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn select(&self, filter: CuisineFilter) -> Result<FilterOutcome, SyncError> {
        debug!("Sending request");
        self.inner.set_filter(filter).await
    }

    /// Selects by raw selection-control index, rejecting codes with no cuisine.
    #[instrument(skip(self))]
    pub async fn select_code(&self, code: u32) -> Result<FilterOutcome, SyncError> {
        let filter = CuisineFilter::try_from(code)?;
        self.select(filter).await
    }

    /// Selects `default` only if nothing has ever been selected on this controller.
    ///
    /// A shell recreated over a live controller keeps the selection it already has.
    #[instrument(skip(self))]
    pub async fn ensure_initialized(
        &self,
        default: CuisineFilter,
    ) -> Result<FilterOutcome, SyncError> {
        debug!("Sending request");
        self.inner.set_filter_if_uninitialized(default).await
    }

    pub async fn subscribe<O>(&self, observer: O) -> Result<SubscriptionId, SyncError>
    where
        O: Fn(&Resource<Restaurant>) + Send + Sync + 'static,
    {
        self.inner.subscribe(observer).await
    }

    pub async fn unsubscribe(&self, id: SubscriptionId) -> Result<bool, SyncError> {
        self.inner.unsubscribe(id).await
    }

    pub async fn filter_state(&self) -> Result<FilterState<CuisineFilter>, SyncError> {
        self.inner.filter_state().await
    }

    pub async fn current(&self) -> Result<Option<Resource<Restaurant>>, SyncError> {
        self.inner.current().await
    }
}
