//! # Sync Client
//!
//! The cheap, cloneable handle used to talk to a [`SyncActor`](crate::framework::SyncActor).

use crate::framework::error::SyncError;
use crate::framework::message::{FilterOutcome, SubscriptionId, SyncRequest};
use crate::framework::resource::Resource;
use crate::framework::state::FilterState;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `SyncActor`.
///
/// Holds only the mailbox sender, so cloning is inexpensive and every clone talks to
/// the same controller. Dropping the last clone shuts the actor down.
pub struct SyncClient<F, T> {
    sender: mpsc::Sender<SyncRequest<F, T>>,
}

impl<F, T> Clone for SyncClient<F, T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<F, T> SyncClient<F, T>
where
    F: Send + 'static,
    T: Send + 'static,
{
    pub fn new(sender: mpsc::Sender<SyncRequest<F, T>>) -> Self {
        Self { sender }
    }

    /// Selects `filter`, starting a fetch unless it is already the settled selection.
    ///
    /// Returns as soon as the controller has published `Loading`; it never waits for
    /// the fetch itself.
    pub async fn set_filter(&self, filter: F) -> Result<FilterOutcome, SyncError> {
        let (respond_to, response) = oneshot::channel();
        self.send(SyncRequest::SetFilter { filter, respond_to }).await?;
        response.await.map_err(|_| SyncError::ActorDropped)
    }

    /// Selects `filter` only if the controller has never had a selection.
    ///
    /// The check and the selection happen in one actor step, so a selection made by
    /// another client is never overwritten.
    pub async fn set_filter_if_uninitialized(&self, filter: F) -> Result<FilterOutcome, SyncError> {
        let (respond_to, response) = oneshot::channel();
        self.send(SyncRequest::SetFilterIfUninitialized { filter, respond_to })
            .await?;
        response.await.map_err(|_| SyncError::ActorDropped)
    }

    /// Registers `observer` for every future transition.
    ///
    /// If a state has already been published, the observer is called with it before
    /// this returns. An observer that panics is dropped from the controller.
    pub async fn subscribe<O>(&self, observer: O) -> Result<SubscriptionId, SyncError>
    where
        O: Fn(&Resource<T>) + Send + Sync + 'static,
    {
        let (respond_to, response) = oneshot::channel();
        self.send(SyncRequest::Subscribe {
            observer: Box::new(observer),
            respond_to,
        })
        .await?;
        response.await.map_err(|_| SyncError::ActorDropped)
    }

    /// Detaches a subscription. Returns `false` if it was not registered.
    pub async fn unsubscribe(&self, id: SubscriptionId) -> Result<bool, SyncError> {
        let (respond_to, response) = oneshot::channel();
        self.send(SyncRequest::Unsubscribe { id, respond_to }).await?;
        response.await.map_err(|_| SyncError::ActorDropped)
    }

    pub async fn filter_state(&self) -> Result<FilterState<F>, SyncError> {
        let (respond_to, response) = oneshot::channel();
        self.send(SyncRequest::GetFilterState { respond_to }).await?;
        response.await.map_err(|_| SyncError::ActorDropped)
    }

    /// The last published state, or `None` before the first selection.
    pub async fn current(&self) -> Result<Option<Resource<T>>, SyncError> {
        let (respond_to, response) = oneshot::channel();
        self.send(SyncRequest::GetCurrent { respond_to }).await?;
        response.await.map_err(|_| SyncError::ActorDropped)
    }

    async fn send(&self, request: SyncRequest<F, T>) -> Result<(), SyncError> {
        self.sender
            .send(request)
            .await
            .map_err(|_| SyncError::ActorClosed)
    }
}
