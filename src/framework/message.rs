//! # Controller Messages
//!
//! Everything that touches controller state arrives at the actor as one of these
//! messages. Client requests come through the bounded mailbox; fetch completions come
//! back on a separate channel so the actor can tell "all clients are gone" apart from
//! "a fetch finished".

use crate::framework::error::FetchError;
use crate::framework::resource::Resource;
use crate::framework::state::FilterState;
use std::fmt;
use tokio::sync::oneshot;

/// One-shot reply channel used by the actor.
pub type Response<T> = oneshot::Sender<T>;

/// Callback invoked on every published transition.
///
/// Runs on the actor task, so it must return quickly and must not wait on the client.
/// Observers must not panic. One that does is caught, logged and unsubscribed; the
/// other observers and the controller keep running.
pub type Observer<T> = Box<dyn Fn(&Resource<T>) + Send + Sync + 'static>;

/// Handle returned by `subscribe`, used to detach later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub_{}", self.0)
    }
}

/// What a `set_filter` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOutcome {
    /// The filter was already selected and settled; nothing was fetched.
    Unchanged,
    /// `Loading` was published and a fetch was started.
    Fetching,
}

/// Requests sent from a [`SyncClient`](crate::framework::SyncClient) to the actor.
pub enum SyncRequest<F, T> {
    SetFilter {
        filter: F,
        respond_to: Response<FilterOutcome>,
    },
    /// Selects `filter` only if nothing has ever been selected, in one step.
    SetFilterIfUninitialized {
        filter: F,
        respond_to: Response<FilterOutcome>,
    },
    Subscribe {
        observer: Observer<T>,
        respond_to: Response<SubscriptionId>,
    },
    Unsubscribe {
        id: SubscriptionId,
        respond_to: Response<bool>,
    },
    GetFilterState {
        respond_to: Response<FilterState<F>>,
    },
    GetCurrent {
        respond_to: Response<Option<Resource<T>>>,
    },
}

impl<F: fmt::Debug, T> fmt::Debug for SyncRequest<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncRequest::SetFilter { filter, .. } => {
                f.debug_struct("SetFilter").field("filter", filter).finish()
            }
            SyncRequest::SetFilterIfUninitialized { filter, .. } => f
                .debug_struct("SetFilterIfUninitialized")
                .field("filter", filter)
                .finish(),
            SyncRequest::Subscribe { .. } => f.write_str("Subscribe"),
            SyncRequest::Unsubscribe { id, .. } => {
                f.debug_struct("Unsubscribe").field("id", id).finish()
            }
            SyncRequest::GetFilterState { .. } => f.write_str("GetFilterState"),
            SyncRequest::GetCurrent { .. } => f.write_str("GetCurrent"),
        }
    }
}

/// Result of a spawned fetch, tagged with the request that issued it.
///
/// `request` increases with every fetch the actor starts; only the completion of the
/// latest one is applied.
#[derive(Debug)]
pub struct FetchCompletion<F, T> {
    pub filter: F,
    pub request: u64,
    pub result: Result<Vec<T>, FetchError>,
}
