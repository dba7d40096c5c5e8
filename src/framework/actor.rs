//! # Sync Controller Actor
//!
//! This module defines the `SyncActor`, the single writer of the controller state. It
//! owns the [`FilterState`], the last published [`Resource`] and the observer list, and
//! processes client requests and fetch completions one at a time.

use crate::framework::client::SyncClient;
use crate::framework::message::{
    FetchCompletion, FilterOutcome, Observer, SubscriptionId, SyncRequest,
};
use crate::framework::resource::Resource;
use crate::framework::source::FilteredSource;
use crate::framework::state::FilterState;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info, trace, warn, Instrument};

type Request<S> = SyncRequest<<S as FilteredSource>::Filter, <S as FilteredSource>::Item>;
type Completion<S> = FetchCompletion<<S as FilteredSource>::Filter, <S as FilteredSource>::Item>;

/// The controller that keeps a filter selection and its fetched data in sync.
///
/// # Concurrency Model
/// The actor processes its mailbox sequentially inside one Tokio task. Fetches run on
/// their own spawned tasks and report back through a completion channel, so every write
/// to the filter state and every observer call happens on the actor task. No `Mutex`
/// guards the state.
///
/// # Usage Pattern
///
/// 1.  **Create**: `SyncActor::new()` returns the actor (server) and the client.
/// 2.  **Wire**: pass the data source into `actor.run(source)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use async_trait::async_trait;
/// use restaurant_map::framework::{FetchError, FilteredSource, SyncActor};
///
/// struct Numbers;
///
/// #[async_trait]
/// impl FilteredSource for Numbers {
///     type Filter = u32;
///     type Item = u32;
///     async fn fetch(&self, below: u32) -> Result<Vec<u32>, FetchError> {
///         Ok((0..below).collect())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = SyncActor::<Numbers>::new(8);
///     tokio::spawn(actor.run(Numbers));
///
///     client.subscribe(|state| println!("{:?}", state.status())).await.unwrap();
///     client.set_filter(3).await.unwrap();
/// }
/// ```
///
/// # Stale Results
/// Every fetch gets a request number. A completion is applied only if it belongs to the
/// latest fetch started, so selecting A, B, then A again drops the first A's result even
/// though its filter matches. Superseded fetches are never cancelled; their results are
/// dropped when they arrive.
pub struct SyncActor<S: FilteredSource> {
    receiver: mpsc::Receiver<Request<S>>,
    completions: mpsc::UnboundedReceiver<Completion<S>>,
    completion_sender: mpsc::UnboundedSender<Completion<S>>,
    state: FilterState<S::Filter>,
    current: Option<Resource<S::Item>>,
    observers: Vec<(SubscriptionId, Observer<S::Item>)>,
    next_subscription: u64,
    latest_request: u64,
}

impl<S: FilteredSource> SyncActor<S> {
    /// Creates a new `SyncActor` and its associated `SyncClient`.
    ///
    /// `buffer_size` is the capacity of the request mailbox. When it is full, client
    /// calls wait for space.
    pub fn new(buffer_size: usize) -> (Self, SyncClient<S::Filter, S::Item>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (completion_sender, completions) = mpsc::unbounded_channel();
        let actor = Self {
            receiver,
            completions,
            completion_sender,
            state: FilterState::default(),
            current: None,
            observers: Vec::new(),
            next_subscription: 1,
            latest_request: 0,
        };
        (actor, SyncClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// The source is injected here rather than in `new`, so the client can be handed out
    /// before the source is built. Fetches still in flight at shutdown are abandoned.
    pub async fn run(mut self, source: S) {
        let source = Arc::new(source);
        info!("Actor started");

        loop {
            tokio::select! {
                msg = self.receiver.recv() => match msg {
                    Some(msg) => self.handle_request(msg, &source),
                    None => break,
                },
                Some(done) = self.completions.recv() => self.handle_completion(done),
            }
        }

        info!(
            filter = ?self.state.selected,
            observers = self.observers.len(),
            "Shutdown"
        );
    }

    fn handle_request(&mut self, msg: Request<S>, source: &Arc<S>) {
        match msg {
            SyncRequest::SetFilter { filter, respond_to } => {
                let outcome = self.set_filter(filter, source);
                let _ = respond_to.send(outcome);
            }
            SyncRequest::SetFilterIfUninitialized { filter, respond_to } => {
                let outcome = if self.state.initialized {
                    debug!(%filter, selected = ?self.state.selected, "Already initialized");
                    FilterOutcome::Unchanged
                } else {
                    self.set_filter(filter, source)
                };
                let _ = respond_to.send(outcome);
            }
            SyncRequest::Subscribe {
                observer,
                respond_to,
            } => {
                let id = SubscriptionId(self.next_subscription);
                self.next_subscription += 1;
                // Replay so a freshly attached observer sees the current truth.
                let replayed = match &self.current {
                    Some(current) => notify(id, &observer, current),
                    None => true,
                };
                if replayed {
                    self.observers.push((id, observer));
                }
                debug!(%id, observers = self.observers.len(), "Subscribed");
                let _ = respond_to.send(id);
            }
            SyncRequest::Unsubscribe { id, respond_to } => {
                let before = self.observers.len();
                self.observers.retain(|(existing, _)| *existing != id);
                let removed = self.observers.len() != before;
                debug!(%id, removed, "Unsubscribed");
                let _ = respond_to.send(removed);
            }
            SyncRequest::GetFilterState { respond_to } => {
                let _ = respond_to.send(self.state);
            }
            SyncRequest::GetCurrent { respond_to } => {
                let _ = respond_to.send(self.current.clone());
            }
        }
    }

    fn set_filter(&mut self, filter: S::Filter, source: &Arc<S>) -> FilterOutcome {
        // A failed fetch does not settle the selection, so picking it again retries.
        let failed = self.current.as_ref().is_some_and(Resource::is_error);
        if self.state.holds(filter) && !failed {
            debug!(%filter, "Filter unchanged");
            return FilterOutcome::Unchanged;
        }

        info!(%filter, previous = ?self.state.selected, "Filter selected");
        self.state.select(filter);
        self.publish(Resource::Loading);
        self.spawn_fetch(filter, source);
        FilterOutcome::Fetching
    }

    fn spawn_fetch(&mut self, filter: S::Filter, source: &Arc<S>) {
        self.latest_request += 1;
        let request = self.latest_request;
        let source = Arc::clone(source);
        let completions = self.completion_sender.clone();
        let span = tracing::debug_span!("fetch", %filter, request);
        tokio::spawn(
            async move {
                let result = source.fetch(filter).await;
                // The actor may already be gone; nothing to report to then.
                let _ = completions.send(FetchCompletion {
                    filter,
                    request,
                    result,
                });
            }
            .instrument(span),
        );
    }

    fn handle_completion(&mut self, done: Completion<S>) {
        if done.request != self.latest_request {
            trace!(
                filter = %done.filter,
                request = done.request,
                latest = self.latest_request,
                "Discarding stale result"
            );
            return;
        }

        match &done.result {
            Ok(items) => info!(filter = %done.filter, count = items.len(), "Fetch ok"),
            Err(e) => warn!(filter = %done.filter, error = %e, "Fetch failed"),
        }
        self.publish(done.result.into());
    }

    fn publish(&mut self, resource: Resource<S::Item>) {
        debug!(state = %resource.status(), observers = self.observers.len(), "Publish");
        self.current = Some(resource);
        if let Some(current) = &self.current {
            self.observers
                .retain(|(id, observer)| notify(*id, observer, current));
        }
    }
}

/// Calls `observer`, returning `false` if it panicked.
fn notify<T>(id: SubscriptionId, observer: &Observer<T>, state: &Resource<T>) -> bool {
    let delivered = catch_unwind(AssertUnwindSafe(|| observer(state))).is_ok();
    if !delivered {
        error!(%id, "Observer panicked, unsubscribing");
    }
    delivered
}
