//! # Mock Source & Testing Guide
//!
//! [`MockSource`] implements [`FilteredSource`] entirely in memory from a queue of
//! expectations. It lets tests script what every fetch returns, inject failures, and
//! decide *when* a fetch completes, without any network or real repository.
//!
//! ## When to use the mock vs a real source
//!
//! | Feature | MockSource | Real source |
//! |---------|------------|-------------|
//! | **Determinism** | Completion order is chosen by the test | Subject to I/O timing |
//! | **Error Injection** | `return_err` | Hard to provoke |
//! | **Ordering tests** | `hold()` a fetch, release it later | Not reproducible |
//!
//! ## Example
//!
//! ```rust
//! use restaurant_map::framework::mock::MockSource;
//! use restaurant_map::framework::{Resource, SyncActor};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockSource::<u32, &'static str>::new();
//!     mock.expect_fetch(1).return_ok(vec!["a", "b"]);
//!
//!     let (actor, client) = SyncActor::<MockSource<u32, &'static str>>::new(8);
//!     tokio::spawn(actor.run(mock.clone()));
//!
//!     let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
//!     client.subscribe(move |s: &Resource<&'static str>| { let _ = tx.send(s.clone()); }).await.unwrap();
//!     client.set_filter(1).await.unwrap();
//!
//!     assert_eq!(rx.recv().await, Some(Resource::Loading));
//!     assert_eq!(rx.recv().await, Some(Resource::Success(vec!["a", "b"])));
//!     mock.verify();
//! }
//! ```
//!
//! ## Controlling completion order
//!
//! `hold()` parks the fetch until the returned [`HeldFetch`] is completed, which is how
//! the stale-result tests release an older fetch after a newer one.

use crate::framework::error::FetchError;
use crate::framework::source::FilteredSource;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::fmt::{Debug, Display};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

enum Reply<T> {
    Ready(Result<Vec<T>, FetchError>),
    Held(oneshot::Receiver<Result<Vec<T>, FetchError>>),
}

struct Expectation<F, T> {
    filter: F,
    reply: Reply<T>,
}

struct Shared<F, T> {
    expectations: VecDeque<Expectation<F, T>>,
    calls: Vec<F>,
}

/// A scripted data source with expectation tracking.
///
/// Clones share the same expectation queue, so a test keeps one clone and hands the
/// other to the actor.
pub struct MockSource<F, T> {
    shared: Arc<Mutex<Shared<F, T>>>,
}

impl<F, T> Clone for MockSource<F, T> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<F, T> Default for MockSource<F, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F, T> MockSource<F, T> {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                expectations: VecDeque::new(),
                calls: Vec::new(),
            })),
        }
    }

    /// Expects the next fetch to be for `filter`.
    pub fn expect_fetch(&self, filter: F) -> FetchExpectationBuilder<F, T> {
        FetchExpectationBuilder {
            filter,
            shared: self.shared.clone(),
        }
    }

    /// Filters of every fetch issued so far, in call order.
    pub fn calls(&self) -> Vec<F>
    where
        F: Clone,
    {
        self.shared.lock().unwrap().calls.clone()
    }

    /// Number of fetches issued so far.
    pub fn fetch_count(&self) -> usize {
        self.shared.lock().unwrap().calls.len()
    }

    /// Verifies that all expectations were consumed.
    pub fn verify(&self) {
        let shared = self.shared.lock().unwrap();
        if !shared.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                shared.expectations.len()
            );
        }
    }
}

/// Builder for `fetch` expectations.
pub struct FetchExpectationBuilder<F, T> {
    filter: F,
    shared: Arc<Mutex<Shared<F, T>>>,
}

impl<F, T> FetchExpectationBuilder<F, T> {
    /// The fetch resolves immediately with `items`.
    pub fn return_ok(self, items: Vec<T>) {
        self.push(Reply::Ready(Ok(items)));
    }

    /// The fetch resolves immediately with `error`.
    pub fn return_err(self, error: FetchError) {
        self.push(Reply::Ready(Err(error)));
    }

    /// The fetch stays pending until the returned handle is completed.
    pub fn hold(self) -> HeldFetch<T> {
        let (sender, receiver) = oneshot::channel();
        self.push(Reply::Held(receiver));
        HeldFetch { sender }
    }

    fn push(self, reply: Reply<T>) {
        let mut shared = self.shared.lock().unwrap();
        shared.expectations.push_back(Expectation {
            filter: self.filter,
            reply,
        });
    }
}

/// A fetch parked by [`FetchExpectationBuilder::hold`].
pub struct HeldFetch<T> {
    sender: oneshot::Sender<Result<Vec<T>, FetchError>>,
}

impl<T> HeldFetch<T> {
    pub fn complete_ok(self, items: Vec<T>) {
        let _ = self.sender.send(Ok(items));
    }

    pub fn complete_err(self, error: FetchError) {
        let _ = self.sender.send(Err(error));
    }
}

#[async_trait]
impl<F, T> FilteredSource for MockSource<F, T>
where
    F: Copy + Eq + Send + Sync + Debug + Display + 'static,
    T: Clone + Send + Sync + Debug + 'static,
{
    type Filter = F;
    type Item = T;

    async fn fetch(&self, filter: F) -> Result<Vec<T>, FetchError> {
        let expectation = {
            let mut shared = self.shared.lock().unwrap();
            shared.calls.push(filter);
            shared.expectations.pop_front()
        };

        let reply = match expectation {
            Some(expectation) if expectation.filter == filter => expectation.reply,
            Some(expectation) => panic!(
                "Expectation mismatch: expected fetch for {}, got {}",
                expectation.filter, filter
            ),
            None => panic!("Unexpected fetch for {}", filter),
        };

        match reply {
            Reply::Ready(result) => result,
            Reply::Held(receiver) => receiver
                .await
                .unwrap_or_else(|_| Err(FetchError::Transport("held fetch dropped".into()))),
        }
    }
}
