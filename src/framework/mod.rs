//! Generic filtered-synchronization framework.
//!
//! This module provides the building blocks for keeping a single-valued filter and the
//! data fetched for it in sync, independent of what is being fetched.
//!
//! # Main Components
//!
//! - [`FilteredSource`] - Trait that data sources implement to be driven by the controller
//! - [`SyncActor`] - The single-writer controller that owns the filter state
//! - [`SyncClient`] - Cloneable handle for selecting filters and subscribing
//! - [`Resource`] - Loading / Success / Error envelope published to subscribers
//! - [`SyncError`] / [`FetchError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for a scripted source that controls fetch results and ordering.

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod mock;
pub mod resource;
pub mod source;
pub mod state;

// Re-export core types for convenience
pub use actor::SyncActor;
pub use client::SyncClient;
pub use error::{FetchError, SyncError};
pub use message::{FilterOutcome, Observer, SubscriptionId, SyncRequest};
pub use resource::{Resource, ResourceStatus};
pub use source::FilteredSource;
pub use state::FilterState;
