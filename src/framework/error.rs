//! # Framework Errors
//!
//! Two error families live here. [`SyncError`] is what callers of the
//! [`SyncClient`](crate::framework::SyncClient) see when the controller itself cannot
//! be reached or a request is malformed. [`FetchError`] is what a data source reports;
//! it never comes back as an `Err` from the client, it is published as
//! [`Resource::Error`](crate::framework::Resource::Error) instead.

use thiserror::Error;

/// Errors returned by the controller's client handle.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SyncError {
    #[error("Controller closed")]
    ActorClosed,
    #[error("Controller dropped response channel")]
    ActorDropped,
    #[error("Unknown filter code: {0}")]
    UnknownFilter(u32),
}

/// Failure reported by a [`FilteredSource`](crate::framework::FilteredSource) fetch.
///
/// The controller treats this as opaque and only forwards its reason to subscribers.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FetchError {
    /// The request never produced a response (connection refused, timeout, ...).
    #[error("transport failure: {0}")]
    Transport(String),

    /// A response arrived but could not be decoded.
    #[error("parse failure: {0}")]
    Parse(String),

    /// The backend answered with an error status.
    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Parse(e.to_string())
    }
}
