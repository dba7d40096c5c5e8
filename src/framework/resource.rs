//! # Resource Envelope
//!
//! [`Resource`] is the tri-state value published by the controller. Exactly one case is
//! active at any time and only the controller constructs new published states.

use crate::framework::error::FetchError;
use std::fmt;

/// Progress of an asynchronous fetch, as seen by subscribers.
#[derive(Debug, Clone, PartialEq)]
pub enum Resource<T> {
    /// A fetch for the selected filter is in flight.
    Loading,
    /// The fetch finished. An empty list is a valid result.
    Success(Vec<T>),
    /// The fetch failed; the reason is carried for display.
    Error(FetchError),
}

impl<T> Resource<T> {
    pub fn is_error(&self) -> bool {
        matches!(self, Resource::Error(_))
    }

    /// Returns the loaded items, if this is a success.
    pub fn data(&self) -> Option<&[T]> {
        match self {
            Resource::Success(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the failure, if this is an error.
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Resource::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Short name used as a structured log field.
    pub fn status(&self) -> ResourceStatus {
        match self {
            Resource::Loading => ResourceStatus::Loading,
            Resource::Success(_) => ResourceStatus::Success,
            Resource::Error(_) => ResourceStatus::Error,
        }
    }
}

impl<T> From<Result<Vec<T>, FetchError>> for Resource<T> {
    fn from(result: Result<Vec<T>, FetchError>) -> Self {
        match result {
            Ok(items) => Resource::Success(items),
            Err(e) => Resource::Error(e),
        }
    }
}

/// Data-free discriminant of a [`Resource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceStatus {
    Loading,
    Success,
    Error,
}

impl fmt::Display for ResourceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceStatus::Loading => "loading",
            ResourceStatus::Success => "success",
            ResourceStatus::Error => "error",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_success_is_not_an_error() {
        let resource: Resource<u32> = Ok(vec![]).into();
        assert_eq!(resource, Resource::Success(vec![]));
        assert_eq!(resource.data(), Some(&[][..]));
        assert!(!resource.is_error());
    }

    #[test]
    fn test_failed_result_becomes_error_state() {
        let resource: Resource<u32> = Err(FetchError::Transport("offline".into())).into();
        assert_eq!(resource.status(), ResourceStatus::Error);
        assert_eq!(
            resource.error().map(|e| e.to_string()),
            Some("transport failure: offline".to_string())
        );
        assert!(resource.data().is_none());
    }
}
