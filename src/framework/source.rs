//! # FilteredSource Trait
//!
//! The contract a data source must satisfy for the controller to drive it. The
//! associated `Filter` and `Item` types pin a controller to one kind of query and one
//! kind of result, so a restaurant controller cannot be handed a source of something
//! else.

use crate::framework::error::FetchError;
use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// An asynchronous, filterable collection of items.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use restaurant_map::framework::{FetchError, FilteredSource};
///
/// struct Evens;
///
/// #[async_trait]
/// impl FilteredSource for Evens {
///     type Filter = u32;
///     type Item = u32;
///
///     async fn fetch(&self, limit: u32) -> Result<Vec<u32>, FetchError> {
///         Ok((0..limit).filter(|n| n % 2 == 0).collect())
///     }
/// }
/// ```
#[async_trait]
pub trait FilteredSource: Send + Sync + 'static {
    /// The single-valued selector narrowing the result set.
    type Filter: Copy + Eq + Send + Sync + Debug + Display + 'static;

    /// One element of a fetch result.
    type Item: Clone + Send + Sync + Debug + 'static;

    /// Fetches every item matching `filter`.
    ///
    /// Failures are returned, never panicked; the controller turns them into
    /// [`Resource::Error`](crate::framework::Resource::Error).
    async fn fetch(&self, filter: Self::Filter) -> Result<Vec<Self::Item>, FetchError>;
}
