//! Type-safe wrappers around [`SyncClient`](crate::framework::SyncClient).

pub mod restaurant_client;

pub use restaurant_client::*;
