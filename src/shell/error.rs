//! Error types for the presentation shell.

use crate::framework::SyncError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShellError {
    /// A selection arrived before the map surface finished loading.
    #[error("Map surface is not ready")]
    SurfaceNotReady,

    #[error(transparent)]
    Sync(#[from] SyncError),
}
