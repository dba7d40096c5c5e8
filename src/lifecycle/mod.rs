//! # Session Lifecycle
//!
//! The controller lives for a whole session; shells come and go. This module owns
//! that longer lifetime.
//!
//! - [`MapSession`] - starts the controller with its repository, builds shells, and
//!   shuts the controller down
//! - [`MapConfig`] - mailbox size, camera padding and default cuisine, from JSON or env
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure
//!
//! ## Graceful Shutdown
//!
//! 1. **Detach shells** - each shell unsubscribes and drops its client clone
//! 2. **Drop the session client** - the mailbox closes
//! 3. **Actor exits** - `receiver.recv()` returns `None`, the final state is logged
//! 4. **Await completion** - the session awaits the actor task

pub mod config;
pub mod session;
pub mod tracing;

pub use self::config::*;
pub use self::session::*;
pub use self::tracing::setup_tracing;
