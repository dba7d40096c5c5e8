//! # Observability & Tracing
//!
//! [`setup_tracing`] installs structured logging for the whole crate with the `tracing`
//! crate.
//!
//! ## Configuration
//!
//! The subscriber uses a compact format without the module prefix (`with_target(false)`)
//! and reads its filter from `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run      # filter changes, fetch results, session lifecycle
//! RUST_LOG=debug cargo run     # every publication, render and observer dispatch
//! RUST_LOG=trace cargo run     # stale results being discarded, icon fallbacks
//! ```
//!
//! ## What Gets Traced
//!
//! - **Controller lifecycle**: `Actor started`, `Shutdown` with the final selection
//! - **Filter changes**: `Filter selected` / `Filter unchanged` with the cuisine
//! - **Fetches**: each runs inside a `fetch` span; `Fetch ok` carries the item count,
//!   `Fetch failed` the reason
//! - **Rendering**: marker counts and camera padding
//!
//! A typical run with `RUST_LOG=info`:
//!
//! ```text
//! INFO Session started mailbox=32 default_filter=all
//! INFO Actor started
//! INFO Filter selected filter=all previous=None
//! INFO Fetch ok filter=all count=12
//! INFO Filter selected filter=peruvian previous=Some(CuisineFilter(0))
//! INFO Fetch ok filter=peruvian count=3
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
