//! # Restaurant Map
//!
//! > **A cuisine-filtered restaurant map, driven by one long-lived controller.**
//!
//! A user picks a cuisine from a selection control; the restaurants of that cuisine are
//! fetched asynchronously and shown as markers on a map, with the camera framing them.
//! The selection and the last result live in a controller actor that outlives the UI, so
//! recreating the UI (a rotation, say) re-renders from memory instead of re-fetching.
//!
//! ## 🏗️ Design
//!
//! ### Single writer
//! [`SyncActor`](framework::SyncActor) owns the filter state, the last published
//! [`Resource`](framework::Resource) and the observer list. Client requests and fetch
//! completions are processed one at a time on its task, so none of that state needs a lock.
//!
//! ### Late binding
//! The data source is injected in `run()`, not in `new()`. The client exists before the
//! repository is built, which keeps wiring in [`lifecycle`] simple.
//!
//! ### Stale results
//! Every fetch is tagged with the filter it was issued for. A completion whose filter is
//! no longer selected is dropped, so a slow old fetch never overwrites a newer selection.
//!
//! ### Observability
//! `tracing` is used throughout. See [`lifecycle::tracing`] for the subscriber setup.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! Generic filter/fetch synchronization, independent of restaurants.
//! - **Key items**: [`FilteredSource`](framework::FilteredSource),
//!   [`SyncActor`](framework::SyncActor), [`SyncClient`](framework::SyncClient).
//!
//! ### 2. The Domain ([`model`], [`repository`])
//! [`Restaurant`](model::Restaurant), [`CuisineFilter`](model::CuisineFilter) and the
//! bundled [`SeedRepository`](repository::seed::SeedRepository).
//!
//! ### 3. The Interface ([`clients`])
//! [`RestaurantClient`](clients::RestaurantClient) wraps the generic client with
//! cuisine-specific entry points.
//!
//! ### 4. The Screen ([`map`], [`shell`])
//! [`MapRenderer`](map::MapRenderer) turns a restaurant list into markers and a camera
//! move; [`PresentationShell`](shell::PresentationShell) reacts to controller states.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`MapSession`](lifecycle::MapSession) starts the controller, builds shells and shuts
//! everything down.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod map;
pub mod model;
pub mod repository;
pub mod shell;
