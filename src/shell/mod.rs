//! # Presentation Shell
//!
//! The shell is the transient, UI-side half of the system. It owns the map surface, the
//! loading indicator, the error notification and the cuisine selection control. The
//! controller outlives it: when the UI is recreated (a rotation, say), the old shell is
//! [`detach`](PresentationShell::detach)ed and a new one attaches to the same
//! [`RestaurantClient`], receiving the current state by replay instead of re-fetching.
//!
//! ## Readiness
//!
//! The selection control starts disabled. Only after
//! [`on_surface_ready`](PresentationShell::on_surface_ready) does the shell subscribe,
//! enable the control and, on a fresh controller, select the default cuisine. Selections
//! before that are refused so nothing renders against a map that is not loaded yet.
//!
//! ## Teardown
//!
//! [`detach`](PresentationShell::detach) unsubscribes and waits for the controller to
//! confirm. A shell that is simply dropped stops drawing at once (its observer only holds
//! a weak reference to the screen) and unsubscribes in the background.
//!
//! ## Dispatch
//!
//! | State | Indicator | Map | Error notification |
//! |-------|-----------|-----|--------------------|
//! | Loading | shown | untouched | dismissed |
//! | Success | hidden | rendered, unless the list is empty | untouched |
//! | Error | hidden | untouched | shows the reason |

pub mod error;
pub mod mock;

pub use error::ShellError;

use crate::clients::RestaurantClient;
use crate::framework::{FilterOutcome, Resource, SubscriptionId};
use crate::map::{IconResolver, MapRenderer, MapSurface, MarkerHandle};
use crate::model::{CuisineFilter, Restaurant};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use tracing::{debug, info, instrument, warn};

/// Widgets around the map that react to controller state.
pub trait ShellView: Send {
    fn show_loading(&mut self);
    fn hide_loading(&mut self);
    /// Shows a transient, dismissible notification.
    fn show_error(&mut self, reason: &str);
    fn dismiss_error(&mut self);
    fn set_selection_enabled(&mut self, enabled: bool);
}

/// UI state touched by the observer. The observer runs on the controller task, so it
/// sits behind a mutex shared with the shell.
struct Screen<S, I, V> {
    surface: S,
    renderer: MapRenderer<I>,
    view: V,
}

impl<S, I, V> Screen<S, I, V>
where
    S: MapSurface,
    I: IconResolver,
    V: ShellView,
{
    fn dispatch(&mut self, state: &Resource<Restaurant>) {
        match state {
            Resource::Loading => {
                debug!("observer -> LOADING");
                self.view.dismiss_error();
                self.view.show_loading();
            }
            Resource::Success(restaurants) => {
                debug!(count = restaurants.len(), "observer -> SUCCESS");
                self.view.hide_loading();
                if !restaurants.is_empty() {
                    self.renderer.render(restaurants, &mut self.surface);
                }
            }
            Resource::Error(e) => {
                debug!(error = %e, "observer -> ERROR");
                self.view.hide_loading();
                self.view.show_error(&e.to_string());
            }
        }
    }
}

pub struct PresentationShell<S, I, V> {
    client: RestaurantClient,
    screen: Arc<Mutex<Screen<S, I, V>>>,
    default_filter: CuisineFilter,
    subscription: Option<SubscriptionId>,
    ready: bool,
}

impl<S, I, V> PresentationShell<S, I, V>
where
    S: MapSurface + 'static,
    I: IconResolver + 'static,
    V: ShellView + 'static,
{
    /// Creates a shell over `surface` with the selection control disabled.
    pub fn new(client: RestaurantClient, surface: S, renderer: MapRenderer<I>, mut view: V) -> Self {
        view.set_selection_enabled(false);
        Self {
            client,
            screen: Arc::new(Mutex::new(Screen {
                surface,
                renderer,
                view,
            })),
            default_filter: CuisineFilter::ALL,
            subscription: None,
            ready: false,
        }
    }

    /// The cuisine selected when the shell attaches to a fresh controller.
    pub fn with_default_filter(mut self, filter: CuisineFilter) -> Self {
        self.default_filter = filter;
        self
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Called once the map surface has finished loading. Later calls are ignored.
    #[instrument(skip(self))]
    pub async fn on_surface_ready(&mut self) -> Result<(), ShellError> {
        if self.ready {
            warn!("Surface readiness reported twice, ignoring");
            return Ok(());
        }
        self.ready = true;

        let screen: Weak<Mutex<Screen<S, I, V>>> = Arc::downgrade(&self.screen);
        let id = self
            .client
            .subscribe(move |state| {
                if let Some(screen) = screen.upgrade() {
                    lock(&screen).dispatch(state);
                }
            })
            .await?;
        self.subscription = Some(id);

        lock(&self.screen).view.set_selection_enabled(true);

        // First attachment picks the default; a recreated shell keeps what the
        // controller already holds.
        self.client.ensure_initialized(self.default_filter).await?;
        info!(subscription = %id, "Shell attached");
        Ok(())
    }

    /// Forwards a selection from the cuisine control.
    #[instrument(skip(self))]
    pub async fn select_filter(&self, index: u32) -> Result<FilterOutcome, ShellError> {
        if !self.ready {
            return Err(ShellError::SurfaceNotReady);
        }
        Ok(self.client.select_code(index).await?)
    }

    /// Handles a tap on a marker. Always consumed.
    pub fn on_marker_click(&self, handle: MarkerHandle) -> bool {
        lock(&self.screen).renderer.on_marker_click(handle)
    }

    /// Handles of the markers from the latest render, in placement order.
    pub fn marker_handles(&self) -> Vec<MarkerHandle> {
        lock(&self.screen)
            .renderer
            .bindings()
            .iter()
            .map(|binding| binding.handle)
            .collect()
    }

    /// The restaurant behind a marker from the latest render.
    pub fn restaurant_for(&self, handle: MarkerHandle) -> Option<Restaurant> {
        lock(&self.screen).renderer.restaurant_for(handle).cloned()
    }

    /// Tears the shell down, leaving the controller and its state untouched.
    #[instrument(skip(self))]
    pub async fn detach(mut self) -> Result<(), ShellError> {
        if let Some(id) = self.subscription.take() {
            self.client.unsubscribe(id).await?;
            info!(subscription = %id, "Shell detached");
        }
        Ok(())
    }
}

impl<S, I, V> Drop for PresentationShell<S, I, V> {
    fn drop(&mut self) {
        let Some(id) = self.subscription.take() else {
            return;
        };
        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                debug!(subscription = %id, "Shell dropped without detach, unsubscribing");
                let client = self.client.clone();
                runtime.spawn(async move {
                    let _ = client.unsubscribe(id).await;
                });
            }
            Err(_) => warn!(subscription = %id, "Shell dropped outside a runtime"),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
