//! # Map Renderer
//!
//! Each [`MapRenderer::render`] call is a full render cycle:
//!
//! 1. Clear every marker on the surface and forget the previous bindings.
//! 2. Stop there if the list is empty; an empty region has no camera target.
//! 3. Place one marker per restaurant, resolving its icon by cuisine. Unresolved
//!    cuisines get the default marker.
//! 4. Grow an axis-aligned bounding region over the marker positions.
//! 5. Animate the camera to that region with a fixed padding.
//!
//! Nothing is diffed or reused between cycles. The bindings from the last cycle are kept
//! only so marker taps can be mapped back to their restaurant.

use crate::map::bounds::{LatLngBounds, LatLngBoundsBuilder};
use crate::map::icons::IconResolver;
use crate::map::surface::{MapSurface, MarkerHandle, MarkerOptions};
use crate::model::Restaurant;
use tracing::{debug, trace};

/// Inset, in pixels, between the framed markers and the edge of the map.
pub const DEFAULT_CAMERA_PADDING: u32 = 40;

/// A restaurant and the marker that shows it, valid until the next render.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerBinding {
    pub handle: MarkerHandle,
    pub restaurant: Restaurant,
}

pub struct MapRenderer<I> {
    icons: I,
    padding: u32,
    bindings: Vec<MarkerBinding>,
}

impl<I: IconResolver> MapRenderer<I> {
    pub fn new(icons: I) -> Self {
        Self {
            icons,
            padding: DEFAULT_CAMERA_PADDING,
            bindings: Vec::new(),
        }
    }

    pub fn with_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    pub fn padding(&self) -> u32 {
        self.padding
    }

    /// Replaces everything on `surface` with markers for `restaurants`.
    ///
    /// Returns the region the camera was moved to, or `None` when the list was empty
    /// and the camera was left alone.
    pub fn render<S>(&mut self, restaurants: &[Restaurant], surface: &mut S) -> Option<LatLngBounds>
    where
        S: MapSurface + ?Sized,
    {
        surface.clear_markers();
        self.bindings.clear();

        if restaurants.is_empty() {
            debug!("Cleared markers, nothing to frame");
            return None;
        }

        let mut builder = LatLngBoundsBuilder::new();
        self.bindings = restaurants
            .iter()
            .map(|restaurant| {
                let icon = self.icons.resolve(restaurant.cuisine);
                if icon.is_none() {
                    trace!(cuisine = restaurant.cuisine, name = %restaurant.name, "Default icon");
                }
                let handle = surface.add_marker(MarkerOptions {
                    position: restaurant.position,
                    title: restaurant.name.clone(),
                    icon,
                });
                builder.include(restaurant.position);
                MarkerBinding {
                    handle,
                    restaurant: restaurant.clone(),
                }
            })
            .collect();

        let bounds = builder.build()?;
        surface.animate_camera_to_bounds(bounds, self.padding);
        debug!(markers = self.bindings.len(), padding = self.padding, "Rendered");
        Some(bounds)
    }

    pub fn bindings(&self) -> &[MarkerBinding] {
        &self.bindings
    }

    /// The restaurant shown by `handle` in the current cycle.
    pub fn restaurant_for(&self, handle: MarkerHandle) -> Option<&Restaurant> {
        self.bindings
            .iter()
            .find(|binding| binding.handle == handle)
            .map(|binding| &binding.restaurant)
    }

    /// Acknowledges a marker tap. The tap is always consumed.
    pub fn on_marker_click(&self, handle: MarkerHandle) -> bool {
        match self.restaurant_for(handle) {
            Some(restaurant) => debug!(%handle, name = %restaurant.name, "Marker tapped"),
            None => debug!(%handle, "Tap on stale marker"),
        }
        true
    }
}
