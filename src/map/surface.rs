//! The map widget seam.

use crate::map::bounds::LatLngBounds;
use crate::map::icons::MarkerIcon;
use crate::model::LatLng;
use std::fmt::Display;

/// Opaque identifier of a marker placed on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerHandle(pub u64);

impl Display for MarkerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "marker_{}", self.0)
    }
}

/// Everything needed to place one marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerOptions {
    pub position: LatLng,
    pub title: String,
    /// `None` renders the surface's default marker.
    pub icon: Option<MarkerIcon>,
}

/// The operations the renderer needs from a map widget.
///
/// Implementations own rendering and camera animation; the renderer only issues
/// commands. Readiness of the widget is signalled to the
/// [`PresentationShell`](crate::shell::PresentationShell), not through this trait.
pub trait MapSurface: Send {
    /// Removes every marker currently on the surface.
    fn clear_markers(&mut self);

    /// Places a marker and returns its handle.
    fn add_marker(&mut self, options: MarkerOptions) -> MarkerHandle;

    /// Animates the camera so `bounds` is visible with `padding` pixels of inset.
    fn animate_camera_to_bounds(&mut self, bounds: LatLngBounds, padding: u32);
}

impl<S: MapSurface + ?Sized> MapSurface for Box<S> {
    fn clear_markers(&mut self) {
        (**self).clear_markers()
    }

    fn add_marker(&mut self, options: MarkerOptions) -> MarkerHandle {
        (**self).add_marker(options)
    }

    fn animate_camera_to_bounds(&mut self, bounds: LatLngBounds, padding: u32) {
        (**self).animate_camera_to_bounds(bounds, padding)
    }
}
