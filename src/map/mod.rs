//! # Map Rendering
//!
//! Projects a list of restaurants onto a [`MapSurface`]: one marker per restaurant, an
//! icon per cuisine, and a camera move framing all of them.
//!
//! - [`MapSurface`] - the map widget seam (markers and camera)
//! - [`IconResolver`] - cuisine code to marker icon
//! - [`LatLngBounds`] - axis-aligned bounding region of marker positions
//! - [`MapRenderer`] - the render cycle and the marker bindings it produces
//!
//! [`mock`] has a recording surface for tests.

pub mod bounds;
pub mod icons;
pub mod mock;
pub mod renderer;
pub mod surface;

pub use bounds::{LatLngBounds, LatLngBoundsBuilder};
pub use icons::{CuisineIcons, IconResolver, MarkerIcon};
pub use renderer::{MapRenderer, MarkerBinding, DEFAULT_CAMERA_PADDING};
pub use surface::{MapSurface, MarkerHandle, MarkerOptions};
