//! Axis-aligned bounding regions over marker positions.

use crate::model::LatLng;

/// The tightest axis-aligned rectangle containing a set of positions.
///
/// Longitudes are compared as plain numbers; a set straddling the antimeridian gets a
/// rectangle spanning the long way round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLngBounds {
    pub southwest: LatLng,
    pub northeast: LatLng,
}

impl LatLngBounds {
    pub fn contains(&self, point: LatLng) -> bool {
        (self.southwest.lat..=self.northeast.lat).contains(&point.lat)
            && (self.southwest.lng..=self.northeast.lng).contains(&point.lng)
    }

    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.southwest.lat + self.northeast.lat) / 2.0,
            (self.southwest.lng + self.northeast.lng) / 2.0,
        )
    }
}

/// Accumulates positions into a [`LatLngBounds`].
///
/// `build` returns `None` when nothing was included, since an empty region has no
/// meaningful camera target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatLngBoundsBuilder {
    bounds: Option<LatLngBounds>,
}

impl LatLngBoundsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include(&mut self, point: LatLng) -> &mut Self {
        self.bounds = Some(match self.bounds {
            None => LatLngBounds {
                southwest: point,
                northeast: point,
            },
            Some(b) => LatLngBounds {
                southwest: LatLng::new(b.southwest.lat.min(point.lat), b.southwest.lng.min(point.lng)),
                northeast: LatLng::new(b.northeast.lat.max(point.lat), b.northeast.lng.max(point.lng)),
            },
        });
        self
    }

    pub fn build(&self) -> Option<LatLngBounds> {
        self.bounds
    }
}
