//! A restaurant as delivered by the repository.
//!
//! Restaurants have no identity of their own; two records with the same fields are
//! interchangeable. They are never mutated after they arrive.
//!
//! The wire format keeps the coordinates flat on the record:
//!
//! ```json
//! { "name": "La Mar", "lat": -33.41, "lng": -70.60, "cuisine": 1 }
//! ```

use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// A WGS84 coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.5}, {:.5})", self.lat, self.lng)
    }
}

/// One map entry: where it is and what it serves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    #[serde(flatten)]
    pub position: LatLng,
    /// Cuisine category code. Codes without a known cuisine are kept as-is.
    pub cuisine: u32,
}

impl Restaurant {
    /// Creates a new Restaurant.
    ///
    /// # Arguments
    /// * `name` - Display name, used as the marker title
    /// * `lat`, `lng` - Position in degrees
    /// * `cuisine` - Category code (see [`CuisineFilter`](crate::model::CuisineFilter))
    pub fn new(name: impl Into<String>, lat: f64, lng: f64, cuisine: u32) -> Self {
        Self {
            name: name.into(),
            position: LatLng::new(lat, lng),
            cuisine,
        }
    }
}
