//! Marker icons per cuisine.

use crate::model::CuisineFilter;

/// A renderable marker image, identified by its asset name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MarkerIcon {
    pub asset: String,
}

impl MarkerIcon {
    pub fn new(asset: impl Into<String>) -> Self {
        Self {
            asset: asset.into(),
        }
    }
}

/// Maps a cuisine code to a marker icon. `None` means "use the default marker".
pub trait IconResolver: Send {
    fn resolve(&self, cuisine: u32) -> Option<MarkerIcon>;
}

impl<F> IconResolver for F
where
    F: Fn(u32) -> Option<MarkerIcon> + Send,
{
    fn resolve(&self, cuisine: u32) -> Option<MarkerIcon> {
        self(cuisine)
    }
}

/// Flag icons for the cuisines the app knows about.
#[derive(Debug, Clone, Copy, Default)]
pub struct CuisineIcons;

impl IconResolver for CuisineIcons {
    fn resolve(&self, cuisine: u32) -> Option<MarkerIcon> {
        let asset = match CuisineFilter::try_from(cuisine).ok()? {
            CuisineFilter::PERUVIAN => "ic_peru",
            CuisineFilter::ITALIAN => "ic_italy",
            CuisineFilter::CHILEAN => "ic_chile",
            _ => return None,
        };
        Some(MarkerIcon::new(asset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_cuisines_have_flags() {
        assert_eq!(CuisineIcons.resolve(1), Some(MarkerIcon::new("ic_peru")));
        assert_eq!(CuisineIcons.resolve(2), Some(MarkerIcon::new("ic_italy")));
        assert_eq!(CuisineIcons.resolve(3), Some(MarkerIcon::new("ic_chile")));
    }

    #[test]
    fn test_sentinel_and_unknown_codes_are_unresolved() {
        assert_eq!(CuisineIcons.resolve(0), None);
        assert_eq!(CuisineIcons.resolve(4), None);
    }
}
