//! # Restaurant Repository
//!
//! A [`RestaurantRepository`] is any [`FilteredSource`] that takes a [`CuisineFilter`]
//! and yields [`Restaurant`]s. The controller only ever sees it through that trait, so
//! a network client, the bundled [`SeedRepository`] and the test
//! [`MockSource`](crate::framework::mock::MockSource) are interchangeable.

pub mod seed;

pub use seed::SeedRepository;

use crate::framework::FilteredSource;
use crate::model::{CuisineFilter, Restaurant};

/// Source of restaurants narrowed by cuisine. [`CuisineFilter::ALL`] means every restaurant.
pub trait RestaurantRepository: FilteredSource<Filter = CuisineFilter, Item = Restaurant> {}

impl<S> RestaurantRepository for S where S: FilteredSource<Filter = CuisineFilter, Item = Restaurant> {}
