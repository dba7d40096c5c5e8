//! In-memory repository backed by the bundled restaurant data set.

use crate::framework::{FetchError, FilteredSource};
use crate::model::{CuisineFilter, Restaurant};
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, instrument};

const BUNDLED: &str = include_str!("../../data/restaurants.json");

/// Serves restaurants from memory, optionally with artificial latency or failures.
///
/// Latency and failures exist for demos and tests: they make the asynchronous and error
/// paths of the controller observable without a network.
#[derive(Debug, Clone)]
pub struct SeedRepository {
    restaurants: Vec<Restaurant>,
    latency: Option<Duration>,
    failures: HashMap<CuisineFilter, String>,
}

impl SeedRepository {
    pub fn new(restaurants: Vec<Restaurant>) -> Self {
        Self {
            restaurants,
            latency: None,
            failures: HashMap::new(),
        }
    }

    /// The twelve restaurants shipped with the crate.
    pub fn bundled() -> Result<Self, FetchError> {
        Self::from_json(BUNDLED)
    }

    /// Parses a JSON array of restaurants.
    pub fn from_json(json: &str) -> Result<Self, FetchError> {
        let restaurants: Vec<Restaurant> = serde_json::from_str(json)?;
        Ok(Self::new(restaurants))
    }

    /// Delays every fetch by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Makes every fetch for `filter` fail with a transport error carrying `reason`.
    pub fn failing_for(mut self, filter: CuisineFilter, reason: impl Into<String>) -> Self {
        self.failures.insert(filter, reason.into());
        self
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }
}

#[async_trait]
impl FilteredSource for SeedRepository {
    type Filter = CuisineFilter;
    type Item = Restaurant;

    #[instrument(skip(self))]
    async fn fetch(&self, filter: CuisineFilter) -> Result<Vec<Restaurant>, FetchError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        if let Some(reason) = self.failures.get(&filter) {
            return Err(FetchError::Transport(reason.clone()));
        }

        let matching: Vec<Restaurant> = self
            .restaurants
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect();
        debug!(count = matching.len(), "Served");
        Ok(matching)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_data_set_loads() {
        let repo = SeedRepository::bundled().unwrap();
        assert_eq!(repo.len(), 12);
    }

    #[tokio::test]
    async fn test_fetch_filters_by_cuisine() {
        let repo = SeedRepository::bundled().unwrap();

        let all = repo.fetch(CuisineFilter::ALL).await.unwrap();
        assert_eq!(all.len(), 12);

        let peruvian = repo.fetch(CuisineFilter::PERUVIAN).await.unwrap();
        assert_eq!(peruvian.len(), 3);
        assert!(peruvian.iter().all(|r| r.cuisine == 1));
    }

    #[tokio::test]
    async fn test_injected_failure_is_a_transport_error() {
        let repo = SeedRepository::bundled()
            .unwrap()
            .failing_for(CuisineFilter::ITALIAN, "connection reset");

        let result = repo.fetch(CuisineFilter::ITALIAN).await;
        assert_eq!(
            result,
            Err(FetchError::Transport("connection reset".to_string()))
        );
        assert!(repo.fetch(CuisineFilter::CHILEAN).await.is_ok());
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let result = SeedRepository::from_json("[{ \"name\": 1 }]");
        assert!(matches!(result, Err(FetchError::Parse(_))));
    }
}
