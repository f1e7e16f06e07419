//! The city network.
//!
//! Cities are connected by bidirectional routes. This module provides
//! lookup for cities by name, adjacency iteration for the planner, and the
//! fixed topologies the application is set up with.

mod network;

pub use network::{DistanceTable, full_network, fully_connected};

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::domain::{City, Comfort, DomainError, Route};

/// A collection of cities and the routes between them.
///
/// Cities are kept in insertion order so they can be listed the way they
/// were registered, while lookup by name stays O(1). Routes are symmetric:
/// adding a route from A to B also adds one from B to A with the same
/// comfort, cost and duration.
#[derive(Debug, Clone, Default)]
pub struct CityGraph {
    cities: IndexMap<String, City>,
}

impl CityGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a city with no routes.
    ///
    /// Adding a name that is already present is a no-op. Returns `true` if
    /// the city was inserted.
    pub fn add_city(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.cities.contains_key(&name) {
            debug!(city = %name, "City already registered, ignoring");
            return false;
        }
        self.cities.insert(name.clone(), City::new(name));
        true
    }

    /// Add a route between two existing cities.
    ///
    /// Registers the route in both directions. Both cities are checked
    /// before anything is changed, so a failed call leaves the graph as it
    /// was.
    pub fn add_route(
        &mut self,
        a: &str,
        b: &str,
        comfort: Comfort,
        cost: u32,
        duration_mins: u32,
    ) -> Result<(), DomainError> {
        if !self.cities.contains_key(a) {
            return Err(DomainError::UnknownCity(a.to_string()));
        }
        if !self.cities.contains_key(b) {
            return Err(DomainError::UnknownCity(b.to_string()));
        }
        if duration_mins == 0 {
            return Err(DomainError::NonPositiveDuration {
                from: a.to_string(),
                to: b.to_string(),
            });
        }

        if let Some(origin) = self.cities.get_mut(a) {
            origin.push_route(Route::new(b, comfort, cost, duration_mins));
        }
        if let Some(destination) = self.cities.get_mut(b) {
            destination.push_route(Route::new(a, comfort, cost, duration_mins));
        }
        Ok(())
    }

    /// Look up a city by exact name.
    pub fn get_city(&self, name: &str) -> Option<&City> {
        self.cities.get(name)
    }

    /// Check whether a city is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.cities.contains_key(name)
    }

    /// City names in the order they were added.
    pub fn list_cities(&self) -> Vec<&str> {
        self.cities.keys().map(String::as_str).collect()
    }

    /// Routes leaving a city, in registration order.
    ///
    /// Returns an empty slice for unknown cities.
    pub fn routes_from(&self, name: &str) -> &[Route] {
        self.cities.get(name).map(City::routes).unwrap_or_default()
    }

    /// Iterate over all cities in insertion order.
    pub fn cities(&self) -> impl Iterator<Item = &City> {
        self.cities.values()
    }

    /// Returns the number of cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns true if there are no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Returns the number of directed routes (each `add_route` counts twice).
    pub fn route_count(&self) -> usize {
        self.cities.values().map(|c| c.routes().len()).sum()
    }
}

/// Builder for creating city graphs.
///
/// Provides a fluent API for the fixed topologies the application is set
/// up with. Routes that the graph rejects are logged and skipped.
#[derive(Debug, Default)]
pub struct CityGraphBuilder {
    inner: CityGraph,
}

impl CityGraphBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a city.
    pub fn city(mut self, name: &str) -> Self {
        self.inner.add_city(name);
        self
    }

    /// Add a bidirectional route.
    pub fn route(mut self, a: &str, b: &str, comfort: Comfort, cost: u32, minutes: u32) -> Self {
        if let Err(e) = self.inner.add_route(a, b, comfort, cost, minutes) {
            warn!(from = a, to = b, error = %e, "Skipping invalid route");
        }
        self
    }

    /// Build the graph.
    pub fn build(self) -> CityGraph {
        self.inner
    }
}

/// Create the default four-city network.
///
/// Coimbatore, Palakkad, Chennai and Bangalore joined in a ring.
pub fn seed_network() -> CityGraph {
    CityGraphBuilder::new()
        .city("Coimbatore")
        .city("Palakkad")
        .city("Chennai")
        .city("Bangalore")
        .route("Coimbatore", "Palakkad", Comfort::Premium, 350, 90)
        .route("Palakkad", "Chennai", Comfort::Economy, 800, 420)
        .route("Chennai", "Bangalore", Comfort::Premium, 1000, 360)
        .route("Bangalore", "Coimbatore", Comfort::Economy, 900, 390)
        .build()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Re-adding any subset of names leaves the listing unchanged
        #[test]
        fn add_city_idempotent(
            names in proptest::collection::vec("[A-Z][a-z]{1,6}", 0..12),
            repeats in proptest::collection::vec(any::<proptest::sample::Index>(), 0..12),
        ) {
            let mut graph = CityGraph::new();
            for name in &names {
                graph.add_city(name.as_str());
            }
            let before: Vec<String> = graph.list_cities().iter().map(|s| s.to_string()).collect();

            if !names.is_empty() {
                for idx in &repeats {
                    let name = idx.get(&names);
                    prop_assert!(!graph.add_city(name.as_str()));
                }
            }

            let after: Vec<String> = graph.list_cities().iter().map(|s| s.to_string()).collect();
            prop_assert_eq!(before, after);
        }

        /// Every successful add_route adds exactly two directed routes
        #[test]
        fn add_route_adds_two_edges(
            pairs in proptest::collection::vec((0usize..5, 0usize..5, 1u32..500), 0..20),
        ) {
            let mut graph = CityGraph::new();
            for i in 0..5 {
                graph.add_city(format!("C{i}"));
            }

            for (a, b, minutes) in pairs {
                let before = graph.route_count();
                graph
                    .add_route(&format!("C{a}"), &format!("C{b}"), Comfort::Economy, 0, minutes)
                    .unwrap();
                prop_assert_eq!(graph.route_count(), before + 2);
            }
        }
    }
}
