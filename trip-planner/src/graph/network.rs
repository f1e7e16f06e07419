//! Generated networks built from a table of road distances.

use std::collections::HashMap;

use rand::Rng;
use tracing::debug;

use super::CityGraph;
use crate::domain::{Comfort, DomainError};

/// Distance assumed for city pairs missing from a table (km).
pub const DEFAULT_FALLBACK_KM: u32 = 500;

/// Cost per kilometre of a generated route.
const COST_PER_KM: u32 = 15;

/// Approximate road distances between cities, in kilometres.
///
/// Lookups are symmetric. Pairs missing from the table fall back to a fixed
/// distance.
#[derive(Debug, Clone)]
pub struct DistanceTable {
    distances: HashMap<(String, String), u32>,
    fallback_km: u32,
}

impl DistanceTable {
    /// Create an empty table with the given fallback distance.
    pub fn new(fallback_km: u32) -> Self {
        Self {
            distances: HashMap::new(),
            fallback_km,
        }
    }

    /// Record the distance between two cities.
    pub fn insert(&mut self, a: &str, b: &str, km: u32) {
        self.distances.insert((a.to_string(), b.to_string()), km);
    }

    /// Distance between two cities: 0 for the same city, the recorded
    /// distance in either order, or the fallback.
    pub fn get(&self, a: &str, b: &str) -> u32 {
        if a == b {
            return 0;
        }
        self.distances
            .get(&(a.to_string(), b.to_string()))
            .or_else(|| self.distances.get(&(b.to_string(), a.to_string())))
            .copied()
            .unwrap_or(self.fallback_km)
    }

    /// Returns true if the pair is recorded (in either order).
    pub fn contains(&self, a: &str, b: &str) -> bool {
        self.distances.contains_key(&(a.to_string(), b.to_string()))
            || self.distances.contains_key(&(b.to_string(), a.to_string()))
    }

    /// Road distances between six major Indian cities.
    pub fn indian_cities() -> Self {
        let mut table = Self::new(DEFAULT_FALLBACK_KM);
        for (a, b, km) in [
            ("Coimbatore", "Palakkad", 40),
            ("Coimbatore", "Chennai", 500),
            ("Coimbatore", "Bangalore", 330),
            ("Coimbatore", "Mumbai", 1200),
            ("Coimbatore", "Delhi", 2200),
            ("Palakkad", "Chennai", 530),
            ("Palakkad", "Bangalore", 370),
            ("Palakkad", "Mumbai", 1240),
            ("Palakkad", "Delhi", 2240),
            ("Chennai", "Bangalore", 350),
            ("Chennai", "Mumbai", 1350),
            ("Chennai", "Delhi", 2180),
            ("Bangalore", "Mumbai", 980),
            ("Bangalore", "Delhi", 2150),
            ("Mumbai", "Delhi", 1400),
        ] {
            table.insert(a, b, km);
        }
        table
    }
}

impl Default for DistanceTable {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK_KM)
    }
}

/// Connect every pair of cities in the graph.
///
/// Pairs are visited in city insertion order. Each route takes one minute
/// per kilometre, costs 15 per kilometre, and gets a comfort class chosen
/// uniformly at random. Returns the number of routes added (one per pair).
pub fn fully_connected<R: Rng + ?Sized>(
    graph: &mut CityGraph,
    table: &DistanceTable,
    rng: &mut R,
) -> Result<usize, DomainError> {
    let names: Vec<String> = graph.list_cities().iter().map(|s| s.to_string()).collect();
    let mut added = 0;

    for (i, a) in names.iter().enumerate() {
        for b in &names[i + 1..] {
            if !table.contains(a, b) {
                debug!(from = %a, to = %b, km = table.fallback_km, "No recorded distance, using fallback");
            }
            let km = table.get(a, b);
            let comfort = Comfort::ALL[rng.random_range(0..Comfort::ALL.len())];
            graph.add_route(a, b, comfort, km.saturating_mul(COST_PER_KM), km)?;
            added += 1;
        }
    }

    Ok(added)
}

/// Create the six-city, fully connected network.
pub fn full_network<R: Rng + ?Sized>(rng: &mut R) -> Result<CityGraph, DomainError> {
    let mut graph = CityGraph::new();
    for city in [
        "Coimbatore",
        "Palakkad",
        "Chennai",
        "Bangalore",
        "Mumbai",
        "Delhi",
    ] {
        graph.add_city(city);
    }
    fully_connected(&mut graph, &DistanceTable::indian_cities(), rng)?;
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn lookup_is_symmetric() {
        let table = DistanceTable::indian_cities();
        assert_eq!(table.get("Coimbatore", "Palakkad"), 40);
        assert_eq!(table.get("Palakkad", "Coimbatore"), 40);
        assert!(table.contains("Delhi", "Mumbai"));
    }

    #[test]
    fn same_city_is_zero() {
        let table = DistanceTable::indian_cities();
        assert_eq!(table.get("Chennai", "Chennai"), 0);
    }

    #[test]
    fn unknown_pair_uses_fallback() {
        let table = DistanceTable::indian_cities();
        assert!(!table.contains("Chennai", "Kochi"));
        assert_eq!(table.get("Chennai", "Kochi"), DEFAULT_FALLBACK_KM);

        let table = DistanceTable::new(42);
        assert_eq!(table.get("A", "B"), 42);
    }

    #[test]
    fn fully_connected_adds_every_pair() {
        let mut graph = CityGraph::new();
        for city in ["A", "B", "C", "D"] {
            graph.add_city(city);
        }
        let mut table = DistanceTable::new(100);
        table.insert("A", "B", 10);

        let mut rng = StdRng::seed_from_u64(7);
        let added = fully_connected(&mut graph, &table, &mut rng).unwrap();

        assert_eq!(added, 6);
        assert_eq!(graph.route_count(), 12);

        let ab = graph.get_city("A").unwrap().route_to("B").unwrap();
        assert_eq!(ab.duration_mins(), 10);
        assert_eq!(ab.cost(), 150);

        let cd = graph.get_city("D").unwrap().route_to("C").unwrap();
        assert_eq!(cd.duration_mins(), 100);
        assert_eq!(cd.cost(), 1500);
    }

    #[test]
    fn fully_connected_rejects_zero_distance() {
        let mut graph = CityGraph::new();
        graph.add_city("A");
        graph.add_city("B");
        let mut table = DistanceTable::new(100);
        table.insert("A", "B", 0);

        let mut rng = StdRng::seed_from_u64(7);
        let err = fully_connected(&mut graph, &table, &mut rng).unwrap_err();
        assert!(matches!(err, DomainError::NonPositiveDuration { .. }));
    }

    #[test]
    fn full_network_is_complete() {
        let mut rng = StdRng::seed_from_u64(1);
        let graph = full_network(&mut rng).unwrap();

        assert_eq!(graph.len(), 6);
        assert_eq!(graph.route_count(), 30);
        for city in graph.cities() {
            assert_eq!(city.routes().len(), 5);
        }
        let route = graph.get_city("Mumbai").unwrap().route_to("Delhi").unwrap();
        assert_eq!(route.duration_mins(), 1400);
        assert_eq!(route.cost(), 21000);
    }
}
