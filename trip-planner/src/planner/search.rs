//! Priority-ordered path search with sampled traffic.
//!
//! Finds the lowest traffic-adjusted travel time between two cities. A
//! fresh traffic label is drawn every time a route is relaxed, so the same
//! route can cost different amounts on different candidate paths within a
//! single search.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use ordered_float::OrderedFloat;
use tracing::{debug, trace};

use crate::domain::{DomainError, TripResult, TripSegment};
use crate::graph::CityGraph;
use crate::traffic::{DayType, TrafficModel, TrafficSampler};

use super::config::SearchConfig;

/// Error from path search.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    /// Unknown city or traffic label
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The priority queue outgrew `SearchConfig::max_queue_len`
    #[error("search aborted: queue exceeded {limit} nodes")]
    QueueLimitExceeded { limit: usize },

    /// The search popped more than `SearchConfig::max_nodes_popped` nodes
    #[error("search aborted: popped more than {limit} nodes")]
    PopLimitExceeded { limit: usize },
}

/// Outcome of a path search.
///
/// Finding no path is an expected result, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// A path was found
    Found(TripResult),
    /// The end city is unreachable from the start city
    NotFound,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    /// Returns the trip if one was found.
    pub fn trip(&self) -> Option<&TripResult> {
        match self {
            SearchOutcome::Found(trip) => Some(trip),
            SearchOutcome::NotFound => None,
        }
    }

    pub fn into_trip(self) -> Option<TripResult> {
        match self {
            SearchOutcome::Found(trip) => Some(trip),
            SearchOutcome::NotFound => None,
        }
    }
}

/// A candidate arrival at a city, waiting in the priority queue.
#[derive(Debug, Clone)]
struct SearchNode {
    /// Adjusted minutes accumulated to reach `city`.
    minutes: OrderedFloat<f64>,

    /// City this node arrives at.
    city: String,

    /// Cities visited before `city`.
    path: Vec<String>,

    /// One segment per hop taken so far, carrying its traffic label.
    segments: Vec<TripSegment>,
}

impl SearchNode {
    fn seed(city: &str) -> Self {
        Self {
            minutes: OrderedFloat(0.0),
            city: city.to_string(),
            path: Vec::new(),
            segments: Vec::new(),
        }
    }
}

// Ordered by accumulated minutes only, reversed so BinaryHeap pops the
// cheapest node first. Ties between equal-cost nodes are arbitrary.
impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other.minutes.cmp(&self.minutes)
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.minutes == other.minutes
    }
}

impl Eq for SearchNode {}

/// Counters describing the work done by one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped from the queue, including discarded ones.
    pub nodes_popped: usize,
    /// Nodes pushed onto the queue, including the seed.
    pub nodes_pushed: usize,
    /// Cities finalized.
    pub cities_finalized: usize,
}

/// Path finder over a city graph.
///
/// The graph and traffic model are only read, so one `PathFinder` can
/// serve concurrent searches as long as each brings its own sampler.
pub struct PathFinder<'a> {
    graph: &'a CityGraph,
    model: &'a TrafficModel,
    config: &'a SearchConfig,
}

impl<'a> PathFinder<'a> {
    /// Create a new path finder.
    pub fn new(graph: &'a CityGraph, model: &'a TrafficModel, config: &'a SearchConfig) -> Self {
        Self {
            graph,
            model,
            config,
        }
    }

    /// Search for the fastest path from `start` to `end`.
    ///
    /// `start == end` returns a zero-minute trip without searching. Traffic
    /// for every relaxed route is drawn from `sampler` and priced with the
    /// model's `day_type` table. `day_type` also sets each segment's fare,
    /// which has no effect on the path chosen.
    pub fn find_path<S>(
        &self,
        start: &str,
        end: &str,
        day_type: DayType,
        sampler: &mut S,
    ) -> Result<SearchOutcome, SearchError>
    where
        S: TrafficSampler + ?Sized,
    {
        self.find_path_with_stats(start, end, day_type, sampler)
            .map(|(outcome, _)| outcome)
    }

    /// Like [`PathFinder::find_path`], also returning search counters.
    pub fn find_path_with_stats<S>(
        &self,
        start: &str,
        end: &str,
        day_type: DayType,
        sampler: &mut S,
    ) -> Result<(SearchOutcome, SearchStats), SearchError>
    where
        S: TrafficSampler + ?Sized,
    {
        if !self.graph.contains(start) {
            return Err(DomainError::UnknownCity(start.to_string()).into());
        }
        if !self.graph.contains(end) {
            return Err(DomainError::UnknownCity(end.to_string()).into());
        }

        let mut stats = SearchStats::default();

        if start == end {
            return Ok((SearchOutcome::Found(TripResult::trivial(start)), stats));
        }

        let mut queue = BinaryHeap::new();
        let mut finalized: HashMap<String, OrderedFloat<f64>> = HashMap::new();

        queue.push(SearchNode::seed(start));
        stats.nodes_pushed = 1;

        while let Some(node) = queue.pop() {
            stats.nodes_popped += 1;
            if let Some(limit) = self
                .config
                .max_nodes_popped
                .filter(|&limit| stats.nodes_popped > limit)
            {
                return Err(SearchError::PopLimitExceeded { limit });
            }

            // Skip stale entries for cities already settled at least as cheaply
            if finalized
                .get(&node.city)
                .is_some_and(|&best| best <= node.minutes)
            {
                continue;
            }
            finalized.insert(node.city.clone(), node.minutes);
            stats.cities_finalized += 1;

            let SearchNode {
                minutes,
                city,
                mut path,
                segments,
            } = node;
            path.push(city.clone());

            trace!(
                city = %city,
                minutes = minutes.0,
                queued = queue.len(),
                "Finalized city"
            );

            if city == end {
                debug!(
                    start,
                    end,
                    minutes = minutes.0,
                    nodes_popped = stats.nodes_popped,
                    nodes_pushed = stats.nodes_pushed,
                    "Path found"
                );
                let trip = TripResult::new(minutes.0, path, segments)?;
                return Ok((SearchOutcome::Found(trip), stats));
            }

            for route in self.graph.routes_from(&city) {
                let traffic = sampler.sample();
                let multiplier = self.model.multiplier_for(day_type, &traffic)?;
                let adjusted = f64::from(route.duration_mins()) * multiplier;

                let mut next_segments = segments.clone();
                next_segments.push(TripSegment {
                    from: city.clone(),
                    to: route.destination().to_string(),
                    comfort: route.comfort(),
                    cost: route.cost(),
                    fare: route.fare(day_type),
                    base_minutes: route.duration_mins(),
                    adjusted_minutes: adjusted,
                    traffic,
                });

                queue.push(SearchNode {
                    minutes: OrderedFloat(minutes.0 + adjusted),
                    city: route.destination().to_string(),
                    path: path.clone(),
                    segments: next_segments,
                });
                stats.nodes_pushed += 1;

                if let Some(limit) = self
                    .config
                    .max_queue_len
                    .filter(|&limit| queue.len() > limit)
                {
                    return Err(SearchError::QueueLimitExceeded { limit });
                }
            }
        }

        debug!(
            start,
            end,
            nodes_popped = stats.nodes_popped,
            nodes_pushed = stats.nodes_pushed,
            "No path found"
        );
        Ok((SearchOutcome::NotFound, stats))
    }
}

/// Search for the fastest path with the default (unbounded) configuration.
pub fn find_path<S>(
    graph: &CityGraph,
    model: &TrafficModel,
    sampler: &mut S,
    start: &str,
    end: &str,
    day_type: DayType,
) -> Result<SearchOutcome, SearchError>
where
    S: TrafficSampler + ?Sized,
{
    let config = SearchConfig::default();
    PathFinder::new(graph, model, &config).find_path(start, end, day_type, sampler)
}
