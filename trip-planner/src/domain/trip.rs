//! Trip types.
//!
//! A `TripResult` is the outcome of a successful path search: the cities
//! visited from start to end, and for every hop the traffic condition that
//! was sampled and the travel time it produced.

use super::{Comfort, DomainError};

/// One hop of a trip between two adjacent cities.
#[derive(Debug, Clone, PartialEq)]
pub struct TripSegment {
    /// City the hop departs from
    pub from: String,
    /// City the hop arrives at
    pub to: String,
    /// Comfort class of the route taken
    pub comfort: Comfort,
    /// Ticket price of the route taken
    pub cost: u32,
    /// Price paid for this hop after comfort and day-type adjustment
    pub fare: f64,
    /// Route duration before traffic adjustment (minutes)
    pub base_minutes: u32,
    /// Route duration after traffic adjustment (minutes)
    pub adjusted_minutes: f64,
    /// Traffic label sampled for this hop
    pub traffic: String,
}

/// A planned trip from start to end.
///
/// # Invariants
///
/// - The path has at least one city
/// - There is exactly one segment (and so one traffic label) per
///   consecutive pair of cities in the path
/// - Segment `i` runs from `path[i]` to `path[i + 1]`
#[derive(Debug, Clone, PartialEq)]
pub struct TripResult {
    total_minutes: f64,
    path: Vec<String>,
    traffic: Vec<String>,
    segments: Vec<TripSegment>,
}

impl TripResult {
    /// Constructs a trip, validating that the segments follow the path.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - The path is empty
    /// - The number of segments is not `path.len() - 1`
    /// - A segment's endpoints don't match the cities around it in the path
    pub fn new(
        total_minutes: f64,
        path: Vec<String>,
        segments: Vec<TripSegment>,
    ) -> Result<Self, DomainError> {
        if path.is_empty() {
            return Err(DomainError::InvalidTrip("path must not be empty"));
        }
        if segments.len() != path.len() - 1 {
            return Err(DomainError::InvalidTrip(
                "need exactly one segment per hop in the path",
            ));
        }
        let connected = segments
            .iter()
            .zip(path.windows(2))
            .all(|(segment, hop)| segment.from == hop[0] && segment.to == hop[1]);
        if !connected {
            return Err(DomainError::InvalidTrip("segments do not follow the path"));
        }

        let traffic = segments.iter().map(|s| s.traffic.clone()).collect();

        Ok(Self {
            total_minutes,
            path,
            traffic,
            segments,
        })
    }

    /// A zero-length trip that starts and ends at `city`.
    pub fn trivial(city: impl Into<String>) -> Self {
        Self {
            total_minutes: 0.0,
            path: vec![city.into()],
            traffic: Vec::new(),
            segments: Vec::new(),
        }
    }

    /// Total traffic-adjusted travel time in minutes.
    pub fn total_minutes(&self) -> f64 {
        self.total_minutes
    }

    /// Total travel time truncated to whole minutes.
    pub fn whole_minutes(&self) -> u64 {
        self.total_minutes as u64
    }

    /// Cities from start to end, inclusive.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Traffic label applied to each hop, in travel order.
    pub fn traffic_labels(&self) -> &[String] {
        &self.traffic
    }

    pub fn segments(&self) -> &[TripSegment] {
        &self.segments
    }

    pub fn origin(&self) -> &str {
        &self.path[0]
    }

    pub fn destination(&self) -> &str {
        &self.path[self.path.len() - 1]
    }

    /// Number of hops.
    pub fn hop_count(&self) -> usize {
        self.segments.len()
    }

    /// Sum of the fares paid for every hop.
    pub fn total_cost(&self) -> f64 {
        self.segments.iter().fold(0.0, |total, s| total + s.fare)
    }

    /// Sum of the unadjusted ticket prices of every hop.
    pub fn base_cost(&self) -> u64 {
        self.segments.iter().map(|s| u64::from(s.cost)).sum()
    }

    /// Mean comfort score over all hops, or 0.0 for a trivial trip.
    pub fn comfort_rating(&self) -> f64 {
        if self.segments.is_empty() {
            return 0.0;
        }
        let total: u32 = self
            .segments
            .iter()
            .map(|s| u32::from(s.comfort.comfort_score()))
            .sum();
        f64::from(total) / self.segments.len() as f64
    }
}
