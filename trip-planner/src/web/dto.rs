//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{TripResult, TripSegment};
use crate::traffic::DayType;

/// Request to plan a route between two cities.
#[derive(Debug, Deserialize)]
pub struct PlanRouteRequest {
    /// Departure city name
    pub departure: String,

    /// Destination city name
    pub destination: String,
}

/// One hop of a planned route.
#[derive(Debug, Serialize)]
pub struct SegmentResult {
    /// City the hop departs from
    pub start: String,

    /// City the hop arrives at
    pub end: String,

    /// Comfort class name
    pub comfort: String,

    /// Ticket price before adjustment
    pub cost: u32,

    /// Price paid, rounded to two decimal places
    pub fare: f64,

    /// Traffic-adjusted duration in whole minutes
    pub duration: u64,

    /// Traffic label applied to this hop
    pub traffic: String,
}

impl From<&TripSegment> for SegmentResult {
    fn from(segment: &TripSegment) -> Self {
        Self {
            start: segment.from.clone(),
            end: segment.to.clone(),
            comfort: segment.comfort.to_string(),
            cost: segment.cost,
            fare: round_cents(segment.fare),
            duration: segment.adjusted_minutes as u64,
            traffic: segment.traffic.clone(),
        }
    }
}

/// A planned route.
#[derive(Debug, Serialize)]
pub struct PlanRouteResponse {
    /// Cities from departure to destination, inclusive
    pub route: Vec<String>,

    /// One entry per hop
    pub segments: Vec<SegmentResult>,

    /// Total traffic-adjusted time in whole minutes
    pub total_time: u64,

    /// Sum of fares, rounded to two decimal places
    pub total_cost: f64,

    /// Mean comfort score, rounded to one decimal place
    pub comfort_rating: f64,

    /// "weekday" or "weekend"
    pub day_type: String,
}

impl PlanRouteResponse {
    /// Build a response from a trip and the day type it was priced for.
    pub fn from_trip(trip: &TripResult, day_type: DayType) -> Self {
        Self {
            route: trip.path().to_vec(),
            segments: trip.segments().iter().map(SegmentResult::from).collect(),
            total_time: trip.whole_minutes(),
            total_cost: round_cents(trip.total_cost()),
            comfort_rating: (trip.comfort_rating() * 10.0).round() / 10.0,
            day_type: day_type.to_string(),
        }
    }
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
