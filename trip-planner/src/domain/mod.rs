//! Domain types for the trip planner.
//!
//! This module contains the core value types: cities, the routes between
//! them, and the trips the planner produces. Types enforce their invariants
//! at construction time, so code that receives them can trust their validity.

mod city;
mod comfort;
mod error;
mod trip;

pub use city::{City, Route};
pub use comfort::{Comfort, InvalidComfort};
pub use error::DomainError;
pub use trip::{TripResult, TripSegment};
