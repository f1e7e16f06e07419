//! Traffic conditions.
//!
//! Every route relaxation during a search samples a traffic label, and the
//! traffic model turns that label into a multiplier on the route's base
//! duration. Which multiplier table applies depends on whether the trip is
//! on a weekday or at the weekend.

mod clock;
mod model;
mod sampler;

pub use clock::{Clock, FixedClock, SystemClock};
pub use model::{DayType, TrafficModel, TrafficModelError};
pub use sampler::{RandomSampler, ScriptedSampler, TrafficSampler};
