//! Path planner using a priority-ordered search.
//!
//! This module implements the core planning algorithm that answers:
//! "what is the fastest way from this city to that one, given today's
//! traffic?"
//!
//! The search is Dijkstra-shaped, but traffic is sampled afresh every time a
//! route is relaxed, so the result is the cheapest path under the traffic
//! actually drawn during that search.

mod config;
mod search;


pub use config::SearchConfig;
pub use search::{PathFinder, SearchError, SearchOutcome, SearchStats, find_path};
