//! Intercity trip planner.
//!
//! Plans the fastest route between two cities when every leg's travel time
//! depends on traffic that is only known at the moment the leg is
//! considered. Traffic is drawn per route relaxation and priced with a
//! weekday or weekend multiplier table.

pub mod domain;
pub mod graph;
pub mod planner;
pub mod traffic;
pub mod web;
