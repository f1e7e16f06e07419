//! Domain error types.
//!
//! These errors represent structural problems with the city network or
//! its traffic configuration. A search that simply finds no path is not an
//! error; see [`crate::planner::SearchOutcome`].

/// Domain-level errors for graph structure and configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A city name was referenced that is not in the graph
    #[error("unknown city: {0}")]
    UnknownCity(String),

    /// A traffic label outside the traffic model's vocabulary
    #[error("unknown traffic label: {0}")]
    UnknownTrafficLabel(String),

    /// Routes must take a positive number of minutes
    #[error("route {from} -> {to} must have a positive duration")]
    NonPositiveDuration { from: String, to: String },

    /// Invalid trip construction (e.g., segments don't match the path)
    #[error("invalid trip: {0}")]
    InvalidTrip(&'static str),
}
