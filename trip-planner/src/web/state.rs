//! Application state for the web layer.

use std::sync::Arc;

use crate::graph::CityGraph;
use crate::planner::SearchConfig;
use crate::traffic::{Clock, TrafficModel};

/// Shared application state.
///
/// The graph is frozen once the server starts, so every request reads the
/// same network without locking.
#[derive(Clone)]
pub struct AppState {
    /// City network
    pub graph: Arc<CityGraph>,

    /// Traffic multipliers
    pub traffic: Arc<TrafficModel>,

    /// Path search configuration
    pub config: Arc<SearchConfig>,

    /// Source of "now" for choosing weekday or weekend traffic
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        graph: CityGraph,
        traffic: TrafficModel,
        config: SearchConfig,
        clock: impl Clock + 'static,
    ) -> Self {
        Self {
            graph: Arc::new(graph),
            traffic: Arc::new(traffic),
            config: Arc::new(config),
            clock: Arc::new(clock),
        }
    }
}
