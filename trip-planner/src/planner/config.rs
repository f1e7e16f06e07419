//! Search configuration for the path finder.

/// Configuration parameters for path search.
///
/// The search has no built-in timeout. These bounds let a caller cap the
/// work a single search may do; both are off by default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum number of nodes waiting in the priority queue.
    /// The search aborts if the queue grows past this.
    pub max_queue_len: Option<usize>,

    /// Maximum number of nodes popped from the queue.
    pub max_nodes_popped: Option<usize>,
}

impl SearchConfig {
    /// Create a new configuration with the given bounds.
    pub fn new(max_queue_len: Option<usize>, max_nodes_popped: Option<usize>) -> Self {
        Self {
            max_queue_len,
            max_nodes_popped,
        }
    }

    /// A configuration with no bounds.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Returns a copy with the queue bound set.
    pub fn with_max_queue_len(mut self, limit: usize) -> Self {
        self.max_queue_len = Some(limit);
        self
    }

    /// Returns a copy with the pop bound set.
    pub fn with_max_nodes_popped(mut self, limit: usize) -> Self {
        self.max_nodes_popped = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SearchConfig::default();

        assert_eq!(config.max_queue_len, None);
        assert_eq!(config.max_nodes_popped, None);
        assert_eq!(config, SearchConfig::unbounded());
    }

    #[test]
    fn custom_config() {
        let config = SearchConfig::new(Some(100), Some(50));

        assert_eq!(config.max_queue_len, Some(100));
        assert_eq!(config.max_nodes_popped, Some(50));
    }

    #[test]
    fn builder_methods() {
        let config = SearchConfig::unbounded()
            .with_max_queue_len(64)
            .with_max_nodes_popped(32);

        assert_eq!(config, SearchConfig::new(Some(64), Some(32)));
    }
}
