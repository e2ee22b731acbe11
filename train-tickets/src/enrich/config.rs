//! Price enrichment configuration.

use std::time::Duration;

/// Limits applied while looking up prices.
#[derive(Debug, Clone)]
pub struct EnrichConfig {
    /// Maximum number of price lookups in flight at once.
    pub max_concurrent: usize,

    /// Longest a single lookup may take once it has started.
    pub task_timeout: Duration,

    /// Longest the whole batch may take. Lookups still pending at the
    /// deadline are abandoned and their entries keep placeholder prices.
    pub deadline: Duration,
}

impl EnrichConfig {
    /// Set maximum concurrent lookups. Zero is treated as one.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set the per-lookup timeout.
    pub fn with_task_timeout(mut self, timeout: Duration) -> Self {
        self.task_timeout = timeout;
        self
    }

    /// Set the overall deadline.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }
}

impl Default for EnrichConfig {
    fn default() -> Self {
        Self {
            max_concurrent: 8,
            task_timeout: Duration::from_secs(10),
            deadline: Duration::from_secs(30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = EnrichConfig::default();

        assert_eq!(config.max_concurrent, 8);
        assert_eq!(config.task_timeout, Duration::from_secs(10));
        assert_eq!(config.deadline, Duration::from_secs(30));
    }

    #[test]
    fn builder() {
        let config = EnrichConfig::default()
            .with_max_concurrent(2)
            .with_task_timeout(Duration::from_millis(500))
            .with_deadline(Duration::from_secs(3));

        assert_eq!(config.max_concurrent, 2);
        assert_eq!(config.task_timeout, Duration::from_millis(500));
        assert_eq!(config.deadline, Duration::from_secs(3));
    }
}
