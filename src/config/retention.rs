//! # Retention Configuration
//!
//! How long artifacts live and how often the sweep runs.

use std::time::Duration;

/// Read from `RETENTION_SECS` / `SWEEP_INTERVAL_SECS`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetentionConfig {
    /// Maximum artifact age before deletion.
    pub max_age: Duration,
    /// Cadence of the sweep loop.
    pub interval: Duration,
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            max_age: Duration::from_secs(180),
            interval: Duration::from_secs(60),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_180s_retention_every_60s() {
        let cfg = RetentionConfig::default();
        assert_eq!(cfg.max_age, Duration::from_secs(180));
        assert_eq!(cfg.interval, Duration::from_secs(60));
    }
}
