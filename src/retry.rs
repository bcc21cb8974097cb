use rand::Rng;
use std::time::Duration;

use crate::config::RetryConfig;
use crate::error::CardCompareError;

/// Exponential backoff with multiplicative jitter, capped at `max_delay`.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub jitter_factor: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&RetryConfig::default())
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(cfg: &RetryConfig) -> Self {
        Self {
            max_attempts: cfg.max_attempts.max(1),
            initial_delay: Duration::from_millis(cfg.initial_delay_ms),
            max_delay: Duration::from_millis(cfg.max_delay_ms),
            jitter_factor: cfg.jitter_factor.clamp(0.0, 1.0),
        }
    }
}

impl RetryPolicy {
    /// No retries: one attempt only.
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            initial_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
            jitter_factor: 0.0,
        }
    }

    /// Whether a failed `attempt` (1-based) should be followed by another one.
    pub fn should_retry(&self, attempt: u32, err: &CardCompareError) -> bool {
        attempt < self.max_attempts && err.is_retryable()
    }

    /// Delay to wait after the failed `attempt` (1-based).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(16);
        let base = self.initial_delay.saturating_mul(2u32.pow(exponent));
        let jitter = if self.jitter_factor > 0.0 {
            rand::thread_rng().gen_range((1.0 - self.jitter_factor)..=(1.0 + self.jitter_factor))
        } else {
            1.0
        };
        let delay = Duration::from_millis((base.as_millis() as f64 * jitter) as u64);
        std::cmp::min(delay, self.max_delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(jitter_factor: f64) -> RetryPolicy {
        RetryPolicy {
            max_attempts: 4,
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_millis(500),
            jitter_factor,
        }
    }

    #[test]
    fn delays_double_then_cap() {
        let p = policy(0.0);
        assert_eq!(p.delay_for(1), Duration::from_millis(100));
        assert_eq!(p.delay_for(2), Duration::from_millis(200));
        assert_eq!(p.delay_for(3), Duration::from_millis(400));
        assert_eq!(p.delay_for(4), Duration::from_millis(500));
        assert_eq!(p.delay_for(40), Duration::from_millis(500));
    }

    #[test]
    fn jitter_stays_within_factor() {
        let p = policy(0.2);
        for _ in 0..50 {
            let d = p.delay_for(2).as_millis();
            assert!((159..=240).contains(&d), "delay {d}ms out of range");
        }
    }

    #[test]
    fn retries_only_retryable_errors_within_budget() {
        let p = policy(0.0);
        let transient = CardCompareError::UpstreamStatus {
            status: 502,
            body: String::new(),
        };
        let fatal = CardCompareError::UpstreamStatus {
            status: 400,
            body: String::new(),
        };
        assert!(p.should_retry(1, &transient));
        assert!(!p.should_retry(4, &transient));
        assert!(!p.should_retry(1, &fatal));
        assert!(!RetryPolicy::none().should_retry(1, &transient));
    }

    #[test]
    fn config_values_are_sanitised() {
        let cfg = RetryConfig {
            max_attempts: 0,
            initial_delay_ms: 10,
            max_delay_ms: 20,
            jitter_factor: 3.0,
        };
        let p = RetryPolicy::from(&cfg);
        assert_eq!(p.max_attempts, 1);
        assert_eq!(p.jitter_factor, 1.0);
    }
}
