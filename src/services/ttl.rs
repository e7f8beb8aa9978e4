//! Time-based validity of cached records.

use std::time::Duration;

use chrono::{DateTime, Utc};

/// Decides whether a stored record is still time-valid.
///
/// One TTL for the whole system, fixed at construction. Pure: no clock
/// access, no side effects, no failure modes.
#[derive(Debug, Clone, Copy)]
pub struct TtlPolicy {
    ttl: Duration,
}

impl TtlPolicy {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl }
    }

    pub fn from_secs(ttl_secs: u64) -> Self {
        Self::new(Duration::from_secs(ttl_secs))
    }

    /// True while `now - cached_at < ttl`.
    ///
    /// A `cached_at` in the future (clock skew between writer and reader)
    /// is treated as valid: fail open rather than invalidate on skew.
    pub fn is_valid(&self, cached_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match now.signed_duration_since(cached_at).to_std() {
            Ok(age) => age < self.ttl,
            // Negative age, i.e. cached_at is in the future
            Err(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn policy() -> TtlPolicy {
        TtlPolicy::from_secs(600)
    }

    #[test]
    fn fresh_record_is_valid() {
        let now = Utc::now();
        assert!(policy().is_valid(now - TimeDelta::seconds(599), now));
    }

    #[test]
    fn record_at_exactly_ttl_is_invalid() {
        let now = Utc::now();
        assert!(!policy().is_valid(now - TimeDelta::seconds(600), now));
    }

    #[test]
    fn record_past_ttl_is_invalid() {
        let now = Utc::now();
        assert!(!policy().is_valid(now - TimeDelta::hours(2), now));
    }

    #[test]
    fn future_cached_at_fails_open() {
        let now = Utc::now();
        assert!(policy().is_valid(now + TimeDelta::minutes(5), now));
    }

    #[test]
    fn zero_ttl_invalidates_everything() {
        let now = Utc::now();
        let policy = TtlPolicy::from_secs(0);
        assert!(!policy.is_valid(now, now));
        assert!(!policy.is_valid(now - TimeDelta::seconds(1), now));
    }
}
