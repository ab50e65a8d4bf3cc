use chrono::Duration;

use super::errors::VerifyError;

/// Validity window applied to a token's issue time during verification.
///
/// A token issued at `t` is accepted while the current time lies in
/// `[t - slew, t + max_age]`. The default max age of 25 hours gives a full
/// day of validity with headroom for timezone and rounding effects; the
/// default slew of 10 minutes absorbs clock disagreement between the issuing
/// and validating hosts in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidityWindow {
    max_age_ms: i64,
    slew_ms: i64,
}

impl ValidityWindow {
    /// Build a window from explicit durations.
    pub fn new(max_age: Duration, slew: Duration) -> Self {
        Self {
            max_age_ms: max_age.num_milliseconds(),
            slew_ms: slew.num_milliseconds(),
        }
    }

    pub fn max_age_ms(&self) -> i64 {
        self.max_age_ms
    }

    pub fn slew_ms(&self) -> i64 {
        self.slew_ms
    }

    /// Check that `now_ms` falls inside the window around `issued_at_ms`.
    ///
    /// # Errors
    /// * `Expired` - Current time is past `issued_at + max_age`
    /// * `NotYetValid` - Current time is before `issued_at - slew`
    pub fn check(&self, issued_at_ms: i64, now_ms: i64) -> Result<(), VerifyError> {
        let not_before = issued_at_ms.saturating_sub(self.slew_ms);
        let not_after = issued_at_ms.saturating_add(self.max_age_ms);

        if now_ms < not_before {
            return Err(VerifyError::NotYetValid);
        }
        if now_ms > not_after {
            return Err(VerifyError::Expired);
        }
        Ok(())
    }
}

impl Default for ValidityWindow {
    fn default() -> Self {
        Self::new(Duration::hours(25), Duration::minutes(10))
    }
}
