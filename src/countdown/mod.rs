//! Time-Remaining Formatter
//!
//! Converts an end timestamp into a countdown or the `"Expired"` sentinel.
//! Components are produced by successive integer division with remainder
//! carry, so they reconstruct the original difference to the minute and
//! are never independently rounded or negative.

use serde::{Deserialize, Serialize};

pub const MS_PER_MINUTE: i64 = 60_000;
pub const MS_PER_HOUR: i64 = 3_600_000;
pub const MS_PER_DAY: i64 = 86_400_000;

/// Countdown to a milestone's end
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRemaining {
    /// `end <= now`
    Expired,
    Remaining { days: i64, hours: i64, minutes: i64 },
}

impl TimeRemaining {
    pub fn is_expired(&self) -> bool {
        matches!(self, TimeRemaining::Expired)
    }
}

impl std::fmt::Display for TimeRemaining {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeRemaining::Expired => write!(f, "Expired"),
            TimeRemaining::Remaining { days, hours, minutes } => {
                write!(f, "{days} days, {hours} hours, and {minutes} minutes left")
            }
        }
    }
}

/// Compute the countdown from `now` to `end`, both epoch milliseconds
pub fn time_remaining(end_ms: i64, now_ms: i64) -> TimeRemaining {
    let diff = end_ms.saturating_sub(now_ms);
    if diff <= 0 {
        return TimeRemaining::Expired;
    }
    TimeRemaining::Remaining {
        days: diff / MS_PER_DAY,
        hours: (diff % MS_PER_DAY) / MS_PER_HOUR,
        minutes: (diff % MS_PER_HOUR) / MS_PER_MINUTE,
    }
}

/// Whole days until `end`, rounded up, floored at zero.
///
/// Listing views show this coarse count; detail views use
/// [`time_remaining`].
pub fn days_until(end_ms: i64, now_ms: i64) -> i64 {
    let diff = end_ms.saturating_sub(now_ms);
    if diff <= 0 {
        0
    } else {
        // `div_ceil` on signed ints is unstable; diff > 0 here so this is equivalent
        1 + (diff - 1) / MS_PER_DAY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expired_iff_end_not_after_now() {
        assert_eq!(time_remaining(100, 100), TimeRemaining::Expired);
        assert_eq!(time_remaining(99, 100), TimeRemaining::Expired);
        assert!(!time_remaining(101, 100).is_expired());
    }

    #[test]
    fn test_remainder_carry() {
        // 2 days, 3 hours, 4 minutes, 30 seconds
        let diff = 2 * MS_PER_DAY + 3 * MS_PER_HOUR + 4 * MS_PER_MINUTE + 30_000;
        let remaining = time_remaining(diff, 0);
        assert_eq!(
            remaining,
            TimeRemaining::Remaining { days: 2, hours: 3, minutes: 4 }
        );
    }

    #[test]
    fn test_components_bound_difference() {
        for diff in [1, 59_999, 60_000, MS_PER_HOUR - 1, MS_PER_DAY + 1, 987_654_321] {
            match time_remaining(diff, 0) {
                TimeRemaining::Remaining { days, hours, minutes } => {
                    let floor = days * MS_PER_DAY + hours * MS_PER_HOUR + minutes * MS_PER_MINUTE;
                    assert!(floor <= diff, "floor exceeds diff for {diff}");
                    assert!(diff < floor + MS_PER_MINUTE, "minute bound broken for {diff}");
                    assert!(days >= 0 && hours >= 0 && minutes >= 0);
                    assert!(hours < 24 && minutes < 60);
                }
                TimeRemaining::Expired => panic!("positive diff {diff} reported expired"),
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(time_remaining(0, 1).to_string(), "Expired");
        let diff = MS_PER_DAY + 2 * MS_PER_HOUR + 5 * MS_PER_MINUTE;
        assert_eq!(
            time_remaining(diff, 0).to_string(),
            "1 days, 2 hours, and 5 minutes left"
        );
    }

    #[test]
    fn test_days_until_rounds_up() {
        assert_eq!(days_until(MS_PER_DAY, 0), 1);
        assert_eq!(days_until(MS_PER_DAY + 1, 0), 2);
        assert_eq!(days_until(1, 0), 1);
    }

    #[test]
    fn test_days_until_floors_at_zero() {
        assert_eq!(days_until(0, 100), 0);
        assert_eq!(days_until(100, 100), 0);
    }
}
