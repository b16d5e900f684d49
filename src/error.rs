//! Error Code Registry
//!
//! Error code format: CF-{module}-{sequence}
//! - CF-AMOUNT: Amount parsing errors
//! - CF-DATE: Timestamp parsing errors
//! - CF-SCHED: Milestone schedule validation errors
//!
//! Display-path functions never surface these to callers; they resolve to
//! renderable sentinels (`"N/A"`, `"Invalid date"`, zero progress). Errors
//! are returned only by the strict parsing API and schedule validation.

use thiserror::Error;

/// Core Result type
pub type CoreResult<T> = Result<T, CoreError>;

/// Core Error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    // ============================================================
    // Amount Errors (CF-AMOUNT-*)
    // ============================================================
    /// [CF-AMOUNT-001] Malformed or non-numeric amount
    #[error("[CF-AMOUNT-001] Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    // ============================================================
    // Date Errors (CF-DATE-*)
    // ============================================================
    /// [CF-DATE-001] Unparseable timestamp
    #[error("[CF-DATE-001] Invalid date: {reason}")]
    InvalidDate { reason: String },

    // ============================================================
    // Schedule Errors (CF-SCHED-*)
    // ============================================================
    /// [CF-SCHED-001] Required text field is empty
    #[error("[CF-SCHED-001] Milestone {index}: {field} must not be empty")]
    EmptyField { field: &'static str, index: usize },

    /// [CF-SCHED-002] Milestone window ends before it starts
    #[error("[CF-SCHED-002] Milestone {index}: end date precedes start date")]
    InvalidWindow { index: usize },

    /// [CF-SCHED-003] Milestone starts before the previous milestone ends
    #[error("[CF-SCHED-003] Milestone {index}: start date precedes previous milestone's end date")]
    WindowOrdering { index: usize },

    /// [CF-SCHED-004] Milestone starts before today
    #[error("[CF-SCHED-004] Milestone {index}: start date is in the past")]
    StartInPast { index: usize },

    /// [CF-SCHED-005] Campaign carries no milestones
    #[error("[CF-SCHED-005] Campaign must define at least one milestone")]
    EmptySchedule,

    /// [CF-SCHED-006] Too many milestones
    #[error("[CF-SCHED-006] Campaign defines {count} milestones, maximum is {max}")]
    MilestoneLimitExceeded { count: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_in_messages() {
        let err = CoreError::InvalidAmount {
            reason: "not a number".to_string(),
        };
        assert!(err.to_string().starts_with("[CF-AMOUNT-001]"));

        let err = CoreError::InvalidDate {
            reason: "garbage".to_string(),
        };
        assert!(err.to_string().starts_with("[CF-DATE-001]"));

        let err = CoreError::MilestoneLimitExceeded { count: 7, max: 5 };
        assert!(err.to_string().contains("7"));
        assert!(err.to_string().contains("5"));
    }
}
