//! Schedule Validation
//!
//! Creation-time checks for a drafted milestone schedule, the one surface
//! of this crate that returns errors instead of sentinels. Once a
//! campaign passes validation, readers may assume windows are ordered and
//! non-overlapping.

use crate::error::{CoreError, CoreResult};
use crate::normalize::truncate_to_day;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product constraint on schedule length
pub const MAX_MILESTONES_PER_CAMPAIGN: usize = 5;

/// A milestone as drafted during campaign creation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MilestoneDraft {
    pub title: String,
    pub description: String,
    /// Smallest currency unit
    pub target_amount: Decimal,
    /// Epoch milliseconds
    pub start_date: i64,
    pub end_date: i64,
}

/// Validate a drafted schedule against `now`.
///
/// Checks, in order per milestone:
/// - non-empty title and description
/// - positive target amount
/// - `end_date >= start_date`
/// - start not before the previous milestone's end
/// - start not before today (UTC midnight of `now`)
pub fn validate_schedule(drafts: &[MilestoneDraft], now_ms: i64) -> CoreResult<()> {
    if drafts.is_empty() {
        return Err(CoreError::EmptySchedule);
    }
    if drafts.len() > MAX_MILESTONES_PER_CAMPAIGN {
        return Err(CoreError::MilestoneLimitExceeded {
            count: drafts.len(),
            max: MAX_MILESTONES_PER_CAMPAIGN,
        });
    }

    let today = truncate_to_day(now_ms);
    for (index, draft) in drafts.iter().enumerate() {
        if draft.title.trim().is_empty() {
            return Err(CoreError::EmptyField { field: "title", index });
        }
        if draft.description.trim().is_empty() {
            return Err(CoreError::EmptyField { field: "description", index });
        }
        if draft.target_amount <= Decimal::ZERO {
            return Err(CoreError::InvalidAmount {
                reason: format!("milestone {index} target amount must be positive"),
            });
        }
        if draft.end_date < draft.start_date {
            return Err(CoreError::InvalidWindow { index });
        }
        if index > 0 && draft.start_date < drafts[index - 1].end_date {
            return Err(CoreError::WindowOrdering { index });
        }
        if draft.start_date < today {
            return Err(CoreError::StartInPast { index });
        }
    }
    Ok(())
}
