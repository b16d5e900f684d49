//! Current-Milestone Selector
//!
//! First-match policy over the sequence order: windows are
//! non-overlapping by construction, and if they ever overlap the
//! earliest-indexed milestone wins. Comparison is exact-timestamp;
//! callers wanting day granularity truncate `now` first
//! (see `normalize::truncate_to_day`).

use crate::types::milestone::Milestone;

/// Return the first milestone whose window contains `now`, else `None`.
///
/// Linear scan; sequences are bounded at
/// [`super::MAX_MILESTONES_PER_CAMPAIGN`].
pub fn select_current_milestone(milestones: &[Milestone], now_ms: i64) -> Option<&Milestone> {
    milestones.iter().find(|m| m.is_within_window(now_ms))
}

/// Overall campaign window, from the first milestone's start to the last
/// milestone's end. `None` for an empty sequence.
pub fn campaign_window(milestones: &[Milestone]) -> Option<(i64, i64)> {
    let first = milestones.first()?;
    let last = milestones.last()?;
    Some((first.start_date, last.end_date))
}

/// A campaign is expired once `now` is strictly past its last milestone's
/// end date. Empty sequences are never expired.
pub fn is_campaign_expired(milestones: &[Milestone], now_ms: i64) -> bool {
    match milestones.last() {
        Some(last) => now_ms > last.end_date,
        None => false,
    }
}
