//! Milestone Schedule
//!
//! Selection of the active milestone from an ordered sequence, campaign
//! window derivation, and creation-time validation of drafted schedules.

mod selector;
mod validation;

pub use selector::{campaign_window, is_campaign_expired, select_current_milestone};
pub use validation::{validate_schedule, MilestoneDraft, MAX_MILESTONES_PER_CAMPAIGN};
