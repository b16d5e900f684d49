//! Core Type Definitions
//!
//! Naming conventions:
//! - snake_case for field names
//! - Raw* prefix for ledger snapshot shapes (wire aliases preserved)
//! - Amounts are smallest-unit integers carried as `Decimal`
//! - Dates are epoch milliseconds (`i64`)

pub mod campaign;
pub mod common;
pub mod milestone;
pub mod raw;

pub use campaign::Campaign;
pub use common::OwnerAddress;
pub use milestone::{Milestone, MilestoneStatus};
pub use raw::{RawCampaign, RawField, RawMilestone};
