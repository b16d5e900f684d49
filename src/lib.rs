//! Milestone Progress & Eligibility Evaluator
//!
//! Pure computation layer for a milestone-based crowdfunding application:
//! - **Normalization**: raw ledger snapshots -> consistent in-memory records
//! - **Selection**: which milestone is active at a reference instant
//! - **Progress**: integer funding percentage and target-achieved flag
//! - **Countdown**: human-readable time remaining or `"Expired"`
//! - **Gating**: whether the owner may attach a completion document
//!
//! # Contract
//!
//! | Rule | Requirement |
//! |------|-------------|
//! | **Read-only** | Records are created and mutated by the external ledger; this crate only reads and derives |
//! | **Fail-soft** | Display-path functions return renderable sentinels (`"N/A"`, `"Invalid date"`, zero progress), never errors |
//! | **Pure** | Outputs depend only on the inputs and the supplied `now`; re-evaluation with identical inputs is identical |
//! | **Exact arithmetic** | Smallest-unit amounts go through `Decimal`, never floats |
//! | **Derived state** | Milestone status and upload eligibility are computed per evaluation, never stored |
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                      UI Layer                        │
//! │        (rendering, routing, wallet wiring)           │
//! ├─────────────────────────────────────────────────────┤
//! │               This Crate (evaluation)                │
//! │   normalize -> schedule / progress / countdown /     │
//! │                      gates                           │
//! ├─────────────────────────────────────────────────────┤
//! │              Ledger Collaborator                     │
//! │     (on-chain campaign and milestone snapshots)      │
//! └─────────────────────────────────────────────────────┘
//! ```

pub mod countdown;
pub mod error;
pub mod gates;
pub mod normalize;
pub mod progress;
pub mod schedule;
pub mod types;

// Re-export error types
pub use error::{CoreError, CoreResult};

// Re-export model types
pub use types::{Campaign, Milestone, MilestoneStatus, OwnerAddress, RawCampaign, RawField, RawMilestone};

// Re-export normalization
pub use normalize::{
    display_amount, format_date, parse_amount, parse_timestamp, truncate_to_day,
    AMOUNT_UNAVAILABLE, INVALID_DATE, UNIT_SCALE,
};

// Re-export schedule
pub use schedule::{
    campaign_window, is_campaign_expired, select_current_milestone, validate_schedule,
    MilestoneDraft, MAX_MILESTONES_PER_CAMPAIGN,
};

// Re-export progress
pub use progress::{compute_progress, compute_progress_raw, Progress};

// Re-export countdown
pub use countdown::{days_until, time_remaining, TimeRemaining, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE};

// Re-export gates
pub use gates::{can_upload_document, DenyReason, UploadDecision, UploadEligibility, UploadGate};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
