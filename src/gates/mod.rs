//! Eligibility Gates
//!
//! Gate decisions are derived from the record itself on every evaluation;
//! there is no separate tracking state that could desynchronize from the
//! ledger. A gate returns a decision with a reason code rather than an
//! error: being denied is an expected outcome, not a failure.

mod upload;

pub use upload::{can_upload_document, UploadGate};

use crate::types::milestone::Milestone;
use serde::{Deserialize, Serialize};

/// Upload eligibility state, derived per evaluation
///
/// `Closed` is terminal: once a document is attached the milestone never
/// returns to `Eligible` (upload is at-most-once).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UploadEligibility {
    /// Not funded to target, or the window has not opened
    NotEligible,
    /// Funded, window open, no document yet
    Eligible,
    /// A document is already attached
    Closed,
}

impl UploadEligibility {
    /// Derive the state for a milestone at a reference instant
    pub fn derive(milestone: &Milestone, now_ms: i64) -> Self {
        if milestone.has_document() {
            return UploadEligibility::Closed;
        }
        if !milestone.is_funded() || now_ms < milestone.start_date {
            return UploadEligibility::NotEligible;
        }
        UploadEligibility::Eligible
    }
}

/// Why an upload was denied
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DenyReason {
    /// Caller is not the campaign owner
    NotOwner,
    /// Collected funds below target
    NotFunded,
    /// Current time precedes the milestone's start date
    BeforeWindow,
    /// Terminal: a completion document is already attached
    DocumentAttached,
}

/// Gate decision
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UploadDecision {
    pub allowed: bool,
    pub state: UploadEligibility,
    pub deny_reason: Option<DenyReason>,
}

impl UploadDecision {
    pub fn allow(state: UploadEligibility) -> Self {
        Self { allowed: true, state, deny_reason: None }
    }

    pub fn deny(state: UploadEligibility, reason: DenyReason) -> Self {
        Self { allowed: false, state, deny_reason: Some(reason) }
    }
}
