//! Document-Upload Gate
//!
//! Decides whether the owner may attach a completion document to a
//! milestone. Only the owner identity may drive the
//! NotEligible/Eligible -> Closed transition; every other caller sees a
//! denied decision regardless of state.

use super::{DenyReason, UploadDecision, UploadEligibility};
use crate::types::common::OwnerAddress;
use crate::types::milestone::Milestone;

/// Document-upload gate
pub struct UploadGate;

impl UploadGate {
    pub fn new() -> Self {
        Self
    }

    /// Eligibility state alone, caller identity not considered
    pub fn eligibility(&self, milestone: &Milestone, now_ms: i64) -> UploadEligibility {
        UploadEligibility::derive(milestone, now_ms)
    }

    /// Full gate decision for a caller.
    ///
    /// Reason precedence: an attached document dominates (terminal state),
    /// then owner identity, then funding, then the window.
    pub fn check(
        &self,
        milestone: &Milestone,
        owner: &OwnerAddress,
        caller: &str,
        now_ms: i64,
    ) -> UploadDecision {
        let state = self.eligibility(milestone, now_ms);

        if state == UploadEligibility::Closed {
            return UploadDecision::deny(state, DenyReason::DocumentAttached);
        }
        if !owner.matches(caller) {
            return UploadDecision::deny(state, DenyReason::NotOwner);
        }
        if state == UploadEligibility::Eligible {
            return UploadDecision::allow(state);
        }
        if !milestone.is_funded() {
            UploadDecision::deny(state, DenyReason::NotFunded)
        } else {
            UploadDecision::deny(state, DenyReason::BeforeWindow)
        }
    }
}

impl Default for UploadGate {
    fn default() -> Self {
        Self::new()
    }
}

/// Boolean surface over [`UploadGate::check`]
pub fn can_upload_document(
    milestone: &Milestone,
    owner: &OwnerAddress,
    caller: &str,
    now_ms: i64,
) -> bool {
    UploadGate::new().check(milestone, owner, caller, now_ms).allowed
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn funded_milestone() -> Milestone {
        Milestone {
            id: 0,
            title: "Stage 1".to_string(),
            description: String::new(),
            target_amount: Decimal::from(100),
            collected_amount: Decimal::from(100),
            start_date: 1_000,
            end_date: 2_000,
            document_url: None,
        }
    }

    fn owner() -> OwnerAddress {
        OwnerAddress::new("0xABC")
    }

    #[test]
    fn test_owner_can_upload_when_funded_and_open() {
        let m = funded_milestone();
        assert!(can_upload_document(&m, &owner(), "0xabc", 1_500));
        let decision = UploadGate::new().check(&m, &owner(), "0xabc", 1_500);
        assert_eq!(decision.state, UploadEligibility::Eligible);
        assert!(decision.deny_reason.is_none());
    }

    #[test]
    fn test_attached_document_is_terminal_for_any_caller() {
        let mut m = funded_milestone();
        m.document_url = Some("https://res.example.com/doc.pdf".to_string());
        assert!(!can_upload_document(&m, &owner(), "0xabc", 1_500));
        assert!(!can_upload_document(&m, &owner(), "0xother", 1_500));
        // even outside the window and unfunded, closed stays closed
        m.collected_amount = Decimal::ZERO;
        let decision = UploadGate::new().check(&m, &owner(), "0xabc", 0);
        assert_eq!(decision.state, UploadEligibility::Closed);
        assert_eq!(decision.deny_reason, Some(DenyReason::DocumentAttached));
    }

    #[test]
    fn test_owner_match_is_case_insensitive() {
        let m = funded_milestone();
        assert!(can_upload_document(&m, &owner(), "0xAbC", 1_500));
        assert!(!can_upload_document(&m, &owner(), "0xabd", 1_500));
    }

    #[test]
    fn test_non_owner_denied_in_every_state() {
        let mut m = funded_milestone();
        let decision = UploadGate::new().check(&m, &owner(), "0xabd", 1_500);
        assert_eq!(decision.deny_reason, Some(DenyReason::NotOwner));

        m.collected_amount = Decimal::from(50);
        let decision = UploadGate::new().check(&m, &owner(), "0xabd", 1_500);
        assert_eq!(decision.deny_reason, Some(DenyReason::NotOwner));
    }

    #[test]
    fn test_unfunded_denied() {
        let mut m = funded_milestone();
        m.collected_amount = Decimal::from(99);
        let decision = UploadGate::new().check(&m, &owner(), "0xabc", 1_500);
        assert_eq!(decision.state, UploadEligibility::NotEligible);
        assert_eq!(decision.deny_reason, Some(DenyReason::NotFunded));
    }

    #[test]
    fn test_over_funded_counts_as_funded() {
        let mut m = funded_milestone();
        m.collected_amount = Decimal::from(150);
        assert!(can_upload_document(&m, &owner(), "0xabc", 1_500));
    }

    #[test]
    fn test_before_window_denied() {
        let m = funded_milestone();
        let decision = UploadGate::new().check(&m, &owner(), "0xabc", 500);
        assert_eq!(decision.deny_reason, Some(DenyReason::BeforeWindow));
    }

    #[test]
    fn test_after_window_end_still_eligible() {
        // completion documents may arrive after the window closes
        let m = funded_milestone();
        assert!(can_upload_document(&m, &owner(), "0xabc", 3_000));
    }

    #[test]
    fn test_zero_target_never_eligible() {
        let mut m = funded_milestone();
        m.target_amount = Decimal::ZERO;
        m.collected_amount = Decimal::ZERO;
        let decision = UploadGate::new().check(&m, &owner(), "0xabc", 1_500);
        assert_eq!(decision.deny_reason, Some(DenyReason::NotFunded));
    }
}
