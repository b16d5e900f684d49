//! Milestone Record
//!
//! Normalized in-memory shape derived from a ledger snapshot.
//!
//! Hard constraints:
//! - Amounts are non-negative smallest-unit integers; `collected_amount`
//!   is monotonically non-decreasing and mutated only by the ledger
//! - `end_date >= start_date`
//! - `document_url` is set at most once per lifecycle, never cleared
//! - Status is derived per evaluation, never stored

use crate::normalize::{parse_amount, parse_timestamp};
use crate::types::raw::RawMilestone;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Normalized milestone record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    /// Index-based identifier, unique within a campaign
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Funding target in the smallest currency unit
    pub target_amount: Decimal,
    /// Funds collected so far, same unit
    pub collected_amount: Decimal,
    /// Window start, epoch milliseconds
    pub start_date: i64,
    /// Window end, epoch milliseconds
    pub end_date: i64,
    /// Completion document, attached at most once
    pub document_url: Option<String>,
}

/// Derived milestone status
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MilestoneStatus {
    /// Window has not opened yet
    Upcoming,
    /// Inside the window, target not reached
    Active,
    /// Collected funds reached the target
    Funded,
    /// Window closed without reaching the target
    Expired,
}

impl Milestone {
    /// Normalize a ledger snapshot into a milestone record.
    ///
    /// Fail-soft: a malformed amount normalizes to zero and a malformed
    /// date to epoch zero, each logged. A campaign with one broken
    /// milestone still renders; a milestone with an unparseable window is
    /// simply never selected as current.
    pub fn from_raw(raw: &RawMilestone, id: u32) -> Self {
        let target_amount = parse_amount(&raw.target_amount).unwrap_or_else(|err| {
            warn!(milestone_id = id, %err, "malformed target amount, using zero");
            Decimal::ZERO
        });
        let collected_amount = parse_amount(&raw.collected_amount).unwrap_or_else(|err| {
            warn!(milestone_id = id, %err, "malformed collected amount, using zero");
            Decimal::ZERO
        });
        let start_date = parse_timestamp(&raw.start_date).unwrap_or_else(|err| {
            warn!(milestone_id = id, %err, "malformed start date, using epoch zero");
            0
        });
        let end_date = parse_timestamp(&raw.end_date).unwrap_or_else(|err| {
            warn!(milestone_id = id, %err, "malformed end date, using epoch zero");
            0
        });

        Self {
            id,
            title: raw.title.clone(),
            description: raw.description.clone(),
            target_amount,
            collected_amount,
            start_date,
            end_date,
            document_url: raw
                .document_url
                .as_deref()
                .filter(|url| !url.trim().is_empty())
                .map(str::to_string),
        }
    }

    /// Whether collected funds have reached the target
    pub fn is_funded(&self) -> bool {
        self.target_amount > Decimal::ZERO && self.collected_amount >= self.target_amount
    }

    /// Whether a completion document has been attached (terminal)
    pub fn has_document(&self) -> bool {
        self.document_url.is_some()
    }

    /// Whether `now` falls inside the milestone window (inclusive bounds)
    pub fn is_within_window(&self, now_ms: i64) -> bool {
        self.start_date <= now_ms && now_ms <= self.end_date
    }

    /// Derive the status for a reference instant
    pub fn status(&self, now_ms: i64) -> MilestoneStatus {
        if self.is_funded() {
            MilestoneStatus::Funded
        } else if now_ms < self.start_date {
            MilestoneStatus::Upcoming
        } else if now_ms <= self.end_date {
            MilestoneStatus::Active
        } else {
            MilestoneStatus::Expired
        }
    }
}
