//! Campaign Record
//!
//! Hard constraints:
//! - Milestones are ordered by sequence index; milestone `i` must not start
//!   before milestone `i-1` ends (enforced at creation, assumed valid here)
//! - This layer never creates, deletes or reorders records

use crate::normalize::parse_amount;
use crate::types::common::OwnerAddress;
use crate::types::milestone::Milestone;
use crate::types::raw::RawCampaign;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Normalized campaign record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub owner: OwnerAddress,
    /// Overall funding target in the smallest currency unit
    pub target_amount: Decimal,
    /// Total funds collected, same unit
    pub collected_amount: Decimal,
    /// Ordered by sequence index
    pub milestones: Vec<Milestone>,
}

impl Campaign {
    /// Normalize a ledger snapshot, assigning index-based milestone ids.
    ///
    /// Same fail-soft contract as [`Milestone::from_raw`].
    pub fn from_raw(raw: &RawCampaign, id: impl Into<String>) -> Self {
        let id = id.into();
        let target_amount = parse_amount(&raw.target_amount).unwrap_or_else(|err| {
            warn!(campaign_id = %id, %err, "malformed campaign target, using zero");
            Decimal::ZERO
        });
        let collected_amount = parse_amount(&raw.collected_amount).unwrap_or_else(|err| {
            warn!(campaign_id = %id, %err, "malformed campaign collected amount, using zero");
            Decimal::ZERO
        });

        Self {
            id,
            title: raw.title.clone(),
            description: raw.description.clone(),
            image_url: raw.image_url.clone(),
            owner: OwnerAddress::new(raw.owner.clone()),
            target_amount,
            collected_amount,
            milestones: raw
                .milestones
                .iter()
                .enumerate()
                .map(|(index, m)| Milestone::from_raw(m, index as u32))
                .collect(),
        }
    }
}
