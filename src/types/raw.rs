//! Ledger Snapshot Shapes
//!
//! Records as fetched from the on-chain ledger collaborator, before
//! normalization. Big-integer values arrive either as JSON numbers or as
//! decimal strings depending on the provider's serialization, so every
//! amount and timestamp field is an untagged integer-or-string.
//!
//! Field aliases preserve the ledger's original wire names
//! (`targetAmt`, `donationAmountCollected`, `documentURL`).

use serde::{Deserialize, Serialize};

/// A ledger field that may arrive as an integer or a string
///
/// Values beyond `i64` range are serialized as decimal strings by every
/// provider, so the integer arm stays at `i64`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Int(i64),
    Text(String),
}

impl From<i64> for RawField {
    fn from(value: i64) -> Self {
        RawField::Int(value)
    }
}

impl From<&str> for RawField {
    fn from(value: &str) -> Self {
        RawField::Text(value.to_string())
    }
}

impl From<String> for RawField {
    fn from(value: String) -> Self {
        RawField::Text(value)
    }
}

/// Milestone record as fetched from the ledger
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMilestone {
    #[serde(default, alias = "milestonetitle")]
    pub title: String,

    #[serde(default, alias = "milestonedescription")]
    pub description: String,

    #[serde(alias = "targetAmt")]
    pub target_amount: RawField,

    #[serde(alias = "donationAmountCollected")]
    pub collected_amount: RawField,

    pub start_date: RawField,

    pub end_date: RawField,

    #[serde(default, alias = "documentURL")]
    pub document_url: Option<String>,
}

/// Campaign record as fetched from the ledger
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCampaign {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, alias = "images")]
    pub image_url: String,

    pub owner: String,

    #[serde(alias = "target")]
    pub target_amount: RawField,

    #[serde(alias = "amountCollected")]
    pub collected_amount: RawField,

    #[serde(default)]
    pub milestones: Vec<RawMilestone>,
}
