//! Progress Calculator
//!
//! Funding percentage over smallest-unit amounts. Both operands are
//! arbitrary-precision `Decimal`, so large values never round through a
//! float. Pure: the target-achieved flag is part of the result, not a
//! flag flipped somewhere else, so the function is safely callable any
//! number of times per evaluation in any order.

use crate::normalize::parse_amount;
use crate::types::raw::RawField;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Funding progress for a milestone or campaign
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Integer percentage, floor of `collected * 100 / target`.
    /// Exceeds 100 when over-funded; never clamped.
    pub percent: u32,
    /// Collected equals target exactly
    pub achieved: bool,
}

impl Progress {
    /// Zero progress, the fail-soft result
    pub fn none() -> Self {
        Self { percent: 0, achieved: false }
    }
}

/// Compute funding progress from normalized smallest-unit amounts.
///
/// Contract: a zero, negative or over-range `target` yields
/// `{ percent: 0, achieved: false }`; the function never panics and never
/// produces an undefined percentage.
pub fn compute_progress(collected: Decimal, target: Decimal) -> Progress {
    if target <= Decimal::ZERO || collected < Decimal::ZERO {
        return Progress::none();
    }
    if collected == target {
        return Progress { percent: 100, achieved: true };
    }
    let percent = collected
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|scaled| scaled.checked_div(target))
        .map(|ratio| ratio.trunc())
        .and_then(|ratio| ratio.to_u32())
        .unwrap_or_else(|| {
            warn!(%collected, %target, "progress out of range, using zero");
            0
        });
    Progress { percent, achieved: false }
}

/// Fail-soft progress over raw ledger fields.
///
/// Malformed input yields zero progress rather than an error, so a broken
/// milestone still renders with an empty bar.
pub fn compute_progress_raw(collected: &RawField, target: &RawField) -> Progress {
    let collected = match parse_amount(collected) {
        Ok(value) => value,
        Err(err) => {
            warn!(%err, "malformed collected amount, zero progress");
            return Progress::none();
        }
    };
    let target = match parse_amount(target) {
        Ok(value) => value,
        Err(err) => {
            warn!(%err, "malformed target amount, zero progress");
            return Progress::none();
        }
    };
    compute_progress(collected, target)
}
