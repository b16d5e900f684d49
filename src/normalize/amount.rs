//! Amount Normalization
//!
//! Amounts are denominated in the smallest currency unit (wei-equivalent)
//! and can exceed the float-safe integer range, so parsing goes straight
//! to `Decimal` and arithmetic is checked throughout.

use super::AMOUNT_UNAVAILABLE;
use crate::error::{CoreError, CoreResult};
use crate::types::raw::RawField;
use rust_decimal::Decimal;
use tracing::warn;

/// Smallest units per display unit (10^18, wei per token)
pub const UNIT_SCALE: u64 = 1_000_000_000_000_000_000;

/// Parse a raw ledger field into a smallest-unit amount.
///
/// Accepts a non-negative integer or a decimal-digit string; anything
/// else is `InvalidAmount`.
pub fn parse_amount(raw: &RawField) -> CoreResult<Decimal> {
    match raw {
        RawField::Int(value) => {
            if *value < 0 {
                return Err(CoreError::InvalidAmount {
                    reason: format!("negative amount {value}"),
                });
            }
            Ok(Decimal::from(*value))
        }
        RawField::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Err(CoreError::InvalidAmount {
                    reason: "empty amount".to_string(),
                });
            }
            if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
                return Err(CoreError::InvalidAmount {
                    reason: format!("non-numeric amount {trimmed:?}"),
                });
            }
            trimmed.parse::<Decimal>().map_err(|_| CoreError::InvalidAmount {
                reason: format!("amount {trimmed:?} out of range"),
            })
        }
    }
}

/// Convert a smallest-unit amount to display units
pub fn to_display_units(amount: Decimal) -> Option<Decimal> {
    amount.checked_div(Decimal::from(UNIT_SCALE))
}

/// Format a raw ledger amount for display, two decimals in display units.
///
/// `"1000000000000000000"` renders as `"1.00"`. Fail-soft: malformed or
/// over-range input renders as `"N/A"`.
pub fn display_amount(raw: &RawField) -> String {
    let parsed = match parse_amount(raw) {
        Ok(amount) => amount,
        Err(err) => {
            warn!(%err, "amount unavailable for display");
            return AMOUNT_UNAVAILABLE.to_string();
        }
    };
    match to_display_units(parsed) {
        Some(display) => format!("{:.2}", display),
        None => AMOUNT_UNAVAILABLE.to_string(),
    }
}
