//! Record Normalization
//!
//! Converts heterogeneous ledger representations (big-integer values
//! arriving as numbers or decimal strings, dates as epoch timestamps or
//! ISO strings) into the single internal shape: smallest-unit `Decimal`
//! amounts and epoch-millisecond `i64` dates.
//!
//! Two surfaces:
//! - strict parsers (`parse_amount`, `parse_timestamp`) returning
//!   `CoreResult` for callers that must distinguish malformed input
//! - fail-soft display formatters (`display_amount`, `format_date`)
//!   returning the `"N/A"` / `"Invalid date"` sentinels, because display
//!   callers must always have something renderable

mod amount;
mod date;

pub use amount::{display_amount, parse_amount, to_display_units, UNIT_SCALE};
pub use date::{format_date, parse_timestamp, truncate_to_day, INVALID_DATE};

/// Sentinel shown when an amount cannot be parsed or formatted
pub const AMOUNT_UNAVAILABLE: &str = "N/A";
