//! Rounding of prorated entitlements.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an entitlement to `precision` decimal places.
///
/// Midpoints round away from zero, so `0.125` at two places becomes `0.13`.
///
/// # Example
///
/// ```
/// use leave_calculator::calculation::round_entitlement;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let value = Decimal::from_str("13.9616438").unwrap();
/// assert_eq!(round_entitlement(value, 2), Decimal::from_str("13.96").unwrap());
/// ```
pub fn round_entitlement(value: Decimal, precision: u32) -> Decimal {
    value.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero)
}
