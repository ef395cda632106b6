//! Whole-dollar rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to whole dollars, sending 50 cents and above up.
///
/// Used for income tax and superannuation. Gross income is truncated
/// instead and never passes through here.
///
/// # Examples
///
/// ```
/// use payslip_generator::calculation::round_to_whole_dollars;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_to_whole_dollars(Decimal::from_str("921.9375").unwrap()), Decimal::from(922));
/// assert_eq!(round_to_whole_dollars(Decimal::from_str("450.36").unwrap()), Decimal::from(450));
/// assert_eq!(round_to_whole_dollars(Decimal::from_str("9.5").unwrap()), Decimal::from(10));
/// ```
pub fn round_to_whole_dollars(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
