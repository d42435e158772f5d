//! FGTS penalty calculation.
//!
//! The employer owes a penalty on the accumulated FGTS deposit balance when
//! the termination is employer-initiated: 40% on dismissal without cause
//! (Lei 8.036/1990 art. 18) and 20% on a mutual-agreement termination
//! (CLT art. 484-A). No other reason carries a penalty.

use rust_decimal::Decimal;

use crate::config::FgtsPenaltyRates;
use crate::models::TerminationReason;

/// Computes the FGTS penalty for a termination reason.
///
/// # Examples
///
/// ```
/// use termination_engine::calculation::fgts_penalty;
/// use termination_engine::config::FgtsPenaltyRates;
/// use termination_engine::models::TerminationReason;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let balance = Decimal::from_str("8500.00").unwrap();
/// let rates = FgtsPenaltyRates::default();
///
/// let penalty = fgts_penalty(balance, TerminationReason::WithoutCause, &rates);
/// assert_eq!(penalty, Decimal::from_str("3400.0000").unwrap());
///
/// let none = fgts_penalty(balance, TerminationReason::Resignation, &rates);
/// assert_eq!(none, Decimal::ZERO);
/// ```
pub fn fgts_penalty(
    balance: Decimal,
    reason: TerminationReason,
    rates: &FgtsPenaltyRates,
) -> Decimal {
    match reason {
        TerminationReason::WithoutCause => balance * rates.without_cause,
        TerminationReason::Agreement => balance * rates.agreement,
        TerminationReason::WithCause
        | TerminationReason::Resignation
        | TerminationReason::EndOfContract => Decimal::ZERO,
    }
}
