//! Settlement result model.
//!
//! This module contains the [`Settlement`] type that captures all outputs of
//! a termination calculation: the itemized monetary components, the gross
//! and net totals, and the tenure details they were derived from.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Derived tenure facts attached to every settlement.
///
/// # Example
///
/// ```
/// use termination_engine::models::TenureDetails;
/// use chrono::NaiveDate;
///
/// let details = TenureDetails {
///     years: 2,
///     notice_days: 36,
///     projected_date: NaiveDate::from_ymd_opt(2024, 6, 20).unwrap(),
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenureDetails {
    /// Whole years of service at the resignation date.
    pub years: i64,
    /// Statutory notice period in calendar days.
    pub notice_days: u32,
    /// The effective contract end used by the proportional accruals.
    /// Equals the resignation date unless notice was indemnified.
    pub projected_date: NaiveDate,
}

/// The complete, itemized result of a termination calculation.
///
/// All monetary items are rounded to cents. The record is a deterministic
/// function of the inputs: it carries no identifiers or timestamps, so
/// identical inputs always produce identical settlements.
///
/// Invariants:
/// - `total_gross` is the sum of all non-negative items, with `notice_value`
///   included only when it is positive.
/// - `total_net` equals `total_gross` plus `notice_value` when the notice
///   value is negative (a discount), and equals `total_gross` otherwise.
///
/// # Example
///
/// ```
/// use termination_engine::models::{Settlement, TenureDetails};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let settlement = Settlement {
///     salary_balance: Decimal::ZERO,
///     thirteenth_proportional: Decimal::ZERO,
///     vacations_proportional: Decimal::ZERO,
///     vacations_one_third: Decimal::ZERO,
///     vacations_overdue: Decimal::ZERO,
///     notice_value: Decimal::ZERO,
///     fgts_penalty: Decimal::ZERO,
///     fgts_total_balance: Decimal::ZERO,
///     total_gross: Decimal::ZERO,
///     total_net: Decimal::ZERO,
///     details: TenureDetails {
///         years: 0,
///         notice_days: 30,
///         projected_date: NaiveDate::from_ymd_opt(2024, 5, 15).unwrap(),
///     },
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// Pay for the days worked in the termination month (30-day month).
    pub salary_balance: Decimal,
    /// Proportional 13th salary for the projected year.
    pub thirteenth_proportional: Decimal,
    /// Proportional vacations since the last admission anniversary.
    pub vacations_proportional: Decimal,
    /// Constitutional one-third bonus on the proportional vacations.
    pub vacations_one_third: Decimal,
    /// One full overdue vacation period plus bonus, when flagged.
    pub vacations_overdue: Decimal,
    /// Signed notice value: an indemnity when positive, a discount for
    /// unworked notice when negative.
    pub notice_value: Decimal,
    /// Penalty on the FGTS balance (40% without cause, 20% on agreement).
    pub fgts_penalty: Decimal,
    /// The FGTS deposit balance, passed through for display.
    pub fgts_total_balance: Decimal,
    /// Sum of all non-negative items.
    pub total_gross: Decimal,
    /// Gross total after applying a negative notice value, if any.
    pub total_net: Decimal,
    /// Derived tenure facts backing the items above.
    pub details: TenureDetails,
}
