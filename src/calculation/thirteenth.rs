//! Proportional 13th-salary calculation.
//!
//! The 13th salary accrues one twelfth per eligible month of the calendar
//! year the projected termination date falls in. A month is eligible when
//! the contract covered at least 15 days of it, counted on calendar-month
//! boundaries. This convention is distinct from the anniversary-anchored
//! rolling windows used for vacations and must not be unified with it.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

/// Minimum days under contract within a calendar month for it to count.
pub const THIRTEENTH_ELIGIBLE_DAYS: u32 = 15;

/// Months of accrual in a full year, as a decimal divisor.
const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Cap on countable months; a 13th salary never exceeds twelve twelfths.
const ACCRUAL_MONTH_CAP: u32 = 12;

fn month_start(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).expect("the first day exists in every month")
}

fn month_end(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    month_start(next_year, next_month)
        .pred_opt()
        .expect("a month start has a predecessor")
}

/// Counts the eligible months for the 13th salary.
///
/// Counting starts at the later of the admission date and January 1 of the
/// projected date's year, and walks calendar months up to the projected
/// date. The first partial month is measured from the admission day to the
/// month's end; the final month is truncated at the projected date; interior
/// months use their full calendar length. When the first month is also the
/// final one, the admission-to-month-end measurement wins. That tie-break
/// mirrors the settled practice for this accrual and is intentional.
///
/// # Examples
///
/// ```
/// use termination_engine::calculation::thirteenth_eligible_months;
/// use chrono::NaiveDate;
///
/// let admission = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
/// let projected = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();
/// assert_eq!(thirteenth_eligible_months(admission, projected), 6);
/// ```
pub fn thirteenth_eligible_months(admission: NaiveDate, projected: NaiveDate) -> u32 {
    let year_start = month_start(projected.year(), 1);
    let start = admission.max(year_start);

    let mut months = 0;
    let mut cursor = start;
    while cursor <= projected {
        let end_of_cursor_month = month_end(cursor.year(), cursor.month());
        let in_final_month =
            cursor.year() == projected.year() && cursor.month() == projected.month();
        let days_in_month = if in_final_month {
            projected.day()
        } else {
            end_of_cursor_month.day()
        };
        let in_start_month = cursor.year() == start.year() && cursor.month() == start.month();
        let effective_days = if in_start_month {
            end_of_cursor_month.day() - start.day() + 1
        } else {
            days_in_month
        };

        if effective_days >= THIRTEENTH_ELIGIBLE_DAYS {
            months += 1;
        }

        cursor = if cursor.month() == 12 {
            month_start(cursor.year() + 1, 1)
        } else {
            month_start(cursor.year(), cursor.month() + 1)
        };
    }
    months
}

/// Computes the proportional 13th salary.
///
/// `(salary / 12) * min(12, eligible_months)`, at full precision; rounding
/// to cents happens when the settlement is assembled.
///
/// # Examples
///
/// ```
/// use termination_engine::calculation::thirteenth_proportional;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let salary = Decimal::from_str("3500.00").unwrap();
/// let admission = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
/// let projected = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();
/// let value = thirteenth_proportional(salary, admission, projected);
/// assert_eq!(value.round_dp(2), Decimal::from_str("1750.00").unwrap());
/// ```
pub fn thirteenth_proportional(
    salary: Decimal,
    admission: NaiveDate,
    projected: NaiveDate,
) -> Decimal {
    let months = thirteenth_eligible_months(admission, projected).min(ACCRUAL_MONTH_CAP);
    salary / MONTHS_PER_YEAR * Decimal::from(months)
}
