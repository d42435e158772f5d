//! Vacation accrual calculation.
//!
//! Proportional vacations accrue one twelfth per eligible month of the
//! acquisition period running from the most recent admission anniversary.
//! Months are counted as 1-month rolling windows anchored on the anniversary
//! day, not on calendar-month boundaries; a window counts when its span is
//! at least 15 days. This convention is legally distinct from the
//! calendar-year counting of the 13th salary and must not be unified with it.

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;

/// Minimum span of a rolling window for it to count, in days.
pub const VACATION_WINDOW_ELIGIBLE_DAYS: i64 = 15;

/// Months of accrual in a full acquisition period, as a decimal divisor.
const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Cap on countable windows within one acquisition period.
const ACCRUAL_MONTH_CAP: u32 = 12;

/// Divisor for the constitutional one-third vacation bonus (CF/88 art. 7º,
/// XVII).
const VACATION_BONUS_DIVISOR: Decimal = Decimal::from_parts(3, 0, 0, false, 0);

/// The proportional vacation accrual and its constitutional bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VacationAccrual {
    /// Proportional vacation pay since the last admission anniversary.
    pub proportional: Decimal,
    /// One third of the proportional pay.
    pub one_third: Decimal,
}

impl VacationAccrual {
    /// An accrual with both components at zero.
    pub fn zero() -> Self {
        Self {
            proportional: Decimal::ZERO,
            one_third: Decimal::ZERO,
        }
    }
}

/// Returns the admission anniversary falling in `year`.
///
/// A February 29 admission clamps to February 28 in common years.
fn anniversary_in_year(admission: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, admission.month(), admission.day()).unwrap_or_else(|| {
        NaiveDate::from_ymd_opt(year, admission.month(), 28)
            .expect("the 28th exists in every month")
    })
}

/// Returns the most recent admission anniversary on or before `projected`.
fn last_admission_anniversary(admission: NaiveDate, projected: NaiveDate) -> NaiveDate {
    let candidate = anniversary_in_year(admission, projected.year());
    if candidate > projected {
        anniversary_in_year(admission, projected.year() - 1)
    } else {
        candidate
    }
}

/// Counts the eligible months for proportional vacations.
///
/// Starting at the most recent admission anniversary on or before the
/// projected date, 1-month rolling windows are walked forward; a window
/// counts when its span, truncated at the projected date, is at least 15
/// days. Window arithmetic clamps to the last day of short months
/// (anniversary on the 31st rolls to a 30-day month's 30th, not into the
/// next month).
///
/// # Examples
///
/// ```
/// use termination_engine::calculation::vacation_eligible_months;
/// use chrono::NaiveDate;
///
/// let admission = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
/// let projected = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();
/// assert_eq!(vacation_eligible_months(admission, projected), 6);
/// ```
pub fn vacation_eligible_months(admission: NaiveDate, projected: NaiveDate) -> u32 {
    let mut months = 0;
    let mut cursor = last_admission_anniversary(admission, projected);
    while cursor <= projected {
        let window_end = cursor + Months::new(1);
        let span_days = (projected.min(window_end) - cursor).num_days();
        if span_days >= VACATION_WINDOW_ELIGIBLE_DAYS {
            months += 1;
        }
        cursor = window_end;
    }
    months
}

/// Computes the proportional vacation pay and its one-third bonus.
///
/// `(salary / 12) * min(12, eligible_months)` and a third of that, at full
/// precision; rounding to cents happens when the settlement is assembled.
///
/// # Examples
///
/// ```
/// use termination_engine::calculation::vacation_accrual;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let salary = Decimal::from_str("3500.00").unwrap();
/// let admission = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
/// let projected = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();
/// let accrual = vacation_accrual(salary, admission, projected);
/// assert_eq!(accrual.proportional.round_dp(2), Decimal::from_str("1750.00").unwrap());
/// assert_eq!(accrual.one_third.round_dp(2), Decimal::from_str("583.33").unwrap());
/// ```
pub fn vacation_accrual(salary: Decimal, admission: NaiveDate, projected: NaiveDate) -> VacationAccrual {
    let months = vacation_eligible_months(admission, projected).min(ACCRUAL_MONTH_CAP);
    let proportional = salary / MONTHS_PER_YEAR * Decimal::from(months);
    VacationAccrual {
        proportional,
        one_third: proportional / VACATION_BONUS_DIVISOR,
    }
}

/// Computes the pay for one overdue vacation period.
///
/// When a full acquisition period is overdue and unpaid, the settlement owes
/// one salary plus the one-third bonus. Multiple overdue periods do not
/// stack.
///
/// # Examples
///
/// ```
/// use termination_engine::calculation::overdue_vacation_pay;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let salary = Decimal::from_str("3000.00").unwrap();
/// let pay = overdue_vacation_pay(salary, true);
/// assert_eq!(pay.round_dp(2), Decimal::from_str("4000.00").unwrap());
/// assert_eq!(overdue_vacation_pay(salary, false), Decimal::ZERO);
/// ```
pub fn overdue_vacation_pay(salary: Decimal, has_overdue_vacations: bool) -> Decimal {
    if has_overdue_vacations {
        salary + salary / VACATION_BONUS_DIVISOR
    } else {
        Decimal::ZERO
    }
}
