//! Tenure resolution functionality.
//!
//! This module derives the whole years of service and the statutory
//! notice-day count from the contract's admission and resignation dates.

use chrono::NaiveDate;

use crate::config::NoticeRules;

/// The tenure facts derived from the contract dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tenure {
    /// Whole years of service at the resignation date.
    pub full_years: i64,
    /// Statutory notice period in calendar days.
    pub notice_days: u32,
}

/// Computes the whole years of service between admission and resignation.
///
/// Years are `floor(elapsed_days / 365.25)`, evaluated exactly as
/// `(elapsed_days * 4) / 1461` in integer arithmetic. The 365.25-day year is
/// accepted policy: it averages leap years instead of walking the calendar,
/// and may differ from an anniversary count by a day near boundaries. Keep
/// it as-is; the notice-day accrual is defined against this measure.
///
/// # Examples
///
/// ```
/// use termination_engine::calculation::full_years_of_service;
/// use chrono::NaiveDate;
///
/// let admission = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
/// let resignation = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
/// assert_eq!(full_years_of_service(admission, resignation), 2);
/// ```
pub fn full_years_of_service(admission: NaiveDate, resignation: NaiveDate) -> i64 {
    let elapsed_days = (resignation - admission).num_days();
    (elapsed_days * 4) / 1461
}

/// Computes the statutory notice period for a given tenure.
///
/// Lei 12.506/2011: a 30-day floor plus 3 days per full year of service,
/// capped at 90 days total. A tenure under one full year contributes no
/// extra days regardless of how long the partial year ran.
///
/// # Examples
///
/// ```
/// use termination_engine::calculation::statutory_notice_days;
/// use termination_engine::config::NoticeRules;
///
/// let rules = NoticeRules::default();
/// assert_eq!(statutory_notice_days(0, &rules), 30);
/// assert_eq!(statutory_notice_days(2, &rules), 36);
/// assert_eq!(statutory_notice_days(25, &rules), 90);
/// ```
pub fn statutory_notice_days(full_years: i64, rules: &NoticeRules) -> u32 {
    if full_years < 1 {
        return rules.base_days;
    }
    let extra_cap = i64::from(rules.max_total_days.saturating_sub(rules.base_days));
    let extra = (full_years * i64::from(rules.days_per_year)).min(extra_cap);
    rules.base_days + extra as u32
}

/// Resolves both tenure facts in one call.
pub fn resolve_tenure(admission: NaiveDate, resignation: NaiveDate, rules: &NoticeRules) -> Tenure {
    let full_years = full_years_of_service(admission, resignation);
    Tenure {
        full_years,
        notice_days: statutory_notice_days(full_years, rules),
    }
}
