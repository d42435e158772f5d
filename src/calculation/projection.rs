//! Termination-date projection functionality.
//!
//! When notice is paid in lieu of work, the indemnified period legally
//! extends the contract's effective end for accrual purposes. This module
//! advances the resignation date by the notice-day count in that case; all
//! proportional accruals anchor on the projected date it returns.

use chrono::{Days, NaiveDate};

use crate::models::NoticeType;

/// Projects the effective contract end date.
///
/// For indemnified notice the resignation date is advanced by `notice_days`
/// calendar days (not business days). For worked or waived notice the
/// resignation date is returned unchanged. The projection depends only on
/// the notice disposition, never on the termination reason.
///
/// # Examples
///
/// ```
/// use termination_engine::calculation::project_termination_date;
/// use termination_engine::models::NoticeType;
/// use chrono::NaiveDate;
///
/// let resignation = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
/// let projected = project_termination_date(resignation, 36, NoticeType::Indemnified);
/// assert_eq!(projected, NaiveDate::from_ymd_opt(2024, 6, 20).unwrap());
///
/// let unchanged = project_termination_date(resignation, 36, NoticeType::Worked);
/// assert_eq!(unchanged, resignation);
/// ```
pub fn project_termination_date(
    resignation: NaiveDate,
    notice_days: u32,
    notice_type: NoticeType,
) -> NaiveDate {
    match notice_type {
        NoticeType::Indemnified => resignation + Days::new(u64::from(notice_days)),
        NoticeType::Worked | NoticeType::Waived => resignation,
    }
}
