//! Calculation logic for the severance settlement engine.
//!
//! This module contains all the calculation functions for settling a
//! termination: tenure resolution and statutory notice days, projection of
//! the effective contract end for indemnified notice, the two proportional
//! accrual counters (13th salary on calendar months, vacations on
//! anniversary-anchored rolling windows), the signed notice value, the FGTS
//! penalty, and the settlement assembler that combines them.

mod fgts;
mod notice;
mod projection;
mod settlement;
mod tenure;
mod thirteenth;
mod vacations;

pub use fgts::fgts_penalty;
pub use notice::notice_value;
pub use projection::project_termination_date;
pub use settlement::{calculate_termination, salary_balance};
pub use tenure::{Tenure, full_years_of_service, resolve_tenure, statutory_notice_days};
pub use thirteenth::{THIRTEENTH_ELIGIBLE_DAYS, thirteenth_eligible_months, thirteenth_proportional};
pub use vacations::{
    VACATION_WINDOW_ELIGIBLE_DAYS, VacationAccrual, overdue_vacation_pay, vacation_accrual,
    vacation_eligible_months,
};
