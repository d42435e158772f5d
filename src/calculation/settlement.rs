//! Settlement assembly.
//!
//! This module combines the tenure facts, the projected date and the
//! individual components into the final [`Settlement`]: salary balance,
//! proportional accruals, notice value, FGTS penalty, overdue vacations,
//! and the gross and net totals.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::config::StatuteConfig;
use crate::error::EngineResult;
use crate::models::{Settlement, TenureDetails, TerminationInputs, TerminationReason};

use super::fgts::fgts_penalty;
use super::notice::notice_value;
use super::projection::project_termination_date;
use super::tenure::resolve_tenure;
use super::thirteenth::thirteenth_proportional;
use super::vacations::{VacationAccrual, overdue_vacation_pay, vacation_accrual};

/// Days in the commercial month used to derive the daily salary.
const COMMERCIAL_MONTH_DAYS: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Decimal places every settlement item is rounded to.
const CENTS: u32 = 2;

/// Computes the pay for the days worked in the termination month.
///
/// `(salary / 30) * day_of_month(resignation_date)`, using the 30-day
/// commercial month convention. Anchored on the resignation date, never the
/// projected date.
///
/// # Examples
///
/// ```
/// use termination_engine::calculation::salary_balance;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let salary = Decimal::from_str("3500.00").unwrap();
/// let resignation = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
/// let balance = salary_balance(salary, resignation);
/// assert_eq!(balance.round_dp(2), Decimal::from_str("1750.00").unwrap());
/// ```
pub fn salary_balance(salary: Decimal, resignation: NaiveDate) -> Decimal {
    salary / COMMERCIAL_MONTH_DAYS * Decimal::from(resignation.day())
}

/// Computes the complete severance settlement for a termination.
///
/// Validates the inputs, resolves tenure and the projected date, then
/// assembles the itemized components and the totals. Each monetary item
/// is rounded to cents before the totals are summed, so the gross always
/// equals the sum of the reported lines. Termination for cause forfeits both
/// proportional accruals. The function is pure: identical inputs always
/// produce identical settlements.
///
/// # Errors
///
/// Returns the validation errors of [`TerminationInputs::validate`]; a
/// well-formed input cannot fail.
///
/// # Examples
///
/// ```
/// use termination_engine::calculation::calculate_termination;
/// use termination_engine::config::StatuteConfig;
/// use termination_engine::models::{NoticeType, TerminationInputs, TerminationReason};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let inputs = TerminationInputs {
///     salary: Decimal::from_str("3500.00").unwrap(),
///     admission_date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
///     resignation_date: NaiveDate::from_ymd_opt(2024, 5, 15).unwrap(),
///     reason: TerminationReason::WithoutCause,
///     fgts_balance: Decimal::from_str("8500.00").unwrap(),
///     has_overdue_vacations: false,
///     notice_type: NoticeType::Indemnified,
/// };
///
/// let settlement = calculate_termination(&inputs, &StatuteConfig::default()).unwrap();
/// assert_eq!(settlement.details.years, 2);
/// assert_eq!(settlement.details.notice_days, 36);
/// assert_eq!(settlement.fgts_penalty, Decimal::from_str("3400.00").unwrap());
/// ```
pub fn calculate_termination(
    inputs: &TerminationInputs,
    config: &StatuteConfig,
) -> EngineResult<Settlement> {
    inputs.validate()?;

    let tenure = resolve_tenure(inputs.admission_date, inputs.resignation_date, config.notice());
    let projected_date =
        project_termination_date(inputs.resignation_date, tenure.notice_days, inputs.notice_type);

    let salary_balance = salary_balance(inputs.salary, inputs.resignation_date).round_dp(CENTS);

    let forfeits_accruals = inputs.reason == TerminationReason::WithCause;
    let thirteenth = if forfeits_accruals {
        Decimal::ZERO
    } else {
        thirteenth_proportional(inputs.salary, inputs.admission_date, projected_date)
            .round_dp(CENTS)
    };
    let vacations = if forfeits_accruals {
        VacationAccrual::zero()
    } else {
        vacation_accrual(inputs.salary, inputs.admission_date, projected_date)
    };
    let vacations_proportional = vacations.proportional.round_dp(CENTS);
    let vacations_one_third = vacations.one_third.round_dp(CENTS);

    let vacations_overdue =
        overdue_vacation_pay(inputs.salary, inputs.has_overdue_vacations).round_dp(CENTS);

    let notice_value = notice_value(
        inputs.salary,
        tenure.notice_days,
        inputs.reason,
        inputs.notice_type,
    )
    .round_dp(CENTS);

    let fgts_penalty = fgts_penalty(inputs.fgts_balance, inputs.reason, config.fgts())
        .round_dp(CENTS);

    let total_gross = salary_balance
        + thirteenth
        + vacations_proportional
        + vacations_one_third
        + vacations_overdue
        + notice_value.max(Decimal::ZERO)
        + fgts_penalty;
    let total_net = total_gross + notice_value.min(Decimal::ZERO);

    Ok(Settlement {
        salary_balance,
        thirteenth_proportional: thirteenth,
        vacations_proportional,
        vacations_one_third,
        vacations_overdue,
        notice_value,
        fgts_penalty,
        fgts_total_balance: inputs.fgts_balance,
        total_gross,
        total_net,
        details: TenureDetails {
            years: tenure.full_years,
            notice_days: tenure.notice_days,
            projected_date,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NoticeType;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn without_cause_inputs() -> TerminationInputs {
        TerminationInputs {
            salary: dec("3500.00"),
            admission_date: date(2022, 1, 1),
            resignation_date: date(2024, 5, 15),
            reason: TerminationReason::WithoutCause,
            fgts_balance: dec("8500.00"),
            has_overdue_vacations: false,
            notice_type: NoticeType::Indemnified,
        }
    }

    #[test]
    fn test_salary_balance_counts_days_worked_in_termination_month() {
        assert_eq!(
            salary_balance(dec("3500.00"), date(2024, 5, 15)).round_dp(2),
            dec("1750.00")
        );
        assert_eq!(
            salary_balance(dec("3000.00"), date(2024, 5, 31)).round_dp(2),
            dec("3100.00")
        );
        assert_eq!(
            salary_balance(dec("3000.00"), date(2024, 5, 1)).round_dp(2),
            dec("100.00")
        );
    }

    #[test]
    fn test_without_cause_indemnified_settlement() {
        let settlement =
            calculate_termination(&without_cause_inputs(), &StatuteConfig::default()).unwrap();

        assert_eq!(settlement.details.years, 2);
        assert_eq!(settlement.details.notice_days, 36);
        assert_eq!(settlement.details.projected_date, date(2024, 6, 20));

        assert_eq!(settlement.salary_balance, dec("1750.00"));
        assert_eq!(settlement.thirteenth_proportional, dec("1750.00"));
        assert_eq!(settlement.vacations_proportional, dec("1750.00"));
        assert_eq!(settlement.vacations_one_third, dec("583.33"));
        assert_eq!(settlement.vacations_overdue, Decimal::ZERO);
        assert_eq!(settlement.notice_value, dec("4200.00"));
        assert_eq!(settlement.fgts_penalty, dec("3400.00"));
        assert_eq!(settlement.fgts_total_balance, dec("8500.00"));
        assert_eq!(settlement.total_gross, dec("13433.33"));
        assert_eq!(settlement.total_net, dec("13433.33"));
    }

    #[test]
    fn test_with_cause_forfeits_accruals_penalty_and_notice() {
        let mut inputs = without_cause_inputs();
        inputs.reason = TerminationReason::WithCause;

        let settlement = calculate_termination(&inputs, &StatuteConfig::default()).unwrap();

        assert_eq!(settlement.thirteenth_proportional, Decimal::ZERO);
        assert_eq!(settlement.vacations_proportional, Decimal::ZERO);
        assert_eq!(settlement.vacations_one_third, Decimal::ZERO);
        assert_eq!(settlement.fgts_penalty, Decimal::ZERO);
        assert_eq!(settlement.notice_value, Decimal::ZERO);

        // Salary for days worked survives a dismissal for cause.
        assert_eq!(settlement.salary_balance, dec("1750.00"));
        assert_eq!(settlement.total_gross, dec("1750.00"));
        assert_eq!(settlement.total_net, dec("1750.00"));
    }

    #[test]
    fn test_resignation_with_waived_notice_discounts_after_gross() {
        let mut inputs = without_cause_inputs();
        inputs.reason = TerminationReason::Resignation;
        inputs.notice_type = NoticeType::Waived;

        let settlement = calculate_termination(&inputs, &StatuteConfig::default()).unwrap();

        // No projection: accruals anchor on the resignation date itself.
        assert_eq!(settlement.details.projected_date, date(2024, 5, 15));
        assert_eq!(settlement.salary_balance, dec("1750.00"));
        assert_eq!(settlement.thirteenth_proportional, dec("1458.33"));
        assert_eq!(settlement.vacations_proportional, dec("1166.67"));
        assert_eq!(settlement.vacations_one_third, dec("388.89"));
        assert_eq!(settlement.notice_value, dec("-3500.00"));
        assert_eq!(settlement.fgts_penalty, Decimal::ZERO);

        // The discount is excluded from the gross and applied to the net.
        assert_eq!(settlement.total_gross, dec("4763.89"));
        assert_eq!(settlement.total_net, dec("1263.89"));
    }

    #[test]
    fn test_agreement_halves_notice_and_fgts_penalty() {
        let mut inputs = without_cause_inputs();
        inputs.reason = TerminationReason::Agreement;

        let settlement = calculate_termination(&inputs, &StatuteConfig::default()).unwrap();

        assert_eq!(settlement.notice_value, dec("2100.00"));
        assert_eq!(settlement.fgts_penalty, dec("1700.00"));
        assert_eq!(settlement.total_gross, settlement.total_net);
    }

    #[test]
    fn test_end_of_contract_pays_accruals_only() {
        let mut inputs = without_cause_inputs();
        inputs.reason = TerminationReason::EndOfContract;
        inputs.notice_type = NoticeType::Worked;

        let settlement = calculate_termination(&inputs, &StatuteConfig::default()).unwrap();

        assert_eq!(settlement.notice_value, Decimal::ZERO);
        assert_eq!(settlement.fgts_penalty, Decimal::ZERO);
        assert_eq!(settlement.thirteenth_proportional, dec("1458.33"));
        assert_eq!(settlement.vacations_proportional, dec("1166.67"));
    }

    #[test]
    fn test_overdue_vacations_add_a_full_period_with_bonus() {
        let mut inputs = without_cause_inputs();
        inputs.has_overdue_vacations = true;

        let settlement = calculate_termination(&inputs, &StatuteConfig::default()).unwrap();

        assert_eq!(settlement.vacations_overdue, dec("4666.67"));
        assert_eq!(settlement.total_gross, dec("18100.00"));
    }

    #[test]
    fn test_projection_extends_accruals_for_indemnified_notice() {
        let mut worked = without_cause_inputs();
        worked.notice_type = NoticeType::Worked;

        let projected =
            calculate_termination(&without_cause_inputs(), &StatuteConfig::default()).unwrap();
        let unprojected = calculate_termination(&worked, &StatuteConfig::default()).unwrap();

        // The 36 projected days push the accrual anchor from May 15 to
        // June 20, adding one eligible month to each accrual.
        assert!(projected.thirteenth_proportional > unprojected.thirteenth_proportional);
        assert!(projected.vacations_proportional > unprojected.vacations_proportional);
    }

    #[test]
    fn test_gross_equals_sum_of_rounded_items() {
        let settlement =
            calculate_termination(&without_cause_inputs(), &StatuteConfig::default()).unwrap();

        let sum = settlement.salary_balance
            + settlement.thirteenth_proportional
            + settlement.vacations_proportional
            + settlement.vacations_one_third
            + settlement.vacations_overdue
            + settlement.notice_value.max(Decimal::ZERO)
            + settlement.fgts_penalty;
        assert_eq!(settlement.total_gross, sum);
    }

    #[test]
    fn test_identical_inputs_give_identical_settlements() {
        let inputs = without_cause_inputs();
        let config = StatuteConfig::default();
        let first = calculate_termination(&inputs, &config).unwrap();
        let second = calculate_termination(&inputs, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_validation_errors_propagate() {
        let mut inputs = without_cause_inputs();
        inputs.resignation_date = date(2021, 1, 1);
        assert!(calculate_termination(&inputs, &StatuteConfig::default()).is_err());

        let mut inputs = without_cause_inputs();
        inputs.salary = dec("-10.00");
        assert!(calculate_termination(&inputs, &StatuteConfig::default()).is_err());
    }

    #[test]
    fn test_zero_salary_contract_settles_at_fgts_penalty_only() {
        let mut inputs = without_cause_inputs();
        inputs.salary = Decimal::ZERO;

        let settlement = calculate_termination(&inputs, &StatuteConfig::default()).unwrap();

        assert_eq!(settlement.total_gross, dec("3400.00"));
        assert_eq!(settlement.total_net, dec("3400.00"));
    }
}
