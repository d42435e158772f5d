//! Signed notice value calculation.
//!
//! The notice value depends on the full reason/disposition pair. The match
//! below spells out every cell of that table so the compiler checks that a
//! new reason or disposition cannot ship without a decision here.

use rust_decimal::Decimal;

use crate::models::{NoticeType, TerminationReason};

/// Days in the commercial month used to derive the daily salary.
const COMMERCIAL_MONTH_DAYS: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Computes the signed notice value for a reason/disposition pair.
///
/// - Dismissal without cause with indemnified notice pays the full daily
///   salary for every notice day.
/// - Mutual agreement with indemnified notice pays half of that
///   (CLT art. 484-A).
/// - Resignation with waived notice discounts one salary for the notice the
///   employee did not work; the result is negative.
/// - Every other pair settles at zero: either the notice was worked and paid
///   as ordinary salary, or the reason grants no indemnity.
///
/// # Examples
///
/// ```
/// use termination_engine::calculation::notice_value;
/// use termination_engine::models::{NoticeType, TerminationReason};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let salary = Decimal::from_str("3500.00").unwrap();
/// let value = notice_value(salary, 36, TerminationReason::WithoutCause, NoticeType::Indemnified);
/// assert_eq!(value.round_dp(2), Decimal::from_str("4200.00").unwrap());
///
/// let discount = notice_value(salary, 30, TerminationReason::Resignation, NoticeType::Waived);
/// assert_eq!(discount, Decimal::from_str("-3500.00").unwrap());
/// ```
pub fn notice_value(
    salary: Decimal,
    notice_days: u32,
    reason: TerminationReason,
    notice_type: NoticeType,
) -> Decimal {
    use NoticeType::*;
    use TerminationReason::*;

    let daily_salary = salary / COMMERCIAL_MONTH_DAYS;

    match (reason, notice_type) {
        (WithoutCause, Indemnified) => daily_salary * Decimal::from(notice_days),
        (Agreement, Indemnified) => daily_salary * Decimal::from(notice_days) / Decimal::TWO,
        (Resignation, Waived) => -salary,

        (WithoutCause, Worked)
        | (WithoutCause, Waived)
        | (WithCause, Worked)
        | (WithCause, Indemnified)
        | (WithCause, Waived)
        | (Resignation, Worked)
        | (Resignation, Indemnified)
        | (Agreement, Worked)
        | (Agreement, Waived)
        | (EndOfContract, Worked)
        | (EndOfContract, Indemnified)
        | (EndOfContract, Waived) => Decimal::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    const ALL_REASONS: [TerminationReason; 5] = [
        TerminationReason::WithoutCause,
        TerminationReason::WithCause,
        TerminationReason::Resignation,
        TerminationReason::Agreement,
        TerminationReason::EndOfContract,
    ];

    const ALL_NOTICE_TYPES: [NoticeType; 3] = [
        NoticeType::Worked,
        NoticeType::Indemnified,
        NoticeType::Waived,
    ];

    #[test]
    fn test_without_cause_indemnified_pays_daily_salary_per_notice_day() {
        let value = notice_value(
            dec("3500.00"),
            36,
            TerminationReason::WithoutCause,
            NoticeType::Indemnified,
        );
        assert_eq!(value.round_dp(2), dec("4200.00"));
    }

    #[test]
    fn test_without_cause_thirty_days_pays_one_salary() {
        let value = notice_value(
            dec("3000.00"),
            30,
            TerminationReason::WithoutCause,
            NoticeType::Indemnified,
        );
        assert_eq!(value.round_dp(2), dec("3000.00"));
    }

    #[test]
    fn test_agreement_indemnified_pays_half() {
        let value = notice_value(
            dec("3500.00"),
            36,
            TerminationReason::Agreement,
            NoticeType::Indemnified,
        );
        assert_eq!(value.round_dp(2), dec("2100.00"));
    }

    #[test]
    fn test_resignation_waived_discounts_one_salary() {
        let value = notice_value(
            dec("3500.00"),
            30,
            TerminationReason::Resignation,
            NoticeType::Waived,
        );
        assert_eq!(value, dec("-3500.00"));
    }

    #[test]
    fn test_resignation_discount_ignores_notice_day_count() {
        let thirty = notice_value(
            dec("3500.00"),
            30,
            TerminationReason::Resignation,
            NoticeType::Waived,
        );
        let ninety = notice_value(
            dec("3500.00"),
            90,
            TerminationReason::Resignation,
            NoticeType::Waived,
        );
        assert_eq!(thirty, ninety);
    }

    #[test]
    fn test_every_other_cell_is_zero() {
        let nonzero_cells = [
            (TerminationReason::WithoutCause, NoticeType::Indemnified),
            (TerminationReason::Agreement, NoticeType::Indemnified),
            (TerminationReason::Resignation, NoticeType::Waived),
        ];

        for reason in ALL_REASONS {
            for notice_type in ALL_NOTICE_TYPES {
                if nonzero_cells.contains(&(reason, notice_type)) {
                    continue;
                }
                let value = notice_value(dec("3500.00"), 36, reason, notice_type);
                assert_eq!(
                    value,
                    Decimal::ZERO,
                    "expected zero for {:?}/{:?}",
                    reason,
                    notice_type
                );
            }
        }
    }

    #[test]
    fn test_zero_salary_settles_at_zero_everywhere() {
        for reason in ALL_REASONS {
            for notice_type in ALL_NOTICE_TYPES {
                assert_eq!(
                    notice_value(Decimal::ZERO, 36, reason, notice_type),
                    Decimal::ZERO
                );
            }
        }
    }
}
