//! Termination input model and related types.
//!
//! This module defines the [`TerminationInputs`] struct along with the
//! [`TerminationReason`] and [`NoticeType`] enums that drive the
//! reason-dependent branching of the settlement calculation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The legal ground on which the employment contract was terminated.
///
/// Each variant selects a different column of the settlement decision table:
/// it controls accrual forfeiture, the FGTS penalty rate, and which notice
/// dispositions produce an indemnity or a discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// Dismissal without cause (demissão sem justa causa).
    WithoutCause,
    /// Dismissal for cause (demissão por justa causa); forfeits accruals.
    WithCause,
    /// Employee-initiated resignation (pedido de demissão).
    Resignation,
    /// Mutual-agreement termination under CLT art. 484-A.
    Agreement,
    /// Natural end of a fixed-term contract.
    EndOfContract,
}

impl TerminationReason {
    /// Returns the Brazilian Portuguese label used in employee-facing
    /// narratives.
    ///
    /// # Examples
    ///
    /// ```
    /// use termination_engine::models::TerminationReason;
    ///
    /// let label = TerminationReason::Agreement.label_pt_br();
    /// assert_eq!(label, "Rescisão por Acordo (Art. 484-A)");
    /// ```
    pub fn label_pt_br(&self) -> &'static str {
        match self {
            TerminationReason::WithoutCause => "Demissão sem Justa Causa",
            TerminationReason::WithCause => "Demissão por Justa Causa",
            TerminationReason::Resignation => "Pedido de Demissão",
            TerminationReason::Agreement => "Rescisão por Acordo (Art. 484-A)",
            TerminationReason::EndOfContract => "Término de Contrato",
        }
    }
}

/// How the statutory notice period was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeType {
    /// The employee worked through the notice period.
    Worked,
    /// Notice was paid in lieu of work; the contract end is projected forward.
    Indemnified,
    /// Notice was waived by the employee.
    Waived,
}

/// The contract facts a settlement calculation starts from.
///
/// Inputs are immutable per calculation; the engine never mutates or caches
/// them. Structural validity (date ordering, non-negative amounts) is checked
/// by [`TerminationInputs::validate`] before any arithmetic runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminationInputs {
    /// Gross monthly base salary.
    pub salary: Decimal,
    /// The date the employee was admitted.
    pub admission_date: NaiveDate,
    /// The date the contract was terminated.
    pub resignation_date: NaiveDate,
    /// The legal ground for the termination.
    pub reason: TerminationReason,
    /// Accumulated FGTS deposit balance.
    pub fgts_balance: Decimal,
    /// Whether a full vacation period is overdue and unpaid.
    pub has_overdue_vacations: bool,
    /// How the notice period was settled.
    pub notice_type: NoticeType,
}

impl TerminationInputs {
    /// Checks that the inputs are structurally valid for calculation.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidDateRange`] when the resignation date precedes
    ///   the admission date.
    /// - [`EngineError::InvalidAmount`] when `salary` or `fgts_balance` is
    ///   negative. `Decimal` values are always finite, so no non-finite check
    ///   is needed.
    pub fn validate(&self) -> EngineResult<()> {
        if self.resignation_date < self.admission_date {
            return Err(EngineError::InvalidDateRange {
                admission: self.admission_date,
                resignation: self.resignation_date,
            });
        }
        if self.salary < Decimal::ZERO {
            return Err(EngineError::InvalidAmount {
                field: "salary".to_string(),
                value: self.salary,
            });
        }
        if self.fgts_balance < Decimal::ZERO {
            return Err(EngineError::InvalidAmount {
                field: "fgts_balance".to_string(),
                value: self.fgts_balance,
            });
        }
        Ok(())
    }

    /// Returns true when the notice period is paid in lieu of work.
    pub fn is_notice_indemnified(&self) -> bool {
        self.notice_type == NoticeType::Indemnified
    }
}
