//! Request types for the settlement engine API.
//!
//! This module defines the JSON request structure shared by the
//! `/calculate` and `/explain` endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{NoticeType, TerminationInputs, TerminationReason};

/// Request body for the `/calculate` and `/explain` endpoints.
///
/// Carries the contract facts a settlement is computed from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminationRequest {
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
    #[serde(default)]
    pub has_overdue_vacations: bool,
    /// How the notice period was settled.
    pub notice_type: NoticeType,
}

impl From<TerminationRequest> for TerminationInputs {
    fn from(req: TerminationRequest) -> Self {
        TerminationInputs {
            salary: req.salary,
            admission_date: req.admission_date,
            resignation_date: req.resignation_date,
            reason: req.reason,
            fgts_balance: req.fgts_balance,
            has_overdue_vacations: req.has_overdue_vacations,
            notice_type: req.notice_type,
        }
    }
}
