//! Explanation generation for calculated settlements.
//!
//! The engine's only external collaborator is a narrative generator that
//! turns a settlement into employee-facing prose. The [`ExplanationGenerator`]
//! trait is the seam: deployments may plug in a remote text-generation
//! service, and its failure must never affect calculation correctness, so
//! the call site falls back to [`EXPLANATION_FALLBACK`]. The default
//! [`SummaryExplainer`] renders a deterministic local summary.

use crate::error::EngineResult;
use crate::models::{Settlement, TerminationInputs};

/// Placeholder shown when the explanation generator fails or is unavailable.
pub const EXPLANATION_FALLBACK: &str =
    "Não foi possível gerar a explicação no momento. Por favor, revise os valores manualmente.";

/// Produces human-readable prose for a calculated settlement.
///
/// Implementations may fail independently of the calculation; callers treat
/// any error as non-fatal and substitute [`EXPLANATION_FALLBACK`].
pub trait ExplanationGenerator: Send + Sync {
    /// Generates a narrative for the given settlement.
    fn explain(&self, inputs: &TerminationInputs, settlement: &Settlement) -> EngineResult<String>;
}

/// The default generator: a deterministic local summary in Brazilian
/// Portuguese covering the reason, tenure, notice period and every monetary
/// item.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryExplainer;

impl ExplanationGenerator for SummaryExplainer {
    fn explain(&self, inputs: &TerminationInputs, settlement: &Settlement) -> EngineResult<String> {
        let vacations_with_bonus =
            settlement.vacations_proportional + settlement.vacations_one_third;
        Ok(format!(
            "Rescisão: {reason}. Tempo de casa: {years} ano(s); aviso prévio de {notice_days} \
             dias (Lei 12.506/2011), com data projetada {projected}. Saldo de salário: \
             R$ {salary_balance:.2}; 13º proporcional: R$ {thirteenth:.2}; férias proporcionais \
             + 1/3: R$ {vacations:.2}; férias vencidas: R$ {overdue:.2}; aviso prévio: \
             R$ {notice:.2}; multa do FGTS: R$ {fgts:.2}. Total bruto: R$ {gross:.2}; total \
             líquido: R$ {net:.2}.",
            reason = inputs.reason.label_pt_br(),
            years = settlement.details.years,
            notice_days = settlement.details.notice_days,
            projected = settlement.details.projected_date,
            salary_balance = settlement.salary_balance,
            thirteenth = settlement.thirteenth_proportional,
            vacations = vacations_with_bonus,
            overdue = settlement.vacations_overdue,
            notice = settlement.notice_value,
            fgts = settlement.fgts_penalty,
            gross = settlement.total_gross,
            net = settlement.total_net,
        ))
    }
}
