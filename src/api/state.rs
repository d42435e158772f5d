//! Application state for the settlement engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;

use super::explanation::{ExplanationGenerator, SummaryExplainer};

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// loaded statutory configuration and the explanation generator.
#[derive(Clone)]
pub struct AppState {
    /// The loaded statutory configuration.
    config: Arc<ConfigLoader>,
    /// The generator asked for settlement narratives.
    explainer: Arc<dyn ExplanationGenerator>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader
    /// and the default local explanation generator.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
            explainer: Arc::new(SummaryExplainer),
        }
    }

    /// Creates a new application state with a custom explanation generator.
    pub fn with_explainer(config: ConfigLoader, explainer: Arc<dyn ExplanationGenerator>) -> Self {
        Self {
            config: Arc::new(config),
            explainer,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the configured explanation generator.
    pub fn explainer(&self) -> &dyn ExplanationGenerator {
        self.explainer.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calculate_termination;
    use crate::models::{NoticeType, TerminationInputs, TerminationReason};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_default_explainer_answers_through_the_trait_object() {
        let state = AppState::new(ConfigLoader::with_defaults());
        let inputs = TerminationInputs {
            salary: Decimal::from_str("3500.00").unwrap(),
            admission_date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
            resignation_date: NaiveDate::from_ymd_opt(2024, 5, 15).unwrap(),
            reason: TerminationReason::WithoutCause,
            fgts_balance: Decimal::from_str("8500.00").unwrap(),
            has_overdue_vacations: false,
            notice_type: NoticeType::Indemnified,
        };
        let settlement =
            calculate_termination(&inputs, state.config().statute()).unwrap();

        let text = state.explainer().explain(&inputs, &settlement).unwrap();
        assert!(text.contains("Demissão sem Justa Causa"));
    }
}
