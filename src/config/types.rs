//! Configuration types for statutory parameters.
//!
//! This module contains the strongly-typed configuration structures for the
//! statutory parameters that legislation can revise: the notice-day accrual
//! rule of Lei 12.506/2011 and the FGTS penalty rates. Parameters the engine
//! treats as fixed conventions (the 15-day eligibility threshold, the 30-day
//! commercial month, the one-third vacation bonus) live as constants next to
//! the calculations that use them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Metadata identifying the statute revision a configuration encodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatuteMetadata {
    /// The name of the statute.
    pub name: String,
    /// Legal references backing the configured parameters.
    pub references: Vec<String>,
    /// The revision the parameters were taken from (e.g. "2017-11-11").
    pub revision: String,
}

impl Default for StatuteMetadata {
    fn default() -> Self {
        Self {
            name: "Consolidação das Leis do Trabalho".to_string(),
            references: vec![
                "Lei 12.506/2011".to_string(),
                "CLT art. 477".to_string(),
                "CLT art. 484-A".to_string(),
                "Lei 8.036/1990 art. 18".to_string(),
                "CF/88 art. 7º, XVII".to_string(),
            ],
            revision: "2017-11-11".to_string(),
        }
    }
}

/// Notice-period accrual parameters (Lei 12.506/2011).
///
/// The statutory rule is a 30-day floor plus 3 days per full year of
/// service, capped at 90 days total.
///
/// # Example
///
/// ```
/// use termination_engine::config::NoticeRules;
///
/// let rules = NoticeRules::default();
/// assert_eq!(rules.base_days, 30);
/// assert_eq!(rules.days_per_year, 3);
/// assert_eq!(rules.max_total_days, 90);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeRules {
    /// The floor every notice period starts from.
    pub base_days: u32,
    /// Extra days accrued per full year of service.
    pub days_per_year: u32,
    /// Cap on the total notice period.
    pub max_total_days: u32,
}

impl Default for NoticeRules {
    fn default() -> Self {
        Self {
            base_days: 30,
            days_per_year: 3,
            max_total_days: 90,
        }
    }
}

/// FGTS penalty rates per termination reason (Lei 8.036/1990 art. 18).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FgtsPenaltyRates {
    /// Penalty rate on dismissal without cause.
    pub without_cause: Decimal,
    /// Penalty rate on mutual-agreement termination (half rate, art. 484-A).
    pub agreement: Decimal,
}

impl Default for FgtsPenaltyRates {
    fn default() -> Self {
        Self {
            without_cause: Decimal::new(40, 2),
            agreement: Decimal::new(20, 2),
        }
    }
}

/// The complete statutory configuration used by the engine.
///
/// [`StatuteConfig::default`] carries the current statutory values, so the
/// library is usable without any files on disk; the loader reads the same
/// structure from YAML for deployments that pin a statute revision.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatuteConfig {
    metadata: StatuteMetadata,
    notice: NoticeRules,
    fgts: FgtsPenaltyRates,
}

impl StatuteConfig {
    /// Creates a new configuration from its parts.
    pub fn new(metadata: StatuteMetadata, notice: NoticeRules, fgts: FgtsPenaltyRates) -> Self {
        Self {
            metadata,
            notice,
            fgts,
        }
    }

    /// Returns the statute metadata.
    pub fn metadata(&self) -> &StatuteMetadata {
        &self.metadata
    }

    /// Returns the notice-period accrual parameters.
    pub fn notice(&self) -> &NoticeRules {
        &self.notice
    }

    /// Returns the FGTS penalty rates.
    pub fn fgts(&self) -> &FgtsPenaltyRates {
        &self.fgts
    }
}
