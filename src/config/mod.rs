//! Configuration loading and management for the settlement engine.
//!
//! This module provides functionality to load statutory parameters from YAML
//! files: notice-period accrual rules (Lei 12.506/2011) and FGTS penalty
//! rates. Built-in defaults carry the current statutory values, so the
//! library works without configuration files.
//!
//! # Example
//!
//! ```no_run
//! use termination_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/clt").unwrap();
//! println!("Loaded statute: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{FgtsPenaltyRates, NoticeRules, StatuteConfig, StatuteMetadata};
