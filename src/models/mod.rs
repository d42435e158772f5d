//! Core data models for the severance settlement engine.
//!
//! This module contains all the domain models used throughout the engine.

mod settlement;
mod termination;

pub use settlement::{Settlement, TenureDetails};
pub use termination::{NoticeType, TerminationInputs, TerminationReason};
