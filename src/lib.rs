//! Severance Settlement Engine for Brazilian Labor Law (CLT)
//!
//! This crate computes the statutory severance settlement (verbas rescisórias)
//! for an employment termination under the Consolidação das Leis do Trabalho,
//! turning contract facts (dates, salary, termination reason, notice
//! disposition, FGTS balance) into an itemized settlement with gross and net
//! totals.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
