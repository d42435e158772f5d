//! HTTP API module for the settlement engine.
//!
//! This module provides the REST API endpoints for calculating severance
//! settlements and generating employee-facing explanations.

mod explanation;
mod handlers;
mod request;
mod response;
mod state;

pub use explanation::{EXPLANATION_FALLBACK, ExplanationGenerator, SummaryExplainer};
pub use handlers::create_router;
pub use request::TerminationRequest;
pub use response::{ApiError, ExplanationResponse};
pub use state::AppState;
