//! HTTP API module for the absence cost engine.
//!
//! This module provides the REST API endpoints for estimating absence cost,
//! comparing against a target absence rate, and computing monthly trends.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EstimateRequest, SavingsRequest, ScenarioRequest, TrendRequest};
pub use response::ApiError;
pub use state::AppState;
