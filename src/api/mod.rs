//! HTTP API module for the Business Valuation Engine.
//!
//! This module provides the REST API endpoint for computing valuations
//! from submitted assessments.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ValuationRequest;
pub use response::ApiError;
pub use state::AppState;
