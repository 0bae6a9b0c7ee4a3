//! HTTP API module for the compliance notification engine.
//!
//! This module provides the liveness route and the on-demand evaluation
//! trigger endpoint.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::EvaluateRequest;
pub use response::ApiError;
pub use state::AppState;
