//! HTTP API server for transcript retrieval
//!
//! This module provides a small REST API:
//! - GET /transcript/:video_id - Fetch a video's captions as plain text
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use handlers::TranscriptResponse;
pub use routes::create_router;
pub use state::AppState;
