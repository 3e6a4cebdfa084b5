//! Caption retrieval
//!
//! This module provides the `CaptionsProvider` abstraction used by the HTTP layer:
//! - Caption fragment and error types shared by all providers
//! - `YouTubeCaptions`, the innertube-backed provider used in production
//! - Flattening of fragments into a single transcript string

mod error;
mod provider;
mod transcript;
mod youtube;

pub use error::CaptionsError;
pub use provider::{CaptionFragment, CaptionsProvider};
pub use transcript::{fetch_transcript, join_fragments};
pub use youtube::YouTubeCaptions;
