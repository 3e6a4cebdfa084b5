pub mod captions;
pub mod config;
pub mod extract;
pub mod http;
pub mod server;

pub use captions::{
    fetch_transcript, join_fragments, CaptionFragment, CaptionsError, CaptionsProvider,
    YouTubeCaptions,
};
pub use config::Config;
pub use extract::{extract_video_id, resolve_video_id};
pub use http::{create_router, AppState, TranscriptResponse};
pub use server::{ServerConfig, ServerHandle, TranscriptServer};
