use super::CaptionsError;
use serde::{Deserialize, Serialize};

/// One timed unit of caption text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionFragment {
    /// Captioned text for this interval
    pub text: String,

    /// Offset from the start of the video, in seconds
    pub start: f64,

    /// How long the fragment stays on screen, in seconds
    pub duration: f64,
}

impl CaptionFragment {
    pub fn new(text: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            text: text.into(),
            start,
            duration,
        }
    }
}

/// Source of caption tracks
///
/// Implementations:
/// - `YouTubeCaptions`: innertube player API + timedtext download
/// - Test stubs: canned fragments or errors
#[async_trait::async_trait]
pub trait CaptionsProvider: Send + Sync {
    /// Fetch the caption track for a video, in playback order
    async fn fetch_captions(&self, video_id: &str) -> Result<Vec<CaptionFragment>, CaptionsError>;

    /// Get provider name for logging
    fn name(&self) -> &str;
}
