use thiserror::Error;

/// Failure to retrieve captions for a video.
///
/// Callers outside this module treat every variant the same way; the variants
/// exist so the message is specific.
#[derive(Debug, Error)]
pub enum CaptionsError {
    #[error("Invalid video id: {0:?}")]
    InvalidVideoId(String),

    #[error("The video {video_id} is unavailable: {reason}")]
    VideoUnavailable { video_id: String, reason: String },

    #[error("Subtitles are disabled for the video {0}")]
    TranscriptsDisabled(String),

    #[error("No transcripts were found for the video {video_id} in language {language:?}")]
    NoTranscriptFound { video_id: String, language: String },

    #[error("Captions request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Captions provider returned HTTP {status} for {url}")]
    UpstreamStatus { status: u16, url: String },

    #[error("Failed to parse captions response: {0}")]
    Parse(String),

    /// Provider-specific failure with a free-form message
    #[error("{0}")]
    Provider(String),
}
