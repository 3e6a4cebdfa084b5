use super::state::AppState;
use crate::captions::fetch_transcript;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

// ============================================================================
// Response Types
// ============================================================================

/// Response envelope: `{"success": true, "transcript": ...}` or
/// `{"success": false, "error": ...}`
///
/// Build it with [`TranscriptResponse::success`] or [`TranscriptResponse::failure`]
/// so `success` always matches the payload field that is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptResponse {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TranscriptResponse {
    pub fn success(transcript: String) -> Self {
        Self {
            success: true,
            transcript: Some(transcript),
            error: None,
        }
    }

    pub fn failure(error: String) -> Self {
        Self {
            success: false,
            transcript: None,
            error: Some(error),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /transcript/:video_id
/// Fetch the caption track and return it as one space-joined string
pub async fn get_transcript(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> impl IntoResponse {
    info!("Fetching transcript for video: {}", video_id);

    match fetch_transcript(state.provider.as_ref(), &video_id).await {
        Ok(transcript) => {
            info!(
                "Transcript ready for video {} ({} chars)",
                video_id,
                transcript.len()
            );
            (StatusCode::OK, Json(TranscriptResponse::success(transcript))).into_response()
        }
        Err(e) => {
            warn!("Transcript retrieval failed for video {}: {}", video_id, e);
            (
                StatusCode::BAD_REQUEST,
                Json(TranscriptResponse::failure(e.to_string())),
            )
                .into_response()
        }
    }
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
