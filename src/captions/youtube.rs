use super::{CaptionFragment, CaptionsError, CaptionsProvider};
use crate::config::YouTubeConfig;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

const PLAYER_PATH: &str = "/youtubei/v1/player";

// ============================================================================
// Innertube player response
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerResponse {
    playability_status: Option<PlayabilityStatus>,
    captions: Option<Captions>,
}

#[derive(Debug, Deserialize)]
struct PlayabilityStatus {
    status: String,
    reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Captions {
    player_captions_tracklist_renderer: Option<TracklistRenderer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TracklistRenderer {
    #[serde(default)]
    caption_tracks: Vec<CaptionTrack>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaptionTrack {
    base_url: String,
    language_code: String,
    /// `"asr"` for auto-generated tracks, absent for manually created ones
    kind: Option<String>,
}

impl CaptionTrack {
    fn is_generated(&self) -> bool {
        self.kind.as_deref() == Some("asr")
    }
}

// ============================================================================
// Timedtext (json3) response
// ============================================================================

#[derive(Debug, Deserialize)]
struct TimedText {
    #[serde(default)]
    events: Vec<TimedTextEvent>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimedTextEvent {
    #[serde(default)]
    t_start_ms: u64,
    #[serde(default)]
    d_duration_ms: u64,
    segs: Option<Vec<TimedTextSegment>>,
}

#[derive(Debug, Deserialize)]
struct TimedTextSegment {
    #[serde(default)]
    utf8: String,
}

// ============================================================================
// Provider
// ============================================================================

/// Captions provider backed by the video platform's innertube API
pub struct YouTubeCaptions {
    client: reqwest::Client,
    config: YouTubeConfig,
}

impl YouTubeCaptions {
    pub fn new(config: YouTubeConfig) -> Result<Self, CaptionsError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        info!(
            "YouTube captions provider ready (language={}, client={} {})",
            config.language, config.client_name, config.client_version
        );

        Ok(Self { client, config })
    }

    async fn fetch_player(&self, video_id: &str) -> Result<PlayerResponse, CaptionsError> {
        let url = format!(
            "{}{}?prettyPrint=false",
            self.config.base_url.trim_end_matches('/'),
            PLAYER_PATH
        );

        let body = serde_json::json!({
            "context": {
                "client": {
                    "clientName": self.config.client_name,
                    "clientVersion": self.config.client_version,
                    "hl": self.config.language,
                }
            },
            "videoId": video_id,
        });

        let res = self.client.post(&url).json(&body).send().await?;

        if !res.status().is_success() {
            return Err(CaptionsError::UpstreamStatus {
                status: res.status().as_u16(),
                url,
            });
        }

        res.json::<PlayerResponse>()
            .await
            .map_err(|e| CaptionsError::Parse(e.to_string()))
    }

    async fn fetch_track(&self, track: &CaptionTrack) -> Result<TimedText, CaptionsError> {
        let url = json3_url(&track.base_url)?;

        let res = self.client.get(url.clone()).send().await?;

        if !res.status().is_success() {
            return Err(CaptionsError::UpstreamStatus {
                status: res.status().as_u16(),
                url: url.to_string(),
            });
        }

        let body = res.text().await?;
        serde_json::from_str(&body).map_err(|e| CaptionsError::Parse(e.to_string()))
    }
}

#[async_trait::async_trait]
impl CaptionsProvider for YouTubeCaptions {
    async fn fetch_captions(&self, video_id: &str) -> Result<Vec<CaptionFragment>, CaptionsError> {
        if video_id.is_empty() {
            return Err(CaptionsError::InvalidVideoId(video_id.to_string()));
        }

        let player = self.fetch_player(video_id).await?;
        let tracks = caption_tracks(video_id, player)?;
        let track = select_track(&tracks, video_id, &self.config.language)?;

        debug!(
            "Selected {} track ({}) for {}",
            if track.is_generated() { "generated" } else { "manual" },
            track.language_code,
            video_id
        );

        let timed_text = self.fetch_track(track).await?;
        Ok(into_fragments(timed_text))
    }

    fn name(&self) -> &str {
        "youtube"
    }
}

/// Check playability and pull the caption track list out of a player response.
fn caption_tracks(
    video_id: &str,
    player: PlayerResponse,
) -> Result<Vec<CaptionTrack>, CaptionsError> {
    if let Some(status) = player.playability_status {
        if status.status != "OK" {
            return Err(CaptionsError::VideoUnavailable {
                video_id: video_id.to_string(),
                reason: status.reason.unwrap_or(status.status),
            });
        }
    }

    let tracks = player
        .captions
        .and_then(|c| c.player_captions_tracklist_renderer)
        .map(|r| r.caption_tracks)
        .unwrap_or_default();

    if tracks.is_empty() {
        return Err(CaptionsError::TranscriptsDisabled(video_id.to_string()));
    }

    Ok(tracks)
}

/// Pick the track for `language`, preferring manually created over generated.
fn select_track<'a>(
    tracks: &'a [CaptionTrack],
    video_id: &str,
    language: &str,
) -> Result<&'a CaptionTrack, CaptionsError> {
    let mut candidates = tracks.iter().filter(|t| t.language_code == language);

    candidates
        .clone()
        .find(|t| !t.is_generated())
        .or_else(|| candidates.next())
        .ok_or_else(|| CaptionsError::NoTranscriptFound {
            video_id: video_id.to_string(),
            language: language.to_string(),
        })
}

/// Rewrite a track URL to request the json3 timedtext format.
fn json3_url(base_url: &str) -> Result<Url, CaptionsError> {
    let mut url = Url::parse(base_url)
        .map_err(|e| CaptionsError::Parse(format!("bad caption track URL: {}", e)))?;

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != "fmt")
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(pairs)
        .append_pair("fmt", "json3");

    Ok(url)
}

/// Convert timedtext events into fragments, dropping whitespace-only events.
fn into_fragments(timed_text: TimedText) -> Vec<CaptionFragment> {
    timed_text
        .events
        .into_iter()
        .filter_map(|event| {
            let text: String = event.segs?.into_iter().map(|s| s.utf8).collect();
            if text.trim().is_empty() {
                return None;
            }
            Some(CaptionFragment {
                text,
                start: event.t_start_ms as f64 / 1000.0,
                duration: event.d_duration_ms as f64 / 1000.0,
            })
        })
        .collect()
}
