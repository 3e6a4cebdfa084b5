#![allow(dead_code)]

// Shared test doubles for the captions provider

use std::sync::Mutex;
use yt_transcript::{CaptionFragment, CaptionsError, CaptionsProvider};

/// Provider returning canned fragments or a canned error, recording each call
pub struct StubProvider {
    outcome: Result<Vec<String>, String>,
    calls: Mutex<Vec<String>>,
}

impl StubProvider {
    pub fn with_texts(texts: &[&str]) -> Self {
        Self {
            outcome: Ok(texts.iter().map(|t| t.to_string()).collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl CaptionsProvider for StubProvider {
    async fn fetch_captions(&self, video_id: &str) -> Result<Vec<CaptionFragment>, CaptionsError> {
        self.calls.lock().unwrap().push(video_id.to_string());

        match &self.outcome {
            Ok(texts) => Ok(texts
                .iter()
                .enumerate()
                .map(|(i, text)| CaptionFragment::new(text.clone(), i as f64, 1.0))
                .collect()),
            Err(message) => Err(CaptionsError::Provider(message.clone())),
        }
    }

    fn name(&self) -> &str {
        "stub"
    }
}
