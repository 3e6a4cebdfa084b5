use super::{CaptionFragment, CaptionsError, CaptionsProvider};
use tracing::debug;

/// Join fragment texts in order with single spaces.
pub fn join_fragments(fragments: &[CaptionFragment]) -> String {
    fragments
        .iter()
        .map(|fragment| fragment.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Fetch captions for `video_id` and flatten them into plain text.
///
/// Makes exactly one provider call. A failed call yields no text at all.
pub async fn fetch_transcript(
    provider: &dyn CaptionsProvider,
    video_id: &str,
) -> Result<String, CaptionsError> {
    let fragments = provider.fetch_captions(video_id).await?;

    debug!(
        "{} returned {} fragments for {}",
        provider.name(),
        fragments.len(),
        video_id
    );

    Ok(join_fragments(&fragments))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_two_fragments() {
        let fragments = vec![
            CaptionFragment::new("Hello", 0.0, 1.0),
            CaptionFragment::new("world", 1.0, 1.0),
        ];
        assert_eq!(join_fragments(&fragments), "Hello world");
    }

    #[test]
    fn test_join_single_fragment() {
        let fragments = vec![CaptionFragment::new("Solo", 0.0, 2.5)];
        assert_eq!(join_fragments(&fragments), "Solo");
    }

    #[test]
    fn test_join_empty() {
        assert_eq!(join_fragments(&[]), "");
    }

    #[test]
    fn test_join_ignores_timing() {
        // Order is sequence order, not start time
        let fragments = vec![
            CaptionFragment::new("b", 5.0, 1.0),
            CaptionFragment::new("a", 0.0, 1.0),
        ];
        assert_eq!(join_fragments(&fragments), "b a");
    }
}
