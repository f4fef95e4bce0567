use std::collections::HashMap;

use futures::stream::{self, StreamExt};

use crate::analysis::shorts::{ShortsClassification, ShortsDetector};
use crate::video::VideoRecord;

impl ShortsDetector {
    /// Classifies every video in the batch and returns the verdicts keyed by
    /// video id. Runs as a bounded concurrent map so a future per-video
    /// enrichment step (tags, captions) can slot in without an API change;
    /// completion order never matters because the map is keyed.
    pub async fn detect_batch(
        &self,
        videos: &[VideoRecord],
    ) -> HashMap<String, ShortsClassification> {
        stream::iter(videos)
            .map(|video| async move { (video.id.clone(), self.detect(video)) })
            .buffer_unordered(self.config().batch_concurrency)
            .collect()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_batch_matches_individual_detection() {
        let detector = ShortsDetector::default();
        let videos = vec![
            VideoRecord::new("a", "PT20S").with_title("#shorts"),
            VideoRecord::new("b", "PT45S").with_title("no signals"),
            VideoRecord::new("c", "PT2M").with_title("long video"),
        ];

        let results = detector.detect_batch(&videos).await;
        assert_eq!(results.len(), 3);
        for video in &videos {
            assert_eq!(results[&video.id], detector.detect(video));
        }
    }

    #[tokio::test]
    async fn test_batch_of_empty_input() {
        let detector = ShortsDetector::default();
        let results = detector.detect_batch(&[]).await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_batch_larger_than_concurrency_bound() {
        let detector = ShortsDetector::default();
        let videos: Vec<VideoRecord> = (0..100)
            .map(|i| VideoRecord::new(format!("video-{}", i), "PT25S"))
            .collect();

        let results = detector.detect_batch(&videos).await;
        assert_eq!(results.len(), 100);
        assert!(results.values().all(|verdict| verdict.is_shorts));
    }
}
