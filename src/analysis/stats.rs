use serde::Serialize;

use crate::analysis::format::{ChannelFormat, Distribution};
use crate::analysis::shorts::ShortsDetector;
use crate::video::VideoRecord;

/// Channel-level rollup over a list of videos. Recomputed from scratch on
/// every call; callers that need caching keep it on their side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortsStats {
    pub total_videos: usize,
    pub total_shorts: usize,
    pub shorts_percentage: u32,
    pub average_duration: u64,
    pub dominant_format: ChannelFormat,
    pub distribution: Distribution,
}

impl ShortsDetector {
    pub fn calculate_stats(&self, videos: &[VideoRecord]) -> ShortsStats {
        let format = self.detect_dominant_format(videos);

        let mut total_shorts = 0usize;
        let mut total_duration = 0u64;
        for video in videos {
            let verdict = self.detect(video);
            if verdict.is_shorts {
                total_shorts += 1;
            }
            total_duration += verdict.duration_seconds;
        }

        let total_videos = videos.len();
        let (shorts_percentage, average_duration) = if total_videos == 0 {
            (0, 0)
        } else {
            (
                ((total_shorts * 100) as f64 / total_videos as f64).round() as u32,
                (total_duration as f64 / total_videos as f64).round() as u64,
            )
        };

        ShortsStats {
            total_videos,
            total_shorts,
            shorts_percentage,
            average_duration,
            dominant_format: format.format,
            distribution: format.distribution,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_input_yields_zeroed_stats() {
        let detector = ShortsDetector::default();
        let stats = detector.calculate_stats(&[]);

        assert_eq!(stats.total_videos, 0);
        assert_eq!(stats.total_shorts, 0);
        assert_eq!(stats.shorts_percentage, 0);
        assert_eq!(stats.average_duration, 0);
        assert_eq!(stats.dominant_format, ChannelFormat::Mixed);
        assert_eq!(stats.distribution, Distribution::ZERO);
    }

    #[test]
    fn test_mixed_channel_stats() {
        let detector = ShortsDetector::default();
        let videos = vec![
            VideoRecord::new("a", "PT20S").with_title("#shorts"),
            VideoRecord::new("b", "PT30S").with_title("quick clip"),
            VideoRecord::new("c", "PT10M").with_title("Full tutorial"),
        ];

        let stats = detector.calculate_stats(&videos);
        assert_eq!(stats.total_videos, 3);
        assert_eq!(stats.total_shorts, 2);
        assert_eq!(stats.shorts_percentage, 67);
        // (20 + 30 + 600) / 3 = 216.67, rounded.
        assert_eq!(stats.average_duration, 217);
        assert_eq!(stats.dominant_format, ChannelFormat::Shorts);
    }

    #[test]
    fn test_total_shorts_matches_individual_verdicts() {
        let detector = ShortsDetector::default();
        let videos = vec![
            VideoRecord::new("a", "PT15S").with_title("#shorts"),
            VideoRecord::new("b", "PT45S").with_title("no signals here"),
            VideoRecord::new("c", "PT59S").with_title("#ytshorts clip"),
            VideoRecord::new("d", "PT3M"),
        ];

        let expected = videos
            .iter()
            .filter(|video| detector.detect(video).is_shorts)
            .count();
        assert_eq!(detector.calculate_stats(&videos).total_shorts, expected);
    }
}
