use serde::Serialize;

use crate::analysis::duration::parse_duration;
use crate::config::DetectionConfig;
use crate::video::VideoRecord;

/// Base score awarded for a duration within the Shorts cutoff.
const DURATION_SCORE: f32 = 0.5;
/// Bonus for a Shorts keyword in the title or description.
const KEYWORD_SCORE: f32 = 0.3;
/// Bonus for a portrait (vertical) thumbnail.
const PORTRAIT_SCORE: f32 = 0.1;
/// Bonus for a short, emoji-styled title.
const TITLE_SCORE: f32 = 0.1;
/// Bonus for very short duration.
const VERY_SHORT_SCORE: f32 = 0.1;

const SHORT_TITLE_MAX_CHARS: usize = 50;

/// Per-video classification verdict. Recomputed on demand, never cached or
/// mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortsClassification {
    pub is_shorts: bool,
    pub confidence: f32,
    pub reasons: Vec<String>,
    pub duration_seconds: u64,
}

/// Deterministic Shorts classifier. Combines one hard constraint (duration)
/// with additive soft signals from keywords, thumbnail aspect ratio, title
/// style and extra brevity.
#[derive(Debug, Clone)]
pub struct ShortsDetector {
    config: DetectionConfig,
}

impl ShortsDetector {
    pub fn new(config: DetectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    pub fn detect(&self, video: &VideoRecord) -> ShortsClassification {
        let duration_seconds = parse_duration(&video.duration);

        // Hard cutoff: anything over the limit is disqualified outright,
        // soft signals are not even evaluated.
        if duration_seconds > self.config.max_shorts_duration_secs {
            return ShortsClassification {
                is_shorts: false,
                confidence: 0.0,
                reasons: vec![format!(
                    "Duration too long: {}s (> {}s)",
                    duration_seconds, self.config.max_shorts_duration_secs
                )],
                duration_seconds,
            };
        }

        let mut confidence = DURATION_SCORE;
        let mut reasons = vec![format!(
            "Duration qualifies: {}s (<= {}s)",
            duration_seconds, self.config.max_shorts_duration_secs
        )];

        let haystack = format!("{} {}", video.title, video.description).to_lowercase();
        if let Some(keyword) = self
            .config
            .shorts_keywords
            .iter()
            .find(|keyword| haystack.contains(keyword.to_lowercase().as_str()))
        {
            confidence += KEYWORD_SCORE;
            reasons.push(format!("Shorts keyword found: {}", keyword));
        }

        if let Some(thumbnail) = video.thumbnails.as_ref().and_then(|set| set.best()) {
            if let (Some(width), Some(height)) = (thumbnail.width, thumbnail.height) {
                if height > width {
                    confidence += PORTRAIT_SCORE;
                    reasons.push(format!("Portrait thumbnail: {}x{}", width, height));
                }
            }
        }

        if video.title.chars().count() < SHORT_TITLE_MAX_CHARS && contains_emoji(&video.title) {
            confidence += TITLE_SCORE;
            reasons.push("Short emoji-styled title".to_string());
        }

        if duration_seconds <= self.config.very_short_duration_secs {
            confidence += VERY_SHORT_SCORE;
            reasons.push(format!(
                "Very short duration: {}s (<= {}s)",
                duration_seconds, self.config.very_short_duration_secs
            ));
        }

        let confidence = confidence.min(1.0);

        ShortsClassification {
            is_shorts: confidence >= self.config.confidence_threshold,
            confidence,
            reasons,
            duration_seconds,
        }
    }
}

impl Default for ShortsDetector {
    fn default() -> Self {
        Self::new(DetectionConfig::default())
    }
}

fn contains_emoji(text: &str) -> bool {
    text.chars().any(|c| {
        matches!(
            c as u32,
            0x1F300..=0x1F5FF // symbols and pictographs
            | 0x1F600..=0x1F64F // emoticons
            | 0x1F680..=0x1F6FF // transport and map symbols
            | 0x1F900..=0x1F9FF // supplemental symbols
            | 0x1FA70..=0x1FAFF // extended pictographs
            | 0x2600..=0x26FF // miscellaneous symbols
            | 0x2700..=0x27BF // dingbats
        )
    })
}
