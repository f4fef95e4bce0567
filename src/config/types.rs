use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub show_timestamps: bool,
    pub colored_output: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            show_timestamps: true,
            colored_output: true,
        }
    }
}

/// Tunable thresholds and keyword sets for Shorts detection. The signal
/// weights themselves are compile-time constants so the scoring contract
/// cannot drift per deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Hard duration cutoff; anything longer is never a Short.
    pub max_shorts_duration_secs: u64,
    /// Durations at or below this earn the very-short bonus.
    pub very_short_duration_secs: u64,
    /// Minimum confidence for an is-Shorts verdict (inclusive).
    pub confidence_threshold: f32,
    /// Concurrency bound for batch classification.
    pub batch_concurrency: usize,
    pub shorts_keywords: Vec<String>,
    pub live_keywords: Vec<String>,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            max_shorts_duration_secs: 60,
            very_short_duration_secs: 30,
            confidence_threshold: 0.6,
            batch_concurrency: 16,
            shorts_keywords: [
                "#shorts",
                "#쇼츠",
                "shorts",
                "쇼츠",
                "#short",
                "#ytshorts",
                "#youtubeshorts",
                "#yt",
                "#youtube",
            ]
            .map(String::from)
            .to_vec(),
            live_keywords: ["live", "라이브", "생방송", "스트리밍", "streaming", "방송"]
                .map(String::from)
                .to_vec(),
        }
    }
}
