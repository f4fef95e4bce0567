use serde::{Deserialize, Serialize};

use crate::analysis::shorts::ShortsDetector;
use crate::video::VideoRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelFormat {
    Shorts,
    Longform,
    Live,
    Mixed,
}

impl ChannelFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shorts => "shorts",
            Self::Longform => "longform",
            Self::Live => "live",
            Self::Mixed => "mixed",
        }
    }

    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "shorts" => Some(Self::Shorts),
            "longform" => Some(Self::Longform),
            "live" => Some(Self::Live),
            "mixed" => Some(Self::Mixed),
            _ => None,
        }
    }
}

/// Percentage share per content bucket. Each bucket is rounded
/// independently, so the three values may not sum exactly to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    pub shorts: u32,
    pub longform: u32,
    pub live: u32,
}

impl Distribution {
    pub const ZERO: Self = Self {
        shorts: 0,
        longform: 0,
        live: 0,
    };
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormatDistribution {
    pub format: ChannelFormat,
    pub distribution: Distribution,
}

impl ShortsDetector {
    /// Determines the dominant content format of a channel from its video
    /// list. Every video lands in exactly one bucket: Shorts verdicts win,
    /// then live-stream keywords in the title, then long-form as the rest.
    pub fn detect_dominant_format(&self, videos: &[VideoRecord]) -> FormatDistribution {
        if videos.is_empty() {
            return FormatDistribution {
                format: ChannelFormat::Mixed,
                distribution: Distribution::ZERO,
            };
        }

        let mut shorts = 0usize;
        let mut longform = 0usize;
        let mut live = 0usize;

        for video in videos {
            if self.detect(video).is_shorts {
                shorts += 1;
            } else if self.is_live_title(&video.title) {
                live += 1;
            } else {
                longform += 1;
            }
        }

        let total = videos.len();
        let distribution = Distribution {
            shorts: percentage(shorts, total),
            longform: percentage(longform, total),
            live: percentage(live, total),
        };

        // Majority first; otherwise the largest bucket wins, with ties
        // resolved in shorts, longform, live check order.
        let format = if distribution.shorts >= 50 {
            ChannelFormat::Shorts
        } else if distribution.longform >= 50 {
            ChannelFormat::Longform
        } else if distribution.live >= 50 {
            ChannelFormat::Live
        } else {
            let max = shorts.max(longform).max(live);
            if shorts == max {
                ChannelFormat::Shorts
            } else if longform == max {
                ChannelFormat::Longform
            } else {
                ChannelFormat::Live
            }
        };

        FormatDistribution {
            format,
            distribution,
        }
    }

    fn is_live_title(&self, title: &str) -> bool {
        let title = title.to_lowercase();
        self.config()
            .live_keywords
            .iter()
            .any(|keyword| title.contains(keyword.to_lowercase().as_str()))
    }
}

fn percentage(count: usize, total: usize) -> u32 {
    ((count * 100) as f64 / total as f64).round() as u32
}
