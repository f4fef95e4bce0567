use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw video metadata as delivered by the YouTube Data API (camelCase
/// field names, numeric counters as strings). Everything beyond the id is
/// optional or may be empty; classification degrades gracefully around
/// whatever is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    pub id: String,
    #[serde(default)]
    pub channel_id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// ISO-8601 duration string, e.g. "PT1M30S".
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub thumbnails: Option<ThumbnailSet>,
    #[serde(default)]
    pub statistics: Option<VideoStatistics>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThumbnailSet {
    #[serde(default)]
    pub default: Option<Thumbnail>,
    #[serde(default)]
    pub medium: Option<Thumbnail>,
    #[serde(default)]
    pub high: Option<Thumbnail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    #[serde(default)]
    pub view_count: Option<String>,
    #[serde(default)]
    pub like_count: Option<String>,
    #[serde(default)]
    pub comment_count: Option<String>,
}

impl ThumbnailSet {
    /// Highest-available-resolution variant, in priority order
    /// high > medium > default.
    pub fn best(&self) -> Option<&Thumbnail> {
        self.high
            .as_ref()
            .or(self.medium.as_ref())
            .or(self.default.as_ref())
    }
}

impl VideoRecord {
    pub fn new<I: Into<String>, D: Into<String>>(id: I, duration: D) -> Self {
        Self {
            id: id.into(),
            channel_id: None,
            title: String::new(),
            description: String::new(),
            duration: duration.into(),
            published_at: None,
            thumbnails: None,
            statistics: None,
        }
    }

    pub fn with_title<T: Into<String>>(mut self, title: T) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description<T: Into<String>>(mut self, description: T) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_channel_id<T: Into<String>>(mut self, channel_id: T) -> Self {
        self.channel_id = Some(channel_id.into());
        self
    }

    pub fn with_published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = Some(published_at);
        self
    }

    pub fn with_thumbnails(mut self, thumbnails: ThumbnailSet) -> Self {
        self.thumbnails = Some(thumbnails);
        self
    }

    pub fn with_statistics(mut self, statistics: VideoStatistics) -> Self {
        self.statistics = Some(statistics);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn thumb(width: u32, height: u32) -> Thumbnail {
        Thumbnail {
            url: format!("https://i.ytimg.com/vi/x/{}x{}.jpg", width, height),
            width: Some(width),
            height: Some(height),
        }
    }

    #[test]
    fn test_deserialize_api_shape() {
        let json = r#"{
            "id": "dQw4w9WgXcQ",
            "channelId": "UC123",
            "title": "Test video",
            "description": "desc",
            "duration": "PT45S",
            "publishedAt": "2024-03-01T12:00:00Z",
            "thumbnails": {
                "default": {"url": "https://i.ytimg.com/d.jpg", "width": 120, "height": 90},
                "high": {"url": "https://i.ytimg.com/h.jpg", "width": 480, "height": 360}
            },
            "statistics": {"viewCount": "1234", "likeCount": "56"}
        }"#;

        let video: VideoRecord = serde_json::from_str(json).unwrap();
        assert_eq!(video.id, "dQw4w9WgXcQ");
        assert_eq!(video.channel_id.as_deref(), Some("UC123"));
        assert_eq!(video.duration, "PT45S");
        let stats = video.statistics.unwrap();
        assert_eq!(stats.view_count.as_deref(), Some("1234"));
        assert_eq!(stats.comment_count, None);
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let video: VideoRecord =
            serde_json::from_str(r#"{"id": "abc", "duration": "PT1M"}"#).unwrap();
        assert_eq!(video.title, "");
        assert!(video.thumbnails.is_none());
        assert!(video.statistics.is_none());
    }

    #[test]
    fn test_best_thumbnail_priority() {
        let set = ThumbnailSet {
            default: Some(thumb(120, 90)),
            medium: Some(thumb(320, 180)),
            high: Some(thumb(480, 360)),
        };
        assert_eq!(set.best().unwrap().width, Some(480));

        let set = ThumbnailSet {
            default: Some(thumb(120, 90)),
            medium: Some(thumb(320, 180)),
            high: None,
        };
        assert_eq!(set.best().unwrap().width, Some(320));

        let set = ThumbnailSet {
            default: None,
            medium: None,
            high: None,
        };
        assert!(set.best().is_none());
    }
}
