use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analysis::ShortsClassification;
use crate::video::record::VideoRecord;

/// Flat storage projection of a video plus its classification verdict, in
/// the row shape an external persistence collaborator expects. One-way: the
/// analysis layer never reads these back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoRow {
    pub video_id: String,
    pub channel_id: String,
    pub title: String,
    pub description: String,
    pub duration_seconds: u64,
    pub is_shorts: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
    pub thumbnail_url: Option<String>,
    /// Always empty at this layer; tag enrichment happens elsewhere.
    pub tags: Vec<String>,
}

impl VideoRow {
    pub fn project(video: &VideoRecord, verdict: &ShortsClassification) -> Self {
        let statistics = video.statistics.as_ref();

        Self {
            video_id: video.id.clone(),
            channel_id: video.channel_id.clone().unwrap_or_default(),
            title: video.title.clone(),
            description: video.description.clone(),
            duration_seconds: verdict.duration_seconds,
            is_shorts: verdict.is_shorts,
            published_at: video.published_at,
            view_count: parse_count(statistics.and_then(|s| s.view_count.as_deref())),
            like_count: parse_count(statistics.and_then(|s| s.like_count.as_deref())),
            comment_count: parse_count(statistics.and_then(|s| s.comment_count.as_deref())),
            thumbnail_url: video
                .thumbnails
                .as_ref()
                .and_then(|set| set.best())
                .map(|thumbnail| thumbnail.url.clone()),
            tags: Vec::new(),
        }
    }
}

// YouTube API counters arrive as numeric strings; anything unparseable
// defaults to 0.
fn parse_count(value: Option<&str>) -> u64 {
    value.and_then(|v| v.parse().ok()).unwrap_or(0)
}
