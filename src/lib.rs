pub mod analysis;
pub mod cli;
pub mod config;
pub mod utils;
pub mod video;

pub use analysis::{
    parse_duration, ChannelFormat, Distribution, FormatDistribution, ShortsClassification,
    ShortsDetector, ShortsStats,
};
pub use config::{Config, DetectionConfig, LoggingConfig};
pub use utils::{setup_logging, Error, Result};
pub use video::{Thumbnail, ThumbnailSet, VideoRecord, VideoRow, VideoStatistics};
