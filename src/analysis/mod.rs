pub mod batch;
pub mod duration;
pub mod format;
pub mod shorts;
pub mod stats;

pub use duration::parse_duration;
pub use format::{ChannelFormat, Distribution, FormatDistribution};
pub use shorts::{ShortsClassification, ShortsDetector};
pub use stats::ShortsStats;
