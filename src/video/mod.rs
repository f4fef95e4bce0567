pub mod record;
pub mod row;

pub use record::{Thumbnail, ThumbnailSet, VideoRecord, VideoStatistics};
pub use row::VideoRow;
