pub mod catalog;
pub mod error;
pub mod format;
pub mod models;

pub use catalog::{MockCatalog, channel_stats::ChannelStats};
pub use error::{CoreError, Result};
pub use format::{format_date, format_date_str, format_duration, format_views};
pub use models::creator::Creator;
pub use models::identity::Identity;
pub use models::video::Video;
pub use models::video_category::VideoCategory;

#[cfg(test)]
mod tests;
