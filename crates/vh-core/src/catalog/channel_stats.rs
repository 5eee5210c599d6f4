use crate::Video;

use serde::Serialize;

/// Aggregates shown in the profile header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct ChannelStats {
    pub upload_count: usize,
    pub total_views: u64,
}

impl ChannelStats {
    pub fn from_videos<'a>(videos: impl IntoIterator<Item = &'a Video>) -> Self {
        videos
            .into_iter()
            .fold(Self::default(), |acc, video| Self {
                upload_count: acc.upload_count + 1,
                total_views: acc.total_views + video.views,
            })
    }
}
