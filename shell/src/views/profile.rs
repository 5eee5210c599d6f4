use crate::views::video_card::{VideoCard, cards};

use serde::Serialize;
use vh_core::{ChannelStats, Identity, MockCatalog, format_views};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfilePage {
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub uploads: usize,
    pub total_views: String,
    pub videos: Vec<VideoCard>,
}

impl ProfilePage {
    // Every catalog video is treated as the signed-in user's upload.
    pub fn render(identity: &Identity, catalog: &MockCatalog) -> Self {
        let stats = ChannelStats::from_videos(catalog.all());

        Self {
            name: identity.name.clone(),
            email: identity.email.clone(),
            avatar: identity.avatar.clone(),
            uploads: stats.upload_count,
            total_views: format_views(stats.total_views),
            videos: cards(catalog.all()),
        }
    }
}
