use crate::views::video_card::{VideoCard, cards};

use serde::Serialize;
use vh_core::{MockCatalog, Video, format_date, format_duration, format_views};

const RELATED_LIMIT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelSummary {
    pub name: String,
    pub avatar: String,
    pub subscribers: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoPage {
    pub id: String,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub duration: String,
    pub views: String,
    pub likes: String,
    pub uploaded: String,
    pub category: &'static str,
    pub tags: Vec<String>,
    pub channel: ChannelSummary,
    pub related: Vec<VideoCard>,
}

impl VideoPage {
    /// Unknown ids fall back to the first catalog video.
    pub fn render(id: &str, catalog: &MockCatalog) -> Option<Self> {
        let video = catalog.find_or_default(id)?;
        Some(Self::from_video(video, catalog))
    }

    fn from_video(video: &Video, catalog: &MockCatalog) -> Self {
        Self {
            id: video.id.clone(),
            title: video.title.clone(),
            description: video.description.clone(),
            video_url: video.video_url.clone(),
            duration: format_duration(video.duration),
            views: format!("{} views", format_views(video.views)),
            likes: format_views(video.likes),
            uploaded: format_date(&video.uploaded_at),
            category: video.category.label(),
            tags: video.tags.clone(),
            channel: ChannelSummary {
                name: video.creator.name.clone(),
                avatar: video.creator.avatar.clone(),
                subscribers: format!("{} subscribers", format_views(video.creator.subscribers)),
            },
            related: cards(catalog.related(&video.id, RELATED_LIMIT)),
        }
    }
}
