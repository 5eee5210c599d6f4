use serde::Serialize;
use vh_core::{Video, format_date, format_duration, format_views};

/// Compact listing entry used by every video grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoCard {
    pub id: String,
    pub title: String,
    pub thumbnail_url: String,
    pub duration: String,
    pub views: String,
    pub uploaded: String,
    pub creator: String,
    pub href: String,
}

impl From<&Video> for VideoCard {
    fn from(video: &Video) -> Self {
        Self {
            id: video.id.clone(),
            title: video.title.clone(),
            thumbnail_url: video.thumbnail_url.clone(),
            duration: format_duration(video.duration),
            views: format!("{} views", format_views(video.views)),
            uploaded: format_date(&video.uploaded_at),
            creator: video.creator.name.clone(),
            href: format!("/video/{}", video.id),
        }
    }
}

pub fn cards<'a>(videos: impl IntoIterator<Item = &'a Video>) -> Vec<VideoCard> {
    videos.into_iter().map(VideoCard::from).collect()
}
